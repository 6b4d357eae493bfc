//=========================================================================
// Score Scene
//=========================================================================
//
// Final score plus a play-again prompt with two choices:
// - "¡Sí!" → `NewGame`
// - "No"   → `Quit` (the controller ends the run)
//
// Choice hit boxes are the rendered label bounds. "No" is tested first.
//
//=========================================================================

use super::{draw_background, Scene, SceneContext, SceneKind, SceneToken};
use crate::core::catalog::GameAssets;
use crate::core::config::GameConfig;
use crate::core::geometry::{Point, Rect};
use crate::core::render::{Canvas, Color, ImageHandle, OPAQUE};

//=== Constants ===========================================================

const HEADING_POSITION: Point = Point::new(500, 50);
const SCORE_POSITION: Point = Point::new(620, 180);
const PROMPT_POSITION: Point = Point::new(380, 300);
const YES_POSITION: Point = Point::new(500, 450);
const NO_POSITION: Point = Point::new(650, 450);

//=== ScoreScene ==========================================================

pub struct ScoreScene {
    score: u32,
    background: ImageHandle,
    heading: ImageHandle,
    value: ImageHandle,
    prompt: ImageHandle,
    yes: ImageHandle,
    no: ImageHandle,
    yes_rect: Rect,
    no_rect: Rect,
}

impl ScoreScene {
    pub fn new(config: &GameConfig, assets: &GameAssets, score: u32) -> Self {
        let size = config.label_font_size;
        let yes = assets.label("¡Sí!", size, Color::GREEN, Some(Color::NAVY_BLUE));
        let no = assets.label("No", size, Color::RED, Some(Color::NAVY_BLUE));

        Self {
            score,
            background: assets.background.clone(),
            heading: assets.label("Puntuación", config.heading_font_size, Color::PURPLE, None),
            value: assets.label(&score.to_string(), size, Color::PURPLE, None),
            prompt: assets.label("¿Volver a jugar?", size, Color::PURPLE, None),
            yes_rect: Rect::at(YES_POSITION, yes.size()),
            no_rect: Rect::at(NO_POSITION, no.size()),
            yes,
            no,
        }
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn yes_rect(&self) -> Rect {
        self.yes_rect
    }

    pub fn no_rect(&self) -> Rect {
        self.no_rect
    }
}

impl Scene for ScoreScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Score
    }

    fn handle_click(&mut self, position: Point, _ctx: &mut SceneContext<'_>) -> Option<SceneToken> {
        if self.no_rect.contains(position) {
            Some(SceneToken::Quit)
        } else if self.yes_rect.contains(position) {
            Some(SceneToken::NewGame)
        } else {
            None
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_background(canvas, &self.background);
        canvas.blit(&self.heading, HEADING_POSITION, OPAQUE);
        canvas.blit(&self.value, SCORE_POSITION, OPAQUE);
        canvas.blit(&self.prompt, PROMPT_POSITION, OPAQUE);
        canvas.blit(&self.yes, YES_POSITION, OPAQUE);
        canvas.blit(&self.no, NO_POSITION, OPAQUE);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
