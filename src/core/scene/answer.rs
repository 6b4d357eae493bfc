//=========================================================================
// Answer Scene
//=========================================================================
//
// Correct/incorrect feedback. The follow-up token is decided by the
// controller at construction (`Score` once the game is over, otherwise
// `NextGame`); the scene only hands it back on an arrow click.
//
//=========================================================================

use super::{draw_background, AdvanceButton, Outcome, Scene, SceneContext, SceneKind, SceneToken};
use crate::core::catalog::GameAssets;
use crate::core::config::GameConfig;
use crate::core::geometry::Point;
use crate::core::render::{Canvas, Color, ImageHandle, OPAQUE};

const LABEL_POSITION: Point = Point::new(500, 40);
const IMAGE_POSITION: Point = Point::new(490, 180);

pub struct AnswerScene {
    outcome: Outcome,
    background: ImageHandle,
    image: ImageHandle,
    label: ImageHandle,
    advance: AdvanceButton,
}

impl AnswerScene {
    pub fn new(config: &GameConfig, assets: &GameAssets, outcome: Outcome, next: SceneToken) -> Self {
        let (image, text, color) = match outcome {
            Outcome::Correct => (assets.correct.clone(), "¡Correcto!", Color::GREEN),
            Outcome::Incorrect => (assets.incorrect.clone(), "¡Incorrecto!", Color::RED),
        };

        Self {
            outcome,
            background: assets.background.clone(),
            image,
            label: assets.label(text, config.label_font_size, color, None),
            advance: AdvanceButton::new(assets.arrow.clone(), next, config.fade.arm_delay),
        }
    }

    pub fn outcome(&self) -> Outcome {
        self.outcome
    }

    /// Token returned by the advance arrow.
    pub fn next(&self) -> SceneToken {
        self.advance.token()
    }
}

impl Scene for AnswerScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Answer(self.outcome)
    }

    fn handle_click(&mut self, position: Point, ctx: &mut SceneContext<'_>) -> Option<SceneToken> {
        self.advance.click(position, ctx)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_background(canvas, &self.background);
        canvas.blit(&self.label, LABEL_POSITION, OPAQUE);
        canvas.blit(&self.image, IMAGE_POSITION, OPAQUE);
        self.advance.draw(canvas);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
