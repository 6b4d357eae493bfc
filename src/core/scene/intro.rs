//=========================================================================
// Intro Scene
//=========================================================================
//
// Title screen: the game name and the advance arrow.
//
//=========================================================================

use super::{draw_background, AdvanceButton, Scene, SceneContext, SceneKind, SceneToken};
use crate::core::catalog::GameAssets;
use crate::core::config::GameConfig;
use crate::core::geometry::Point;
use crate::core::render::{Canvas, Color, ImageHandle, OPAQUE};

const TITLE: &str = "Memory";
const TITLE_POSITION: Point = Point::new(500, 334);

pub struct IntroScene {
    background: ImageHandle,
    title: ImageHandle,
    advance: AdvanceButton,
}

impl IntroScene {
    pub fn new(config: &GameConfig, assets: &GameAssets) -> Self {
        Self {
            background: assets.background.clone(),
            title: assets.label(TITLE, config.label_font_size, Color::PURPLE, None),
            advance: AdvanceButton::new(assets.arrow.clone(), SceneToken::NextGame, config.fade.arm_delay),
        }
    }
}

impl Scene for IntroScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Intro
    }

    fn handle_click(&mut self, position: Point, ctx: &mut SceneContext<'_>) -> Option<SceneToken> {
        self.advance.click(position, ctx)
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_background(canvas, &self.background);
        canvas.blit(&self.title, TITLE_POSITION, OPAQUE);
        self.advance.draw(canvas);
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
