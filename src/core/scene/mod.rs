//=========================================================================
// Scene System
//=========================================================================
//
// One scene is active at a time. Scenes never switch themselves: a click
// returns a `SceneToken` and the controller decides what to build next.
//
// Architecture:
//   GameController
//     └─ scene: Box<dyn Scene>
//           ├─ IntroScene
//           ├─ GameScene   (memorize → guess)
//           ├─ AnswerScene (correct | incorrect)
//           └─ ScoreScene
//
// Flow:
//   click → Scene::handle_click() → Option<SceneToken> → controller table
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

//=== Internal Dependencies ===============================================

use crate::core::geometry::{Point, Rect};
use crate::core::render::{Canvas, Image, ImageHandle, OPAQUE};
use crate::core::timer::FadeTimer;

//=== Module Declarations =================================================

mod answer;
mod game;
mod intro;
mod layout;
mod score;

//=== Public API ==========================================================

pub use answer::AnswerScene;
pub use game::{GamePhase, GameScene};
pub use intro::IntroScene;
pub use layout::{place_items, Placement};
pub use score::ScoreScene;

//=== Scene Token =========================================================

/// Symbolic name of what should happen after a click.
///
/// Consumed exclusively by the controller's transition table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneToken {
    /// Start the next memorize/guess round.
    NextGame,

    /// The player picked the target item.
    Correct,

    /// The player picked some other item.
    Incorrect,

    /// Show the final score.
    Score,

    /// Reset the session and play again.
    NewGame,

    /// Terminate the application.
    Quit,
}

//=== Scene Kind ==========================================================

/// Outcome shown by an answer scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Outcome {
    Correct,
    Incorrect,
}

/// Which variant is active, for logging and inspection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SceneKind {
    Intro,
    Game(GamePhase),
    Answer(Outcome),
    Score,
}

//=== Scene Context =======================================================

/// Controller-owned facilities a scene may touch while handling a click.
pub struct SceneContext<'a> {
    pub fade_timer: &'a mut FadeTimer,
}

//=== Scene Trait =========================================================

/// A discrete visual/interactive state of the game.
///
/// Only `kind`, `handle_click` and `draw` are required; `update` and
/// `start_fade` default to no-ops for scenes without animation.
pub trait Scene {
    fn kind(&self) -> SceneKind;

    /// Reacts to a pointer press. `None` means "stay in this scene".
    fn handle_click(&mut self, position: Point, ctx: &mut SceneContext<'_>) -> Option<SceneToken>;

    /// Advances time-based state. Called once per frame without a
    /// transition.
    fn update(&mut self, _dt: Duration) {}

    /// Delivered when the fade timer armed by an advance click fires.
    fn start_fade(&mut self) {}

    /// Draws the scene. Must not mutate animation state.
    fn draw(&self, canvas: &mut dyn Canvas);
}

//=== Shared Scene Helpers ================================================

/// Top-left corner of the advance arrow.
pub const ARROW_POSITION: Point = Point::new(1000, 500);

/// Common backdrop every scene draws first.
pub fn draw_background(canvas: &mut dyn Canvas, background: &Image) {
    canvas.blit(background, Point::new(0, 0), OPAQUE);
}

/// Clickable arrow that yields a preconfigured token and arms the fade
/// timer.
#[derive(Debug, Clone)]
pub struct AdvanceButton {
    image: ImageHandle,
    rect: Rect,
    token: SceneToken,
    fade_delay: Duration,
}

impl AdvanceButton {
    pub fn new(image: ImageHandle, token: SceneToken, fade_delay: Duration) -> Self {
        let rect = Rect::at(ARROW_POSITION, image.size());
        Self {
            image,
            rect,
            token,
            fade_delay,
        }
    }

    pub fn rect(&self) -> Rect {
        self.rect
    }

    pub fn token(&self) -> SceneToken {
        self.token
    }

    pub fn click(&self, position: Point, ctx: &mut SceneContext<'_>) -> Option<SceneToken> {
        if !self.rect.contains(position) {
            return None;
        }
        ctx.fade_timer.arm(self.fade_delay);
        Some(self.token)
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.blit(&self.image, self.rect.origin(), OPAQUE);
    }
}

//=========================================================================
// Test Doubles
//=========================================================================


//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::testing::*;
    use super::*;
    use std::sync::Arc;

    use crate::core::geometry::Size;
    use crate::core::render::Color;

    fn button() -> AdvanceButton {
        let image = Arc::new(Image::filled(ARROW_SIZE.width, ARROW_SIZE.height, Color::BLACK, 255));
        AdvanceButton::new(image, SceneToken::NextGame, Duration::from_secs(1))
    }

    #[test]
    fn advance_click_inside_returns_token_and_arms_timer() {
        let button = button();
        let mut timer = FadeTimer::new();
        let mut ctx = SceneContext { fade_timer: &mut timer };

        let token = button.click(Point::new(1010, 510), &mut ctx);

        assert_eq!(token, Some(SceneToken::NextGame));
        assert!(timer.is_armed());
    }

    #[test]
    fn advance_click_outside_is_ignored() {
        let button = button();
        let mut timer = FadeTimer::new();
        let mut ctx = SceneContext { fade_timer: &mut timer };

        assert_eq!(button.click(Point::new(999, 510), &mut ctx), None);
        assert_eq!(button.click(Point::new(1120, 510), &mut ctx), None);
        assert!(!timer.is_armed());
    }

    #[test]
    fn background_is_drawn_opaque_at_origin() {
        let mut canvas = RecordingCanvas::default();
        let background = Image::filled(4, 4, Color::BLACK, 255);
        draw_background(&mut canvas, &background);

        assert_eq!(
            canvas.blits,
            vec![Blit {
                size: Size::new(4, 4),
                at: Point::new(0, 0),
                alpha: OPAQUE
            }]
        );
    }
}
