//=========================================================================
// Game Scene
//=========================================================================
//
// The memorize/guess round.
//
// Phases:
// ```text
//   Memorize ──(fade timer fires)──> fading ──(alpha ≤ 0)──> Guess
//      │                                                       │
//      └─ target + "Atiende" only           all items + prompt ┘
// ```
//
// The layout is computed once at construction and shared by both
// phases. Fade state advances only in `update`; `draw` is read-only.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::debug;
use rand::Rng;

//=== Internal Dependencies ===============================================

use super::layout::{place_items, Placement};
use super::{draw_background, Scene, SceneContext, SceneKind, SceneToken};
use crate::core::catalog::{GameAssets, Item, ItemId};
use crate::core::config::{FadeConfig, GameConfig};
use crate::core::error::Result;
use crate::core::geometry::Point;
use crate::core::render::{Canvas, Color, ImageHandle, OPAQUE};

//=== Constants ===========================================================

const MEMORIZE_LABEL: &str = "Atiende";
const GUESS_LABEL: &str = "¿Qué has visto?";

const MEMORIZE_LABEL_POSITION: Point = Point::new(550, 20);
const TARGET_POSITION: Point = Point::new(580, 280);
const GUESS_LABEL_POSITION: Point = Point::new(400, 5);

//=== GamePhase ===========================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GamePhase {
    /// Only the target is shown; it fades out once the timer fires.
    Memorize,

    /// Every candidate is shown; clicks are resolved.
    Guess,
}

//=== Fade ================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
struct Fade {
    active: bool,
    elapsed: Duration,
    alpha: i32,
}

impl Fade {
    const FULL: i32 = OPAQUE as i32;

    fn new() -> Self {
        Self {
            active: false,
            elapsed: Duration::ZERO,
            alpha: Self::FULL,
        }
    }

    /// Advances one frame. Returns true when the fade has just finished.
    fn advance(&mut self, dt: Duration, config: &FadeConfig) -> bool {
        if !self.active {
            return false;
        }

        self.elapsed += dt;
        if self.elapsed <= config.tick {
            return false;
        }

        self.elapsed = Duration::ZERO;
        self.alpha -= config.step;
        if self.alpha > 0 {
            return false;
        }

        *self = Self::new();
        true
    }

    fn current(&self) -> u8 {
        self.alpha.clamp(0, Self::FULL) as u8
    }
}

//=== GameScene ===========================================================

pub struct GameScene {
    background: ImageHandle,
    memorize_label: ImageHandle,
    guess_label: ImageHandle,
    placements: Vec<Placement>,
    target: usize,
    phase: GamePhase,
    fade: Fade,
    fade_config: FadeConfig,
}

impl GameScene {
    /// Lays out `items` and prepares the memorize phase for `target`.
    ///
    /// # Panics
    ///
    /// Panics if `target` is not one of `items`.
    pub fn new<R: Rng + ?Sized>(
        config: &GameConfig,
        assets: &GameAssets,
        items: &[Item],
        target: ItemId,
        rng: &mut R,
    ) -> Result<Self> {
        let placements = place_items(items, &config.placement, rng)?;
        let target = placements
            .iter()
            .position(|p| p.id == target)
            .unwrap_or_else(|| panic!("target {:?} is not part of the round", target));

        debug!(
            target: "scene",
            "Game round laid out: {} items, target {:?}",
            placements.len(),
            placements[target].id
        );

        Ok(Self {
            background: assets.background.clone(),
            memorize_label: assets.label(MEMORIZE_LABEL, config.label_font_size, Color::PURPLE, None),
            guess_label: assets.label(GUESS_LABEL, config.label_font_size, Color::PURPLE, None),
            placements,
            target,
            phase: GamePhase::Memorize,
            fade: Fade::new(),
            fade_config: config.fade.clone(),
        })
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn placements(&self) -> &[Placement] {
        &self.placements
    }

    pub fn target(&self) -> &Placement {
        &self.placements[self.target]
    }

    pub fn is_fading(&self) -> bool {
        self.fade.active
    }

    pub fn target_alpha(&self) -> u8 {
        self.fade.current()
    }
}

impl Scene for GameScene {
    fn kind(&self) -> SceneKind {
        SceneKind::Game(self.phase)
    }

    fn handle_click(&mut self, position: Point, _ctx: &mut SceneContext<'_>) -> Option<SceneToken> {
        if self.phase != GamePhase::Guess {
            return None;
        }

        if self.target().rect.contains(position) {
            return Some(SceneToken::Correct);
        }

        self.placements
            .iter()
            .any(|p| p.rect.contains(position))
            .then_some(SceneToken::Incorrect)
    }

    fn update(&mut self, dt: Duration) {
        if self.phase != GamePhase::Memorize {
            return;
        }
        if self.fade.advance(dt, &self.fade_config) {
            debug!(target: "scene", "Memorize fade complete, switching to guess phase");
            self.phase = GamePhase::Guess;
        }
    }

    fn start_fade(&mut self) {
        if self.phase == GamePhase::Memorize {
            self.fade.active = true;
        }
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        draw_background(canvas, &self.background);

        match self.phase {
            GamePhase::Memorize => {
                let alpha = self.fade.current();
                canvas.blit(&self.memorize_label, MEMORIZE_LABEL_POSITION, alpha);
                canvas.blit(&self.target().image, TARGET_POSITION, alpha);
            }
            GamePhase::Guess => {
                canvas.blit(&self.guess_label, GUESS_LABEL_POSITION, OPAQUE);
                for placement in &self.placements {
                    canvas.blit(&placement.image, placement.rect.origin(), OPAQUE);
                }
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::scene::testing::{assets, RecordingCanvas, ITEM_SIZE};
    use crate::core::timer::FadeTimer;

    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const FRAME: Duration = Duration::from_millis(33);

    fn scene(target_index: usize) -> GameScene {
        let config = GameConfig::default();
        let assets = assets(1, 4);
        let items = assets.catalog.level(1).to_vec();
        let target = items[target_index].id;
        let mut rng = StdRng::seed_from_u64(42);
        GameScene::new(&config, &assets, &items, target, &mut rng).unwrap()
    }

    fn guessing_scene(target_index: usize) -> GameScene {
        let mut scene = scene(target_index);
        scene.start_fade();
        while scene.phase() == GamePhase::Memorize {
            scene.update(FRAME);
        }
        scene
    }

    fn click(scene: &mut GameScene, at: Point) -> Option<SceneToken> {
        let mut timer = FadeTimer::new();
        scene.handle_click(at, &mut SceneContext { fade_timer: &mut timer })
    }

    fn center(placement: &Placement) -> Point {
        Point::new(
            placement.rect.x + placement.rect.width / 2,
            placement.rect.y + placement.rect.height / 2,
        )
    }

    //--- Construction -----------------------------------------------------

    #[test]
    fn starts_in_memorize_phase_opaque() {
        let scene = scene(1);
        assert_eq!(scene.kind(), SceneKind::Game(GamePhase::Memorize));
        assert_eq!(scene.target_alpha(), 255);
        assert!(!scene.is_fading());
        assert_eq!(scene.target().id.index, 1);
        assert_eq!(scene.placements().len(), 4);
    }

    //--- Fade -------------------------------------------------------------

    #[test]
    fn update_without_fade_signal_keeps_memorize() {
        let mut scene = scene(0);
        for _ in 0..200 {
            scene.update(FRAME);
        }
        assert_eq!(scene.phase(), GamePhase::Memorize);
        assert_eq!(scene.target_alpha(), 255);
    }

    #[test]
    fn fade_steps_once_per_elapsed_tick() {
        let mut scene = scene(0);
        scene.start_fade();

        scene.update(Duration::from_millis(5));
        assert_eq!(scene.target_alpha(), 255, "5ms is below the 10ms tick");

        scene.update(Duration::from_millis(6));
        assert_eq!(scene.target_alpha(), 250);

        scene.update(FRAME);
        assert_eq!(scene.target_alpha(), 245);
    }

    #[test]
    fn fade_completes_into_guess_phase_and_resets_alpha() {
        let mut scene = scene(0);
        scene.start_fade();

        for _ in 0..50 {
            scene.update(FRAME);
        }
        assert_eq!(scene.phase(), GamePhase::Memorize);
        assert_eq!(scene.target_alpha(), 5);

        scene.update(FRAME);
        assert_eq!(scene.phase(), GamePhase::Guess);
        assert_eq!(scene.target_alpha(), 255);
        assert!(!scene.is_fading());
    }

    #[test]
    fn start_fade_in_guess_phase_is_ignored() {
        let mut scene = guessing_scene(0);
        scene.start_fade();
        assert!(!scene.is_fading());
    }

    //--- Answer Resolution ------------------------------------------------

    #[test]
    fn clicks_ignored_while_memorizing() {
        let mut scene = scene(2);
        let at = center(scene.target());
        assert_eq!(click(&mut scene, at), None);
    }

    #[test]
    fn click_on_target_is_correct() {
        let mut scene = guessing_scene(2);
        let at = center(scene.target());
        assert_eq!(click(&mut scene, at), Some(SceneToken::Correct));
    }

    #[test]
    fn click_on_other_item_is_incorrect() {
        let mut scene = guessing_scene(2);
        let other = scene.placements()[0].clone();
        assert_eq!(click(&mut scene, center(&other)), Some(SceneToken::Incorrect));
    }

    #[test]
    fn click_on_empty_space_is_ignored() {
        let mut scene = guessing_scene(2);
        assert_eq!(click(&mut scene, Point::new(5, 5)), None);
    }

    //--- Drawing ----------------------------------------------------------

    #[test]
    fn memorize_draw_shows_background_label_and_target() {
        let scene = scene(0);
        let mut canvas = RecordingCanvas::default();
        scene.draw(&mut canvas);

        assert_eq!(canvas.blits.len(), 3);
        assert_eq!(canvas.blits[0].at, Point::new(0, 0));
        assert_eq!(canvas.blits[1].at, MEMORIZE_LABEL_POSITION);
        assert_eq!(canvas.blits[2].at, TARGET_POSITION);
        assert_eq!(canvas.blits[2].size, ITEM_SIZE);
    }

    #[test]
    fn draw_uses_current_fade_alpha_without_mutating() {
        let mut scene = scene(0);
        scene.start_fade();
        scene.update(FRAME);

        let mut canvas = RecordingCanvas::default();
        scene.draw(&mut canvas);
        scene.draw(&mut canvas);

        assert_eq!(canvas.blits[2].alpha, 250);
        assert_eq!(canvas.blits[5].alpha, 250);
        assert_eq!(scene.target_alpha(), 250);
    }

    #[test]
    fn guess_draw_shows_every_item_at_its_placement() {
        let scene = guessing_scene(0);
        let mut canvas = RecordingCanvas::default();
        scene.draw(&mut canvas);

        assert_eq!(canvas.blits.len(), 2 + scene.placements().len());
        assert_eq!(canvas.blits[1].at, GUESS_LABEL_POSITION);
        for (blit, placement) in canvas.blits[2..].iter().zip(scene.placements()) {
            assert_eq!(blit.at, placement.rect.origin());
            assert_eq!(blit.alpha, 255);
        }
    }
}
