//=========================================================================
// Game Controller
//=========================================================================
//
// Owns the session, the active scene and the fade timer, and applies
// scene tokens through a fixed transition table.
//
// Per frame:
// ```text
//   FadeTimer::tick(dt) ──fired──> scene.start_fade()
//        ↓
//   first click yielding a token ──> apply(token)   (later clicks dropped)
//        ↓ (no transition)
//   scene.update(dt)
// ```
//
// Transition table:
// ```text
//   Correct   → score += 1, AnswerScene(correct)
//   Incorrect → AnswerScene(incorrect)
//   NextGame  → pick target ≠ previous, GameScene, level bookkeeping
//   Score     → ScoreScene(score)
//   NewGame   → reset, load level 1, arm fade, NextGame path
//   Quit      → TickControl::Exit
// ```
// Answers resolved while `level == max_level` end the game; the answer
// scene then routes to `Score` instead of `NextGame`.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::time::Duration;

use log::{debug, info, trace};
use rand::rngs::StdRng;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};

//=== Internal Dependencies ===============================================

use crate::core::catalog::{GameAssets, Item, ItemId};
use crate::core::config::GameConfig;
use crate::core::error::Result;
use crate::core::input::InputEvent;
use crate::core::platform_bridge::TickControl;
use crate::core::render::Canvas;
use crate::core::scene::{
    AnswerScene, GameScene, IntroScene, Outcome, Scene, SceneContext, SceneKind, SceneToken, ScoreScene,
};
use crate::core::session::GameSession;
use crate::core::timer::FadeTimer;

//=== GameController ======================================================

pub struct GameController {
    config: GameConfig,
    assets: GameAssets,
    session: GameSession,
    loaded_level: usize,
    scene: Box<dyn Scene>,
    fade_timer: FadeTimer,
    rng: StdRng,
}

impl GameController {
    //--- Construction -----------------------------------------------------

    /// Starts on the intro scene with level 1 loaded.
    pub fn new(config: GameConfig, assets: GameAssets, rng: StdRng) -> Self {
        let scene = Box::new(IntroScene::new(&config, &assets));
        info!(
            target: "controller",
            "Controller ready: {} levels, max level {}",
            assets.catalog.level_count(),
            config.max_level
        );

        Self {
            config,
            assets,
            session: GameSession::new(),
            loaded_level: 1,
            scene,
            fade_timer: FadeTimer::new(),
            rng,
        }
    }

    /// Same as [`GameController::new`] with a deterministic RNG.
    pub fn with_seed(config: GameConfig, assets: GameAssets, seed: u64) -> Self {
        Self::new(config, assets, StdRng::seed_from_u64(seed))
    }

    //--- Accessors --------------------------------------------------------

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn scene_kind(&self) -> SceneKind {
        self.scene.kind()
    }

    /// Level whose items the next round draws from.
    pub fn loaded_level(&self) -> usize {
        self.loaded_level
    }

    pub fn fade_timer(&self) -> &FadeTimer {
        &self.fade_timer
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    //--- Frame ------------------------------------------------------------

    /// Runs one frame of game logic.
    ///
    /// At most one transition happens per frame. `update` is skipped on
    /// frames that transition so a fresh scene starts from its initial
    /// state.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::core::error::GameError::Layout`] from building a
    /// game round.
    pub fn frame(&mut self, events: &[InputEvent], dt: Duration) -> Result<TickControl> {
        if self.fade_timer.tick(dt) {
            trace!(target: "controller", "Fade timer fired in {:?}", self.scene.kind());
            self.scene.start_fade();
        }

        let mut clicks = events.iter().map(InputEvent::position);
        let mut token = None;
        for position in clicks.by_ref() {
            let mut ctx = SceneContext {
                fade_timer: &mut self.fade_timer,
            };
            token = self.scene.handle_click(position, &mut ctx);
            if token.is_some() {
                break;
            }
        }

        let dropped = clicks.count();
        if dropped > 0 {
            trace!(target: "controller", "Dropped {} clicks after transition", dropped);
        }

        match token {
            Some(token) => self.apply(token),
            None => {
                self.scene.update(dt);
                Ok(TickControl::Continue)
            }
        }
    }

    pub fn draw(&self, canvas: &mut dyn Canvas) {
        self.scene.draw(canvas);
    }

    //--- Transition Table -------------------------------------------------

    pub(crate) fn apply(&mut self, token: SceneToken) -> Result<TickControl> {
        debug!(target: "controller", "{:?} in {:?}", token, self.scene.kind());

        match token {
            SceneToken::Correct => {
                self.resolve_guess();
                self.session.score += 1;
                info!(target: "controller", "Correct answer, score {}", self.session.score);
                self.show_answer(Outcome::Correct);
            }
            SceneToken::Incorrect => {
                self.resolve_guess();
                info!(target: "controller", "Incorrect answer, score {}", self.session.score);
                self.show_answer(Outcome::Incorrect);
            }
            SceneToken::NextGame => self.next_game()?,
            SceneToken::Score => {
                self.scene = Box::new(ScoreScene::new(&self.config, &self.assets, self.session.score));
            }
            SceneToken::NewGame => self.new_game()?,
            SceneToken::Quit => {
                info!(target: "controller", "Player quit with score {}", self.session.score);
                return Ok(TickControl::Exit);
            }
        }

        debug!(target: "controller", "Active scene: {:?}", self.scene.kind());
        Ok(TickControl::Continue)
    }

    //--- Transitions ------------------------------------------------------

    fn resolve_guess(&mut self) {
        if self.session.level == self.config.max_level && !self.session.game_over {
            info!(target: "controller", "Final level answered, game over");
            self.session.game_over = true;
        }
    }

    fn show_answer(&mut self, outcome: Outcome) {
        let next = if self.session.game_over {
            SceneToken::Score
        } else {
            SceneToken::NextGame
        };
        self.scene = Box::new(AnswerScene::new(&self.config, &self.assets, outcome, next));
    }

    fn next_game(&mut self) -> Result<()> {
        let items = self.assets.catalog.level(self.loaded_level);
        let target = pick_target(items, self.session.previous_item, &mut self.rng);
        let scene = GameScene::new(&self.config, &self.assets, items, target, &mut self.rng)?;

        self.scene = Box::new(scene);
        self.session.previous_item = Some(target);
        self.session.turn_counter += 1;

        if self.session.turn_counter == self.config.turns_per_level {
            self.session.level += 1;
            info!(target: "controller", "Advanced to level {}", self.session.level);

            if self.session.level < self.config.max_level {
                self.load_level(self.session.level);
                self.session.turn_counter = 0;
            }
        }

        Ok(())
    }

    fn new_game(&mut self) -> Result<()> {
        info!(target: "controller", "New game");
        self.session.reset();
        self.load_level(1);
        self.fade_timer.arm(self.config.fade.arm_delay);
        self.next_game()
    }

    fn load_level(&mut self, level: usize) {
        let items = self.assets.catalog.level(level).len();
        debug!(target: "controller", "Loaded level {} ({} items)", level, items);
        self.loaded_level = level;
    }
}

//=== Target Selection ====================================================

/// Picks a uniformly random item other than `previous`.
///
/// # Panics
///
/// Panics if no candidate remains; the catalog guarantees two items per
/// level.
fn pick_target<R: Rng + ?Sized>(items: &[Item], previous: Option<ItemId>, rng: &mut R) -> ItemId {
    let candidates: Vec<ItemId> = items
        .iter()
        .map(|item| item.id)
        .filter(|id| Some(*id) != previous)
        .collect();

    *candidates
        .choose(rng)
        .unwrap_or_else(|| panic!("no target candidate besides {:?}", previous))
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::PlacementConfig;
    use crate::core::error::GameError;
    use crate::core::geometry::Point;
    use crate::core::input::MouseButton;
    use crate::core::scene::testing::{assets, RecordingCanvas};
    use crate::core::scene::GamePhase;

    const FRAME: Duration = Duration::from_millis(33);
    const ARROW: Point = Point::new(1010, 510);
    const YES: Point = Point::new(510, 460);
    const NO: Point = Point::new(660, 460);

    fn controller() -> GameController {
        GameController::with_seed(GameConfig::default(), assets(3, 4), 7)
    }

    fn click(at: Point) -> InputEvent {
        InputEvent::PointerDown {
            button: MouseButton::Left,
            position: at,
        }
    }

    fn frame(controller: &mut GameController, events: &[InputEvent]) -> TickControl {
        controller.frame(events, FRAME).unwrap()
    }

    /// Runs empty frames until the round reaches the guess phase.
    fn wait_for_guess(controller: &mut GameController) {
        for _ in 0..200 {
            if controller.scene_kind() == SceneKind::Game(GamePhase::Guess) {
                return;
            }
            frame(controller, &[]);
        }
        panic!("guess phase never reached, still in {:?}", controller.scene_kind());
    }

    /// Plays rounds until the level counter reaches the maximum.
    fn reach_max_level(controller: &mut GameController) {
        while controller.session().level() < controller.config().max_level {
            controller.apply(SceneToken::NextGame).unwrap();
        }
    }

    //--- Target Selection -------------------------------------------------

    #[test]
    fn pick_target_never_repeats_previous() {
        let assets = assets(1, 2);
        let items = assets.catalog.level(1);
        let mut rng = StdRng::seed_from_u64(3);

        for _ in 0..50 {
            assert_eq!(pick_target(items, Some(items[0].id), &mut rng), items[1].id);
            assert_eq!(pick_target(items, Some(items[1].id), &mut rng), items[0].id);
        }
    }

    #[test]
    fn next_game_never_selects_previous_target() {
        for seed in 0..20 {
            let mut controller =
                GameController::with_seed(GameConfig::default(), assets(3, 2), seed);
            let mut previous = None;
            for _ in 0..4 {
                controller.apply(SceneToken::NextGame).unwrap();
                let current = controller.session().previous_item();
                assert_ne!(current, previous, "seed {}", seed);
                previous = current;
            }
        }
    }

    //--- Level Progression ------------------------------------------------

    #[test]
    fn two_rounds_advance_the_level() {
        let mut controller = controller();

        controller.apply(SceneToken::NextGame).unwrap();
        assert_eq!(controller.session().level(), 1);
        assert_eq!(controller.session().turn_counter(), 1);

        controller.apply(SceneToken::NextGame).unwrap();
        assert_eq!(controller.session().level(), 2);
        assert_eq!(controller.session().turn_counter(), 0);
        assert_eq!(controller.loaded_level(), 2);
    }

    #[test]
    fn final_level_reuses_previous_items() {
        let mut controller = controller();
        for _ in 0..4 {
            controller.apply(SceneToken::NextGame).unwrap();
        }

        assert_eq!(controller.session().level(), 3);
        assert_eq!(controller.session().turn_counter(), 2);
        assert_eq!(controller.loaded_level(), 2);
        assert_eq!(controller.session().previous_item().map(|id| id.level), Some(2));
    }

    //--- Answers ----------------------------------------------------------

    #[test]
    fn correct_increments_score_once() {
        let mut controller = controller();
        controller.apply(SceneToken::NextGame).unwrap();

        controller.apply(SceneToken::Correct).unwrap();

        assert_eq!(controller.session().score(), 1);
        assert_eq!(controller.scene_kind(), SceneKind::Answer(Outcome::Correct));
    }

    #[test]
    fn incorrect_keeps_score() {
        let mut controller = controller();
        controller.apply(SceneToken::NextGame).unwrap();

        controller.apply(SceneToken::Incorrect).unwrap();

        assert_eq!(controller.session().score(), 0);
        assert_eq!(controller.scene_kind(), SceneKind::Answer(Outcome::Incorrect));
        assert!(!controller.session().is_game_over());
    }

    #[test]
    fn game_over_only_at_max_level() {
        let mut controller = controller();
        controller.apply(SceneToken::NextGame).unwrap();
        controller.apply(SceneToken::Incorrect).unwrap();
        assert!(!controller.session().is_game_over());

        reach_max_level(&mut controller);
        assert!(!controller.session().is_game_over(), "reaching the level alone is not enough");

        controller.apply(SceneToken::Correct).unwrap();
        assert!(controller.session().is_game_over());
    }

    //--- Scenarios --------------------------------------------------------

    #[test]
    fn correct_answer_then_advance_starts_next_round() {
        let mut controller = controller();
        assert_eq!(controller.session().turn_counter(), 0);

        controller.apply(SceneToken::Correct).unwrap();
        assert_eq!(controller.session().score(), 1);
        assert!(!controller.session().is_game_over());
        assert_eq!(controller.scene_kind(), SceneKind::Answer(Outcome::Correct));

        frame(&mut controller, &[click(ARROW)]);

        assert_eq!(controller.scene_kind(), SceneKind::Game(GamePhase::Memorize));
        assert_eq!(controller.session().turn_counter(), 1);
    }

    #[test]
    fn answer_at_max_level_routes_to_score() {
        let mut controller = controller();
        reach_max_level(&mut controller);

        controller.apply(SceneToken::Incorrect).unwrap();
        assert!(controller.session().is_game_over());

        frame(&mut controller, &[click(ARROW)]);
        assert_eq!(controller.scene_kind(), SceneKind::Score);
    }

    #[test]
    fn score_no_quits() {
        let mut controller = controller();
        controller.apply(SceneToken::Score).unwrap();

        assert_eq!(frame(&mut controller, &[click(NO)]), TickControl::Exit);
    }

    #[test]
    fn score_yes_starts_new_game() {
        let mut controller = controller();
        reach_max_level(&mut controller);
        controller.apply(SceneToken::Correct).unwrap();
        controller.apply(SceneToken::Score).unwrap();

        assert_eq!(frame(&mut controller, &[click(YES)]), TickControl::Continue);

        let session = controller.session();
        assert_eq!(session.level(), 1);
        assert_eq!(session.score(), 0);
        assert!(!session.is_game_over());
        assert_eq!(session.turn_counter(), 1);
        assert_eq!(controller.loaded_level(), 1);
        assert_eq!(controller.scene_kind(), SceneKind::Game(GamePhase::Memorize));
        assert!(controller.fade_timer().is_armed());
    }

    #[test]
    fn full_game_through_frames() {
        let mut controller = controller();

        frame(&mut controller, &[click(ARROW)]);
        for _ in 0..4 {
            wait_for_guess(&mut controller);

            // Every guess-phase blit after background and label is an item.
            let mut canvas = RecordingCanvas::default();
            controller.draw(&mut canvas);
            let item = canvas.blits[2].at;
            let score_before = controller.session().score();

            frame(&mut controller, &[click(Point::new(item.x + 1, item.y + 1))]);

            match controller.scene_kind() {
                SceneKind::Answer(Outcome::Correct) => {
                    assert_eq!(controller.session().score(), score_before + 1)
                }
                SceneKind::Answer(Outcome::Incorrect) => {
                    assert_eq!(controller.session().score(), score_before)
                }
                other => panic!("expected answer scene, got {:?}", other),
            }
            frame(&mut controller, &[click(ARROW)]);
        }

        assert!(controller.session().is_game_over());
        assert_eq!(controller.scene_kind(), SceneKind::Score);
    }

    //--- Frame Semantics --------------------------------------------------

    #[test]
    fn at_most_one_transition_per_frame() {
        let mut controller = controller();

        frame(&mut controller, &[click(ARROW), click(ARROW), click(ARROW)]);

        assert_eq!(controller.scene_kind(), SceneKind::Game(GamePhase::Memorize));
        assert_eq!(controller.session().turn_counter(), 1);
    }

    #[test]
    fn clicks_before_a_hit_are_ignored() {
        let mut controller = controller();

        frame(&mut controller, &[click(Point::new(5, 5)), click(ARROW)]);

        assert_eq!(controller.session().turn_counter(), 1);
    }

    #[test]
    fn advance_click_arms_fade_that_reaches_guess() {
        let mut controller = controller();

        frame(&mut controller, &[click(ARROW)]);
        assert!(controller.fade_timer().is_armed());

        // 1000ms delay, then 51 fade steps at one step per 33ms frame.
        for _ in 0..60 {
            frame(&mut controller, &[]);
        }
        assert_eq!(controller.scene_kind(), SceneKind::Game(GamePhase::Memorize));
        assert!(!controller.fade_timer().is_armed());

        wait_for_guess(&mut controller);
    }

    //--- Errors -----------------------------------------------------------

    #[test]
    fn layout_failure_propagates() {
        let config = GameConfig::default().with_placement(PlacementConfig {
            x_range: (0, 0),
            y_range: (0, 0),
            max_attempts: 5,
            max_relayouts: 1,
            ..PlacementConfig::default()
        });
        let mut controller = GameController::with_seed(config, assets(3, 4), 1);

        let err = controller.apply(SceneToken::NextGame).unwrap_err();

        assert!(matches!(err, GameError::Layout { items: 4, attempts: 10 }));
        assert_eq!(controller.scene_kind(), SceneKind::Intro);
        assert_eq!(controller.session().turn_counter(), 0);
    }
}
