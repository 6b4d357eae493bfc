//=========================================================================
// Game Configuration
//=========================================================================
//
// Process-wide immutable settings, built once at startup and passed by
// reference into the controller and scenes.
//
// Defaults reproduce the fixed 3-level game on a 1280×768 screen. The
// `with_*` methods validate their input and panic on nonsense values,
// the same way the engine builder does.
//
//=========================================================================

//=== External Dependencies ===============================================

use std::path::{Path, PathBuf};
use std::time::Duration;

//=== PlacementConfig =====================================================

/// Rejection-sampling parameters for the guess-phase layout.
///
/// Top-left corners are drawn uniformly from `x_range` × `y_range`
/// (inclusive). Each item rectangle is grown by `margin` on every side
/// before the overlap test.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacementConfig {
    pub x_range: (i32, i32),
    pub y_range: (i32, i32),
    pub margin: i32,

    /// Samples tried for a single item before the whole layout restarts.
    pub max_attempts: u32,

    /// Full restarts allowed before giving up with `GameError::Layout`.
    pub max_relayouts: u32,
}

impl PlacementConfig {
    /// Samples a failing layout draws in total, saturating at `u32::MAX`.
    pub fn total_attempts(&self) -> u32 {
        self.max_attempts.saturating_mul(self.max_relayouts.saturating_add(1))
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            x_range: (200, 840),
            y_range: (100, 600),
            margin: 10,
            max_attempts: 1_000,
            max_relayouts: 8,
        }
    }
}

//=== FadeConfig ==========================================================

/// Memorize-phase fade timing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FadeConfig {
    /// Alpha removed per fade tick.
    pub step: i32,

    /// Accumulated time that must pass before the next alpha step.
    pub tick: Duration,

    /// Delay between an advance click and the fade start signal.
    pub arm_delay: Duration,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            step: 5,
            tick: Duration::from_millis(10),
            arm_delay: Duration::from_millis(1_000),
        }
    }
}

//=== GameConfig ==========================================================

#[derive(Debug, Clone)]
pub struct GameConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    pub max_level: usize,
    pub turns_per_level: u32,
    pub label_font_size: f32,
    pub heading_font_size: f32,
    pub placement: PlacementConfig,
    pub fade: FadeConfig,
    pub asset_root: PathBuf,
}

impl GameConfig {
    pub fn new() -> Self {
        Self {
            title: "Memory".to_owned(),
            width: 1280,
            height: 768,
            max_level: 3,
            turns_per_level: 2,
            label_font_size: 70.0,
            heading_font_size: 60.0,
            placement: PlacementConfig::default(),
            fade: FadeConfig::default(),
            asset_root: PathBuf::from("assets"),
        }
    }

    pub fn with_asset_root(mut self, root: impl AsRef<Path>) -> Self {
        self.asset_root = root.as_ref().to_path_buf();
        self
    }

    /// # Panics
    ///
    /// Panics if `max_level == 0`.
    pub fn with_max_level(mut self, max_level: usize) -> Self {
        assert!(max_level > 0, "max_level must be at least 1");
        self.max_level = max_level;
        self
    }

    /// # Panics
    ///
    /// Panics if `turns == 0`.
    pub fn with_turns_per_level(mut self, turns: u32) -> Self {
        assert!(turns > 0, "turns_per_level must be positive");
        self.turns_per_level = turns;
        self
    }

    /// # Panics
    ///
    /// Panics if a range is inverted or a retry cap is zero.
    pub fn with_placement(mut self, placement: PlacementConfig) -> Self {
        assert!(
            placement.x_range.0 <= placement.x_range.1 && placement.y_range.0 <= placement.y_range.1,
            "placement ranges must be ordered, got {:?} × {:?}",
            placement.x_range,
            placement.y_range
        );
        assert!(placement.max_attempts > 0, "max_attempts must be positive");
        self.placement = placement;
        self
    }

    /// # Panics
    ///
    /// Panics if `fade.step <= 0`.
    pub fn with_fade(mut self, fade: FadeConfig) -> Self {
        assert!(fade.step > 0, "fade step must be positive, got {}", fade.step);
        self.fade = fade;
        self
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
