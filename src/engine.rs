//=========================================================================
// Memory Game Engine
//
// Main entry point and coordinator for the game.
//
// Architecture:
// ```text
//     EngineBuilder  ──build(config, assets)──>  Engine  ──run()──>  [Platform]
//         │                                        │
//         ├─ with_fps()                            ├─ creates bridge channel
//         ├─ with_channel_capacity()               ├─ wires GameRuntime
//         └─ with_seed()                           └─ blocks until exit
// ```
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::bounded;
use log::info;
use rand::rngs::StdRng;
use rand::SeedableRng;

//=== Internal Dependencies ===============================================

use crate::core::catalog::GameAssets;
use crate::core::config::GameConfig;
use crate::core::controller::GameController;
use crate::core::error::Result;
use crate::core::GameRuntime;
use crate::platform::{Platform, WindowSettings};

//=== EngineBuilder =======================================================

/// Builder for configuring and constructing an [`Engine`].
///
/// # Default Values
///
/// - **FPS**: 30 (frames per second)
/// - **Channel capacity**: 128 batches
/// - **Seed**: none (RNG seeded from the OS)
///
/// # Examples
///
/// ```no_run
/// use memory_game::prelude::*;
///
/// let config = GameConfig::default();
/// let assets = GameAssets::load(&config)?;
///
/// EngineBuilder::new()
///     .with_fps(30)
///     .with_seed(42)
///     .build(config, assets)
///     .run()?;
/// # Ok::<(), GameError>(())
/// ```
pub struct EngineBuilder {
    fps: u32,
    channel_capacity: usize,
    seed: Option<u64>,
}

impl EngineBuilder {
    /// Creates a new builder with default settings.
    pub fn new() -> Self {
        Self {
            fps: 30,
            channel_capacity: 128,
            seed: None,
        }
    }

    /// Sets the target frame rate.
    ///
    /// Default: 30
    ///
    /// # Panics
    ///
    /// Panics if `fps == 0`.
    pub fn with_fps(mut self, fps: u32) -> Self {
        assert!(fps > 0, "FPS must be positive, got {}", fps);
        self.fps = fps;
        self
    }

    /// Sets the channel capacity for platform → core input batches.
    ///
    /// Default: 128
    ///
    /// # Panics
    ///
    /// Panics if `capacity == 0`.
    pub fn with_channel_capacity(mut self, capacity: usize) -> Self {
        assert!(capacity > 0, "Channel capacity must be positive");
        self.channel_capacity = capacity;
        self
    }

    /// Seeds layout and target selection for reproducible runs.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Builds the engine instance around loaded assets.
    pub fn build(self, config: GameConfig, assets: GameAssets) -> Engine {
        info!(
            target: "engine",
            "Building engine (FPS: {}, channel: {}, seed: {:?})",
            self.fps,
            self.channel_capacity,
            self.seed
        );

        Engine {
            config,
            assets,
            fps: self.fps,
            channel_capacity: self.channel_capacity,
            seed: self.seed,
        }
    }
}

impl Default for EngineBuilder {
    fn default() -> Self {
        Self::new()
    }
}

//=== Engine ==============================================================

/// Memory game runtime.
///
/// Create via [`EngineBuilder`]. [`Engine::run`] blocks on the main
/// thread until the player quits, closes the window, or a fatal error
/// occurs.
pub struct Engine {
    config: GameConfig,
    assets: GameAssets,
    fps: u32,
    channel_capacity: usize,
    seed: Option<u64>,
}

impl Engine {
    /// Opens the window and runs the game loop.
    ///
    /// # Errors
    ///
    /// Window, surface and event loop failures, and game errors such as
    /// [`crate::core::error::GameError::Layout`].
    ///
    /// # Panics
    ///
    /// Panics if called off the main thread on platforms where winit
    /// requires it.
    pub fn run(self) -> Result<()> {
        let Self {
            config,
            mut assets,
            fps,
            channel_capacity,
            seed,
        } = self;

        let settings = WindowSettings {
            title: config.title.clone(),
            width: config.width,
            height: config.height,
            icon: assets.icon.take(),
        };

        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let (sender, receiver) = bounded(channel_capacity);
        let controller = GameController::new(config, assets, rng);
        let runtime = GameRuntime::new(receiver, controller);

        info!(target: "engine", "Starting game loop");
        let result = Platform::new(settings, sender, runtime, fps).run();
        info!(target: "engine", "Game loop finished");
        result
    }

    pub fn fps(&self) -> u32 {
        self.fps
    }

    pub fn channel_capacity(&self) -> usize {
        self.channel_capacity
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
