//=========================================================================
// Core Systems
//
// Game logic independent of the windowing backend.
//
// Responsibilities:
// - Drain platform events once per frame (`EventCollector`)
// - Step the game (`GameController`) and report whether to keep running
// - Draw the active scene onto whatever `Canvas` the platform provides
//
// Notes:
// Everything here runs on the platform thread, driven from the winit
// event loop. Communication with the platform layer happens only through
// the bridge channel.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod catalog;
pub mod config;
pub mod controller;
pub mod error;
pub mod geometry;
pub mod input;
pub mod platform_bridge;
pub mod render;
pub mod scene;
pub mod session;
pub mod timer;

//=== Standard Library Imports ============================================

use std::time::Duration;

//=== External Crates =====================================================

use crossbeam_channel::Receiver;
use log::info;

//=== Internal Modules ====================================================

use controller::GameController;
use error::Result;
use platform_bridge::{EventCollector, PlatformEvent, TickControl};
use render::Canvas;

//=== GameRuntime =========================================================

/// Per-frame driver: collects input, steps the controller.
pub(crate) struct GameRuntime {
    collector: EventCollector,
    controller: GameController,
}

impl GameRuntime {
    pub(crate) fn new(receiver: Receiver<PlatformEvent>, controller: GameController) -> Self {
        Self {
            collector: EventCollector::new(receiver),
            controller,
        }
    }

    /// Runs one frame: gather platform events, then the game step.
    pub(crate) fn tick(&mut self, dt: Duration) -> Result<TickControl> {
        if self.collector.collect_frame() == TickControl::Exit {
            info!(target: "engine", "Platform requested shutdown");
            return Ok(TickControl::Exit);
        }

        self.controller.frame(self.collector.events(), dt)
    }

    pub(crate) fn draw(&self, canvas: &mut dyn Canvas) {
        self.controller.draw(canvas);
    }

    #[cfg(test)]
    pub(crate) fn controller(&self) -> &GameController {
        &self.controller
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
