//=========================================================================
// Memory Game — Library Root
//
// A memory-matching game: memorize one item, then find it among the
// level's items. Scenes return transition tokens; a controller applies
// them to the session and swaps scenes.
//
// Typical usage:
// ```no_run
// use memory_game::prelude::*;
//
// let config = GameConfig::default();
// let assets = GameAssets::load(&config)?;
// EngineBuilder::new().build(config, assets).run()?;
// # Ok::<(), GameError>(())
// ```
//
//=========================================================================

//--- Public Modules ------------------------------------------------------
//
// `core` holds everything that runs without a window: session,
// controller, scenes, layout, assets, software rendering.
//
pub mod core;
pub mod prelude;

//--- Internal Modules ----------------------------------------------------
//
// `platform` contains the winit/pixels integration and is not part of
// the public API surface.
//
mod engine;
mod platform;

//--- Public Exports ------------------------------------------------------

pub use engine::{Engine, EngineBuilder};
