//=========================================================================
// Prelude
//=========================================================================
//
// Convenience module that re-exports commonly used types and traits.
//
// Usage:
//   use memory_game::prelude::*;
//
//=========================================================================

//=== Public API ==========================================================

// Engine
pub use crate::engine::{Engine, EngineBuilder};

// Configuration and assets
pub use crate::core::catalog::{GameAssets, ItemCatalog, ItemId};
pub use crate::core::config::{FadeConfig, GameConfig, PlacementConfig};
pub use crate::core::error::{GameError, Result};

// Game logic
pub use crate::core::controller::GameController;
pub use crate::core::platform_bridge::TickControl;
pub use crate::core::scene::{Scene, SceneKind, SceneToken};
pub use crate::core::session::GameSession;

// Input
pub use crate::core::input::{InputEvent, MouseButton};
