//=========================================================================
// Platform Bridge
//=========================================================================
//
// Bridges the winit platform layer with the game core.
//
// Components:
// - `interface`: Platform → core message type (the contract)
// - `event_collector`: Core-side per-frame draining
//
//=========================================================================

//=== Module Declarations =================================================

pub(crate) mod event_collector;
pub(crate) mod interface;

//=== Public API ==========================================================

pub use event_collector::TickControl;

//=== Internal API ========================================================

pub(crate) use event_collector::EventCollector;
pub(crate) use interface::PlatformEvent;
