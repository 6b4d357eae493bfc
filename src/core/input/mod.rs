//=========================================================================
// Input
//
// Platform-neutral input events consumed by the game controller.
//
//=========================================================================

//=== Submodules ==========================================================

pub mod event;

//=== Public API ==========================================================

pub use event::{InputEvent, MouseButton};
