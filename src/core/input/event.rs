//=========================================================================
// Input Event Types
//
// Platform-neutral representation of the pointer input the game reacts
// to. The platform layer (winit) converts OS events into these before
// they cross the platform bridge.
//
// Cursor motion never crosses the bridge: the platform caches the last
// position and stamps it onto each press.
//
// Event Flow:
// ```text
// Platform Layer (winit)
//         ↓
//    InputEvent (this module)
//         ↓
//    EventCollector (per-frame batches)
//         ↓
//    GameController::frame()
// ```
//
//=========================================================================

//=== Internal Imports ====================================================

use crate::core::geometry::Point;

//=== MouseButton =========================================================

/// Physical mouse button identifier.
///
/// The game treats every button as a click; the identity is kept for
/// logging.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Primary button (typically left).
    Left,

    /// Secondary button (typically right).
    Right,

    /// Middle button (wheel click).
    Middle,

    /// Any other button (side buttons, thumb buttons).
    Other,
}

//=== InputEvent ==========================================================

/// Input event from the platform layer.
///
/// Positions are in frame-buffer pixels (top-left origin), already
/// converted from window coordinates by the platform.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// Mouse button pressed at `position`.
    PointerDown { button: MouseButton, position: Point },
}

impl InputEvent {
    /// Frame position the event happened at.
    pub fn position(&self) -> Point {
        match self {
            Self::PointerDown { position, .. } => *position,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
