//=========================================================================
// Input Processor
//=========================================================================
//
// Converts winit pointer events into engine InputEvents.
//
// Architecture:
//   winit events → InputProcessor → InputEvent (engine type) → InputBuffer
//
// Stateful cursor tracking: winit reports button presses without a
// position, so the last `CursorMoved` location is cached and attached
// to every press. Window coordinates are mapped into frame-buffer
// pixels by the caller-supplied `to_frame` function (the surface
// letterboxes and scales the logical frame).
//
//=========================================================================

//=== External Dependencies ===============================================

use winit::event::{ElementState, MouseButton as WinitMouseButton};

//=== Internal Dependencies ===============================================

use crate::core::geometry::Point;
use crate::core::input::{InputEvent, MouseButton};

//=== InputProcessor ======================================================

/// Converts winit events to engine InputEvents with cursor tracking.
pub(crate) struct InputProcessor {
    cursor: (f64, f64),
}

impl InputProcessor {
    //--- Construction -----------------------------------------------------

    pub(crate) fn new() -> Self {
        Self { cursor: (0.0, 0.0) }
    }

    //--- Cursor State -----------------------------------------------------

    /// Last known cursor position in window coordinates.
    #[cfg(test)]
    pub(crate) fn cursor(&self) -> (f64, f64) {
        self.cursor
    }

    //--- Event Processing -------------------------------------------------

    /// Caches the cursor for the next press.
    pub(crate) fn process_cursor_move(&mut self, x: f64, y: f64) {
        self.cursor = (x, y);
    }

    /// Converts a button press at the cached cursor into `PointerDown`.
    ///
    /// Releases are dropped; the game reacts to presses only.
    pub(crate) fn process_mouse_button(
        &self,
        button: WinitMouseButton,
        state: ElementState,
        to_frame: impl Fn(f64, f64) -> Point,
    ) -> Option<InputEvent> {
        match state {
            ElementState::Pressed => Some(InputEvent::PointerDown {
                button: MouseButton::from(button),
                position: to_frame(self.cursor.0, self.cursor.1),
            }),
            ElementState::Released => None,
        }
    }
}

//=========================================================================
// Winit Conversions
//=========================================================================

/// Converts winit mouse buttons to engine buttons.
///
/// Left/Right/Middle mapped directly; Back/Forward/Other → Other.
impl From<WinitMouseButton> for MouseButton {
    fn from(button: WinitMouseButton) -> Self {
        match button {
            WinitMouseButton::Left => MouseButton::Left,
            WinitMouseButton::Right => MouseButton::Right,
            WinitMouseButton::Middle => MouseButton::Middle,
            _ => MouseButton::Other,
        }
    }
}

//=========================================================================
// Tests
//=========================================================================
