//=========================================================================
// Input Buffer
//
// Collects presses between frame boundaries.
//
// Responsibilities:
// - Keep presses in arrival order (consecutive duplicates dropped)
// - Hand the whole frame over at once via `drain()`
//
//=========================================================================

//=== Internal Modules ====================================================
use crate::core::input::InputEvent;

//=== InputBuffer Struct ==================================================
//
// Transient event store for one frame of input.
//
pub(crate) struct InputBuffer {
    events: Vec<InputEvent>,
}

impl InputBuffer {
    //--- Construction -----------------------------------------------------
    pub(crate) fn new() -> Self {
        const BASE: usize = 16;

        Self {
            events: Vec::with_capacity(BASE),
        }
    }

    //--- Event Handling ---------------------------------------------------
    //
    // Duplicate consecutive events are ignored to prevent flooding.
    //
    pub(crate) fn push(&mut self, event: InputEvent) {
        if self.events.last() != Some(&event) {
            self.events.push(event);
        }
    }

    //--- Drain ------------------------------------------------------------
    //
    // Returns this frame's events and empties the buffer, or `None` when
    // nothing was buffered.
    //
    pub(crate) fn drain(&mut self) -> Option<Vec<InputEvent>> {
        if self.is_empty() {
            return None;
        }
        Some(std::mem::take(&mut self.events))
    }

    //--- Utilities --------------------------------------------------------
    pub(crate) fn len(&self) -> usize {
        self.events.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}

//=========================================================================
// Unit Tests
//=========================================================================
