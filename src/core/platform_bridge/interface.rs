//=========================================================================
// Platform Bridge Interface
//=========================================================================
//
// Platform-to-core message type.
//
// The platform and the core share one thread; the channel decouples
// winit callbacks from the per-frame game step.
//
//=========================================================================

//=== Internal Dependencies ===============================================

use crate::core::input::InputEvent;

//=== PlatformEvent =======================================================

/// Events sent from platform to core over the bridge channel.
#[derive(Debug, Clone)]
pub(crate) enum PlatformEvent {
    /// Presses buffered during one frame, in arrival order.
    Inputs(Vec<InputEvent>),

    /// Window close requested.
    WindowClosed,
}

//=========================================================================
// Unit Tests
//=========================================================================
