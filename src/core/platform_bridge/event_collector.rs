//=========================================================================
// Event Collector
//=========================================================================
//
// Platform event collector with bounded polling and shutdown detection.
//
// Architecture:
//   Receiver<PlatformEvent> → collect_frame() → events → TickControl
//
// Bounded polling prevents a flood of input from stalling a frame.
// Never blocks: the platform paces frames, not the collector.
//
//=========================================================================

//=== External Dependencies ===============================================

use crossbeam_channel::{Receiver, TryRecvError};
use log::warn;

//=== Internal Dependencies ===============================================

use super::PlatformEvent;
use crate::core::input::InputEvent;

//=== TickControl =========================================================

/// Frame loop control signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickControl {
    Continue,
    Exit,
}

//=== EventCollector ======================================================

/// Drains platform events once per frame, in arrival order.
///
/// Batches are flattened in arrival order.
pub(crate) struct EventCollector {
    receiver: Receiver<PlatformEvent>,
    events: Vec<InputEvent>,
}

impl EventCollector {
    pub(crate) const MAX_EVENTS_PER_FRAME: usize = 100;

    pub(crate) fn new(receiver: Receiver<PlatformEvent>) -> Self {
        Self {
            receiver,
            events: Vec::with_capacity(16),
        }
    }

    /// Collects pending platform events (bounded to prevent starvation).
    ///
    /// Messages beyond the per-frame bound stay queued for the next frame.
    pub(crate) fn collect_frame(&mut self) -> TickControl {
        self.events.clear();
        let mut drained = 0;

        while drained < Self::MAX_EVENTS_PER_FRAME {
            match self.receiver.try_recv() {
                Ok(event) => {
                    if self.handle_event(event) == TickControl::Exit {
                        return TickControl::Exit;
                    }
                    drained += 1;
                }
                Err(TryRecvError::Disconnected) => return TickControl::Exit,
                Err(TryRecvError::Empty) => break,
            }
        }

        if drained >= Self::MAX_EVENTS_PER_FRAME {
            warn!(target: "engine", "Event queue backlog: drained {} messages this frame", drained);
        }

        TickControl::Continue
    }

    /// Input collected by the last `collect_frame`.
    pub(crate) fn events(&self) -> &[InputEvent] {
        &self.events
    }

    fn handle_event(&mut self, event: PlatformEvent) -> TickControl {
        match event {
            PlatformEvent::Inputs(events) => {
                self.events.extend(events);
                TickControl::Continue
            }
            PlatformEvent::WindowClosed => TickControl::Exit,
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geometry::Point;
    use crate::core::input::MouseButton;
    use crossbeam_channel::unbounded;

    fn click(x: i32, y: i32) -> InputEvent {
        InputEvent::PointerDown {
            button: MouseButton::Left,
            position: Point::new(x, y),
        }
    }

    #[test]
    fn collect_handles_empty_queue() {
        let (_tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        let result = collector.collect_frame();

        assert_eq!(result, TickControl::Continue);
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_aggregates_multiple_batches_in_order() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![click(1, 1), click(4, 4)])).unwrap();
        tx.send(PlatformEvent::Inputs(vec![click(2, 2)])).unwrap();

        let result = collector.collect_frame();

        assert_eq!(result, TickControl::Continue);
        let clicks: Vec<_> = collector.events().iter().map(InputEvent::position).collect();
        assert_eq!(clicks, vec![Point::new(1, 1), Point::new(4, 4), Point::new(2, 2)]);
    }

    #[test]
    fn collect_returns_exit_on_window_closed() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::WindowClosed).unwrap();

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn collect_clears_previous_events() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        tx.send(PlatformEvent::Inputs(vec![click(3, 3)])).unwrap();

        collector.collect_frame();
        assert_eq!(collector.events().len(), 1);

        collector.collect_frame();
        assert!(collector.events().is_empty());
    }

    #[test]
    fn collect_returns_exit_on_disconnect() {
        let (tx, rx) = unbounded::<PlatformEvent>();
        let mut collector = EventCollector::new(rx);

        drop(tx);

        assert_eq!(collector.collect_frame(), TickControl::Exit);
    }

    #[test]
    fn backlog_is_carried_to_next_frame() {
        let (tx, rx) = unbounded();
        let mut collector = EventCollector::new(rx);

        for i in 0..(EventCollector::MAX_EVENTS_PER_FRAME + 5) {
            tx.send(PlatformEvent::Inputs(vec![click(i as i32, 0)])).unwrap();
        }

        collector.collect_frame();
        assert_eq!(collector.events().len(), EventCollector::MAX_EVENTS_PER_FRAME);

        collector.collect_frame();
        assert_eq!(collector.events().len(), 5);
    }
}
