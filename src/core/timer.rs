//=========================================================================
// Fade Timer
//=========================================================================
//
// One-shot countdown armed by advance clicks.
//
// The controller ticks it once per frame; the tick that crosses zero
// reports `true` exactly once and disarms the timer. Re-arming while
// armed restarts the countdown.
//
//=========================================================================

use std::time::Duration;

/// Deferred "start fading" signal, checked every frame.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FadeTimer {
    remaining: Option<Duration>,
}

impl FadeTimer {
    pub fn new() -> Self {
        Self { remaining: None }
    }

    pub fn arm(&mut self, delay: Duration) {
        self.remaining = Some(delay);
    }

    pub fn disarm(&mut self) {
        self.remaining = None;
    }

    pub fn is_armed(&self) -> bool {
        self.remaining.is_some()
    }

    /// Advances the countdown. Returns `true` on the frame it fires.
    pub fn tick(&mut self, dt: Duration) -> bool {
        let Some(remaining) = self.remaining else {
            return false;
        };

        match remaining.checked_sub(dt) {
            Some(left) if !left.is_zero() => {
                self.remaining = Some(left);
                false
            }
            _ => {
                self.remaining = None;
                true
            }
        }
    }
}

//=========================================================================
// Unit Tests
//=========================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const FRAME: Duration = Duration::from_millis(33);

    #[test]
    fn unarmed_timer_never_fires() {
        let mut timer = FadeTimer::new();
        for _ in 0..100 {
            assert!(!timer.tick(FRAME));
        }
    }

    #[test]
    fn fires_once_after_delay() {
        let mut timer = FadeTimer::new();
        timer.arm(Duration::from_millis(100));

        assert!(!timer.tick(FRAME));
        assert!(!timer.tick(FRAME));
        assert!(!timer.tick(FRAME));
        assert!(timer.tick(FRAME), "99ms + 33ms crosses the 100ms delay");
        assert!(!timer.is_armed());
        assert!(!timer.tick(FRAME), "timer is one-shot");
    }

    #[test]
    fn exact_delay_fires() {
        let mut timer = FadeTimer::new();
        timer.arm(Duration::from_millis(66));
        assert!(!timer.tick(FRAME));
        assert!(timer.tick(FRAME));
    }

    #[test]
    fn rearm_restarts_countdown() {
        let mut timer = FadeTimer::new();
        timer.arm(Duration::from_millis(50));
        assert!(!timer.tick(FRAME));

        timer.arm(Duration::from_millis(50));
        assert!(!timer.tick(FRAME));
        assert!(timer.tick(FRAME));
    }

    #[test]
    fn disarm_cancels() {
        let mut timer = FadeTimer::new();
        timer.arm(Duration::from_millis(10));
        timer.disarm();
        assert!(!timer.tick(FRAME));
    }
}
