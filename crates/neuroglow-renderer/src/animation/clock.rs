/// Frame-rate limiter. A frame is due once at least `throttle_ms` has
/// passed since the last processed frame.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameClock {
    last_frame_ms: f64,
    throttle_ms: f64,
}

impl FrameClock {
    /// The last frame time starts at zero, so a first call at `t = 0`
    /// is not due.
    pub fn new(throttle_ms: f64) -> Self {
        Self {
            last_frame_ms: 0.0,
            throttle_ms,
        }
    }

    pub fn throttle_ms(&self) -> f64 {
        self.throttle_ms
    }

    pub fn last_frame_ms(&self) -> f64 {
        self.last_frame_ms
    }

    /// Returns true and records `now_ms` when a frame is due.
    pub fn try_advance(&mut self, now_ms: f64) -> bool {
        if now_ms - self.last_frame_ms < self.throttle_ms {
            return false;
        }
        self.last_frame_ms = now_ms;
        true
    }

    /// Milliseconds until the next frame is due (zero if already due).
    pub fn remaining_ms(&self, now_ms: f64) -> f64 {
        (self.last_frame_ms + self.throttle_ms - now_ms).max(0.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THIRTY_FPS: f64 = 1000.0 / 30.0;

    #[test]
    fn first_frame_at_zero_is_not_due() {
        let mut clock = FrameClock::new(THIRTY_FPS);
        assert!(!clock.try_advance(0.0));
        assert_eq!(clock.last_frame_ms(), 0.0);
    }

    #[test]
    fn frame_due_after_throttle_interval() {
        let mut clock = FrameClock::new(THIRTY_FPS);
        assert!(!clock.try_advance(33.0));
        assert!(clock.try_advance(34.0));
        assert_eq!(clock.last_frame_ms(), 34.0);
        assert!(!clock.try_advance(60.0));
        assert!(clock.try_advance(70.0));
    }

    #[test]
    fn remaining_counts_down_to_zero() {
        let mut clock = FrameClock::new(40.0);
        assert!(clock.try_advance(100.0));
        assert_eq!(clock.remaining_ms(110.0), 30.0);
        assert_eq!(clock.remaining_ms(150.0), 0.0);
    }
}
