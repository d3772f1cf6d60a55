use std::time::{Duration, Instant};

const FRAMES: [&str; 3] = ["·  ", "·· ", "···"];
const FRAME_DURATION: Duration = Duration::from_millis(300);

/// Three-dot "agent is typing" animation shown while a reply is pending.
#[derive(Debug, Clone)]
pub struct TypingIndicator {
    frame_index: usize,
    last_frame_time: Instant,
    active: bool,
}

impl Default for TypingIndicator {
    fn default() -> Self {
        Self::new()
    }
}

impl TypingIndicator {
    pub fn new() -> Self {
        Self {
            frame_index: 0,
            last_frame_time: Instant::now(),
            active: false,
        }
    }

    pub fn set_active(&mut self, active: bool) {
        if active && !self.active {
            self.frame_index = 0;
            self.last_frame_time = Instant::now();
        }
        self.active = active;
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Advance one frame if its duration has elapsed at `now`.
    pub fn tick(&mut self, now: Instant) -> bool {
        if !self.active {
            return false;
        }

        if now.saturating_duration_since(self.last_frame_time) >= FRAME_DURATION {
            self.frame_index = (self.frame_index + 1) % FRAMES.len();
            self.last_frame_time = now;
            true
        } else {
            false
        }
    }

    pub fn current_frame(&self) -> &'static str {
        FRAMES[self.frame_index % FRAMES.len()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_indicator_starts_inactive() {
        let mut indicator = TypingIndicator::new();
        assert!(!indicator.is_active());
        assert!(!indicator.tick(Instant::now() + Duration::from_secs(1)));
        assert_eq!(indicator.current_frame(), "·  ");
    }

    #[test]
    fn test_indicator_cycles_frames() {
        let mut indicator = TypingIndicator::new();
        indicator.set_active(true);
        let start = indicator.last_frame_time;

        assert!(!indicator.tick(start + Duration::from_millis(100)));
        assert!(indicator.tick(start + FRAME_DURATION));
        assert_eq!(indicator.current_frame(), "·· ");
        assert!(indicator.tick(start + FRAME_DURATION * 2));
        assert_eq!(indicator.current_frame(), "···");
        assert!(indicator.tick(start + FRAME_DURATION * 3));
        assert_eq!(indicator.current_frame(), "·  ");
    }

    #[test]
    fn test_reactivation_restarts_animation() {
        let mut indicator = TypingIndicator::new();
        indicator.set_active(true);
        indicator.tick(Instant::now() + FRAME_DURATION);
        indicator.set_active(false);
        indicator.set_active(true);
        assert_eq!(indicator.current_frame(), "·  ");
    }
}
