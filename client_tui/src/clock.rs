use game_core::Clock;
use std::thread;
use std::time::{Duration, Instant};

/// Fixed-rate frame pacer backed by the monotonic system clock
pub struct FrameClock {
    start: Instant,
    frame: Duration,
    next: Instant,
}

impl FrameClock {
    pub fn new(frame: Duration) -> Self {
        let start = Instant::now();
        Self {
            start,
            frame,
            next: start,
        }
    }
}

impl Clock for FrameClock {
    fn tick(&mut self) {
        let now = Instant::now();
        if self.next > now {
            thread::sleep(self.next - now);
            self.next += self.frame;
        } else {
            // Fell behind: don't try to catch up with a burst of frames
            self.next = now + self.frame;
        }
    }

    fn now_ms(&self) -> u64 {
        u64::try_from(self.start.elapsed().as_millis()).unwrap_or(u64::MAX)
    }
}
