//! Frame timing

use std::thread;
use std::time::{Duration, Instant};

/// Monotonic clock driving the frame loop
#[derive(Debug)]
pub struct FrameClock {
    started: Instant,
    frame_start: Instant,
    budget: Duration,
    sleep: bool,
}

impl FrameClock {
    /// `frame_delay_ms` is the per-frame budget; `sleep = false` runs flat out
    pub fn new(frame_delay_ms: u32, sleep: bool) -> Self {
        let now = Instant::now();
        Self {
            started: now,
            frame_start: now,
            budget: Duration::from_millis(u64::from(frame_delay_ms)),
            sleep,
        }
    }

    /// Milliseconds since the clock was created
    pub fn elapsed_ms(&self) -> u64 {
        self.started.elapsed().as_millis() as u64
    }

    /// Budget of one frame in milliseconds; the step fed to the simulation
    pub fn frame_ms(&self) -> u64 {
        self.budget.as_millis() as u64
    }

    /// End the current frame: sleep away whatever is left of the budget
    pub fn pace(&mut self) {
        let spent = self.frame_start.elapsed();
        if self.sleep && spent < self.budget {
            thread::sleep(self.budget - spent);
        }
        self.frame_start = Instant::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pace_waits_out_budget() {
        let mut clock = FrameClock::new(10, true);
        let before = Instant::now();
        clock.pace();
        assert!(before.elapsed() >= Duration::from_millis(9));
        assert_eq!(clock.frame_ms(), 10);
    }

    #[test]
    fn test_no_sleep_returns_immediately() {
        let mut clock = FrameClock::new(1_000, false);
        let before = Instant::now();
        clock.pace();
        assert!(before.elapsed() < Duration::from_millis(500));
    }
}
