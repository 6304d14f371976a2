//! Fixed-rate frame pacing.

use std::time::{Duration, Instant};

/// Paces the control loop at a fixed frame rate and reports the real time
/// between frames, which drives gravity.
#[derive(Debug, Clone)]
pub struct FrameClock {
    frame: Duration,
    last: Instant,
}

impl FrameClock {
    pub fn new(fps: u32) -> Self {
        Self::starting_at(fps, Instant::now())
    }

    pub fn starting_at(fps: u32, now: Instant) -> Self {
        Self {
            frame: Duration::from_secs(1) / fps.max(1),
            last: now,
        }
    }

    pub fn frame_duration(&self) -> Duration {
        self.frame
    }

    /// Time left until the next frame is due; zero when it is already late.
    pub fn remaining(&self) -> Duration {
        self.remaining_at(Instant::now())
    }

    pub fn remaining_at(&self, now: Instant) -> Duration {
        (self.last + self.frame).saturating_duration_since(now)
    }

    /// Start a new frame if one is due, returning milliseconds since the last one.
    pub fn tick(&mut self) -> Option<u32> {
        self.tick_at(Instant::now())
    }

    pub fn tick_at(&mut self, now: Instant) -> Option<u32> {
        let elapsed = now.saturating_duration_since(self.last);
        if elapsed < self.frame {
            return None;
        }
        self.last = now;
        Some(u32::try_from(elapsed.as_millis()).unwrap_or(u32::MAX))
    }
}
