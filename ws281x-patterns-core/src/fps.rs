use crate::logging::debug;

use std::time::{Duration, Instant};

pub struct FpsTracker {
    label: &'static str,
    last: Instant,
    count: u64,
}

impl FpsTracker {
    pub fn new(label: &'static str) -> Self {
        Self {
            label,
            last: Instant::now(),
            count: 0,
        }
    }

    /// Returns the frames counted over the last second, once a second.
    pub fn tick(&mut self) -> Option<u64> {
        self.count += 1;
        let now = Instant::now();
        let elapsed = now.duration_since(self.last);

        if elapsed < Duration::from_secs(1) {
            return None;
        }

        let elapsed_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);

        let fps = self.count * 1_000 / elapsed_ms;

        self.count = 0;
        self.last = now;

        debug!("{} FPS: {}", self.label, fps);

        Some(fps)
    }
}
