use core::time::Duration;

use super::{FrameSource, Pixel};

/// Every led full white. Useful for checking the power supply can handle the whole strip.
#[derive(Debug, Default, Clone, Copy)]
pub struct AllOn;

impl FrameSource for AllOn {
    fn name(&self) -> &'static str {
        "all_on"
    }

    fn frame_period(&self) -> Duration {
        Duration::from_secs(1)
    }

    fn next_frame(&mut self, frame: &mut [Pixel]) {
        frame.fill(Pixel::WHITE);
    }
}
