use core::time::Duration;

use super::Pixel;

pub trait FrameSource {
    /// for logs
    fn name(&self) -> &'static str;

    /// How long to sleep after each render. This is not adjusted for how long the render took.
    fn frame_period(&self) -> Duration;

    /// Overwrite `frame` with the next frame. `frame` still holds whatever was rendered last.
    fn next_frame(&mut self, frame: &mut [Pixel]);
}

/// Turn every led off.
pub fn clear(frame: &mut [Pixel]) {
    frame.fill(Pixel::BLACK);
}
