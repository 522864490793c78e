//! Frame sources for a single strip.
//!
//! They all take a `&mut [Pixel]` that is the driver's own led buffer. Whatever is left in there is what gets rendered.

mod all_on;
mod bounce;
mod pattern;
mod pixel;

pub use all_on::AllOn;
pub use bounce::{Bounce, BounceState, PALETTE};
pub use pattern::{FrameSource, clear};
pub use pixel::Pixel;
