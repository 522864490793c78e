//! Eight dim colors bouncing between the ends of the strip at 60fps. Ctrl-C to turn them off.
use std::process::ExitCode;

use ws281x_patterns_core::lights::Bounce;

fn main() -> ExitCode {
    ws281x_patterns::run_pattern(Bounce::new())
}
