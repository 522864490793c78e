//! Every led full white, redrawn once a second. Ctrl-C to turn them off.
use std::process::ExitCode;

use ws281x_patterns_core::lights::AllOn;

fn main() -> ExitCode {
    ws281x_patterns::run_pattern(AllOn)
}
