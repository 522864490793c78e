mod terminal;
#[cfg(feature = "hardware")]
mod ws281x;

pub use terminal::TerminalStrip;
#[cfg(feature = "hardware")]
pub use ws281x::Ws281xStrip;

use anyhow::Context;
use signal_hook::consts::signal::{SIGINT, SIGTERM};
use std::process::ExitCode;
use ws281x_patterns_core::{
    config::StripConfig,
    errors::StripResult,
    lights::FrameSource,
    logging::{error, info},
    run_loop::RunLoop,
    session::{DeviceSession, StripDriver},
    stop::StopFlag,
};

/// Everything a pattern binary does: logging, signals, open the strip, loop, clean up.
pub fn run_pattern<S: FrameSource>(frame_source: S) -> ExitCode {
    init_logging();

    info!("hello, {}!", frame_source.name());

    let stop = StopFlag::new();

    match try_run_pattern(frame_source, &stop, open_strip) {
        Ok(status) => ExitCode::from(exit_status(status)),
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_nanos()
        .init();
}

/// SIGINT and SIGTERM only set the flag. Repeats do nothing more, so the strip is always cleared and finalized.
pub fn register_signals(stop: &StopFlag) -> anyhow::Result<()> {
    for signal in [SIGINT, SIGTERM] {
        signal_hook::flag::register(signal, stop.as_atomic())
            .with_context(|| format!("registering handler for signal {signal}"))?;
    }

    Ok(())
}

/// The process exits with the library status, truncated to a byte like a C `main` returning it.
pub fn exit_status(status: StripResult<()>) -> u8 {
    match status {
        Ok(()) => 0,
        Err(err) => err.code() as u8,
    }
}

/// The outer `Result` is for setup that has nothing to do with the strip. The inner one is the strip's status.
fn try_run_pattern<S, D, F>(
    frame_source: S,
    stop: &StopFlag,
    open: F,
) -> anyhow::Result<StripResult<()>>
where
    S: FrameSource,
    D: StripDriver,
    F: FnOnce(&StripConfig) -> StripResult<D>,
{
    register_signals(stop)?;

    let session = match DeviceSession::initialize(StripConfig::default(), open) {
        Ok(x) => x,
        Err(err) => {
            error!("ws2811_init failed: {err}");
            return Ok(Err(err));
        }
    };

    Ok(RunLoop::new(frame_source, session, stop).run())
}

#[cfg(feature = "hardware")]
fn open_strip(config: &StripConfig) -> StripResult<Ws281xStrip> {
    Ws281xStrip::open(config)
}

#[cfg(not(feature = "hardware"))]
fn open_strip(config: &StripConfig) -> StripResult<TerminalStrip<std::io::Stdout>> {
    TerminalStrip::open(config, std::io::stdout())
}
