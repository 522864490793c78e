//! Draw the strip as a row of colored blocks. For working on patterns without a pi.
use std::fmt::Write as _;
use std::io::Write;

use smart_leds::{RGB8, brightness};
use ws281x_patterns_core::{
    config::StripConfig,
    errors::{StripError, StripResult},
    lights::Pixel,
    logging::{info, warn},
    session::StripDriver,
};

pub struct TerminalStrip<W: Write> {
    out: W,
    leds: Vec<Pixel>,
    brightness: u8,
    line: String,
}

impl<W: Write> TerminalStrip<W> {
    pub fn open(config: &StripConfig, out: W) -> StripResult<Self> {
        let (_, channel) = config.active_channel().ok_or(StripError::Generic)?;

        info!("no hardware. drawing {} leds in the terminal", channel.count);

        Ok(Self {
            out,
            leds: vec![Pixel::BLACK; channel.count],
            brightness: channel.brightness,
            line: String::new(),
        })
    }
}

impl<W: Write> StripDriver for TerminalStrip<W> {
    fn leds_mut(&mut self) -> &mut [Pixel] {
        &mut self.leds
    }

    fn render(&mut self) -> StripResult<()> {
        self.line.clear();
        self.line.push('\r');

        // scaled the same way the ws2811 library scales before it sends
        let scaled = brightness(self.leds.iter().copied().map(RGB8::from), self.brightness);

        for color in scaled {
            write!(self.line, "\x1b[38;2;{};{};{}m█", color.r, color.g, color.b)
                .map_err(|_| StripError::Generic)?;
        }

        self.line.push_str("\x1b[0m");

        self.out
            .write_all(self.line.as_bytes())
            .and_then(|()| self.out.flush())
            .map_err(|err| {
                warn!("terminal write failed: {err}");
                StripError::Generic
            })
    }

    fn finalize(mut self) {
        // leave the last frame on its own line
        if let Err(err) = writeln!(self.out) {
            warn!("terminal write failed: {err}");
        }
    }
}
