use crate::errors::{StripError, StripResult};

/// `WS2811_TARGET_FREQ`
pub const TARGET_FREQ: u32 = 800_000;

/// the library always has exactly two output channels. unused ones get a count of 0
pub const NUM_CHANNELS: usize = 2;

/// Order that the strip expects the color bytes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StripType {
    Rgb,
    Rbg,
    Grb,
    Gbr,
    Brg,
    Bgr,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelConfig {
    pub pin: u8,
    pub count: usize,
    pub invert: bool,
    /// 0-255. the hardware scales every byte by `(brightness + 1) / 256`
    pub brightness: u8,
    pub strip_type: StripType,
}

impl ChannelConfig {
    pub const fn disabled() -> Self {
        Self {
            pin: 0,
            count: 0,
            invert: false,
            brightness: 0,
            strip_type: StripType::Rgb,
        }
    }

    pub const fn is_enabled(&self) -> bool {
        self.count > 0
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StripConfig {
    pub frequency: u32,
    pub dma_channel: u8,
    pub channels: [ChannelConfig; NUM_CHANNELS],
}

impl Default for StripConfig {
    fn default() -> Self {
        Self {
            frequency: TARGET_FREQ,
            dma_channel: 10,
            channels: [
                ChannelConfig {
                    pin: 18,
                    count: 150,
                    invert: false,
                    brightness: 255,
                    strip_type: StripType::Gbr,
                },
                ChannelConfig::disabled(),
            ],
        }
    }
}

/// Pins with a PWM, PCM, or SPI function the library knows how to drive.
const DRIVABLE_PINS: [u8; 12] = [12, 18, 40, 52, 13, 19, 41, 45, 53, 21, 31, 10];

const MAX_DMA_CHANNEL: u8 = 14;

impl StripConfig {
    /// The channel whose buffer the patterns write into.
    pub fn active_channel(&self) -> Option<(usize, &ChannelConfig)> {
        self.channels.iter().enumerate().find(|(_, x)| x.is_enabled())
    }

    /// Checked before the driver touches any hardware.
    pub fn validate(&self) -> StripResult<()> {
        if self.active_channel().is_none() {
            return Err(StripError::Generic);
        }

        if self.dma_channel > MAX_DMA_CHANNEL {
            return Err(StripError::Dma);
        }

        for channel in self.channels.iter().filter(|x| x.is_enabled()) {
            if !DRIVABLE_PINS.contains(&channel.pin) {
                return Err(StripError::IllegalGpio);
            }
        }

        Ok(())
    }
}
