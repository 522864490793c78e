//! The real strip, through the C rpi_ws281x library.
//!
//! Only runs on a Raspberry Pi, as root (it maps `/dev/mem`).
use rs_ws281x::{ChannelBuilder, Controller, ControllerBuilder, StripType as HwStripType, WS2811Error};
use ws281x_patterns_core::{
    config::{ChannelConfig, StripConfig, StripType},
    errors::{StripError, StripResult},
    lights::Pixel,
    logging::info,
    session::StripDriver,
};

pub struct Ws281xStrip {
    /// dropping this calls `ws2811_fini`
    controller: Controller,
    channel: usize,
}

impl Ws281xStrip {
    pub fn open(config: &StripConfig) -> StripResult<Self> {
        let (channel, _) = config.active_channel().ok_or(StripError::Generic)?;

        let [first, second] = &config.channels;

        let controller = ControllerBuilder::new()
            .freq(config.frequency)
            .dma(i32::from(config.dma_channel))
            .channel(
                0,
                ChannelBuilder::new()
                    .pin(i32::from(first.pin))
                    .count(led_count(first)?)
                    .invert(first.invert)
                    .brightness(first.brightness)
                    .strip_type(strip_type(first.strip_type))
                    .build(),
            )
            .channel(
                1,
                ChannelBuilder::new()
                    .pin(i32::from(second.pin))
                    .count(led_count(second)?)
                    .invert(second.invert)
                    .brightness(second.brightness)
                    .strip_type(strip_type(second.strip_type))
                    .build(),
            )
            .build()
            .map_err(strip_error)?;

        info!("ws2811 controller ready on channel {}", channel);

        Ok(Self {
            controller,
            channel,
        })
    }
}

impl StripDriver for Ws281xStrip {
    fn leds_mut(&mut self) -> &mut [Pixel] {
        // RawColor is the `[u8; 4]` view of `ws2811_led_t`. same layout as Pixel
        bytemuck::cast_slice_mut(self.controller.leds_mut(self.channel))
    }

    fn render(&mut self) -> StripResult<()> {
        self.controller.render().map_err(strip_error)
    }

    fn finalize(self) {
        drop(self.controller);
    }
}

fn led_count(channel: &ChannelConfig) -> StripResult<i32> {
    i32::try_from(channel.count).map_err(|_| StripError::Generic)
}

fn strip_type(strip_type: StripType) -> HwStripType {
    match strip_type {
        StripType::Rgb => HwStripType::Ws2811Rgb,
        StripType::Rbg => HwStripType::Ws2811Rbg,
        StripType::Grb => HwStripType::Ws2811Grb,
        StripType::Gbr => HwStripType::Ws2811Gbr,
        StripType::Brg => HwStripType::Ws2811Brg,
        StripType::Bgr => HwStripType::Ws2811Bgr,
    }
}

fn strip_error(err: WS2811Error) -> StripError {
    #[allow(unreachable_patterns)]
    match err {
        WS2811Error::Generic => StripError::Generic,
        WS2811Error::OutOfMemory => StripError::OutOfMemory,
        WS2811Error::HwNotSupported => StripError::HwNotSupported,
        WS2811Error::MemLock => StripError::MemLock,
        WS2811Error::Mmap => StripError::Mmap,
        WS2811Error::MapRegisters => StripError::MapRegisters,
        WS2811Error::GpioInit => StripError::GpioInit,
        WS2811Error::PwmSetup => StripError::PwmSetup,
        WS2811Error::MailboxDevice => StripError::MailboxDevice,
        WS2811Error::Dma => StripError::Dma,
        WS2811Error::IllegalGpio => StripError::IllegalGpio,
        WS2811Error::PcmSetup => StripError::PcmSetup,
        WS2811Error::SpiSetup => StripError::SpiSetup,
        WS2811Error::SpiTransfer => StripError::SpiTransfer,
        _ => StripError::Generic,
    }
}
