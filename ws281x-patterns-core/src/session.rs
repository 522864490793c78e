use crate::config::StripConfig;
use crate::errors::StripResult;
use crate::lights::Pixel;
use crate::logging::{debug, info};

/// A backend that can put pixels on a strip.
///
/// `leds_mut` must hand out the memory that `render` transmits so that frame sources write straight into it.
pub trait StripDriver {
    fn leds_mut(&mut self) -> &mut [Pixel];

    fn render(&mut self) -> StripResult<()>;

    /// Release the hardware.
    fn finalize(self);
}

/// An initialized strip.
pub struct DeviceSession<D: StripDriver> {
    driver: D,
}

impl<D: StripDriver> DeviceSession<D> {
    /// Validate `config` and then open the driver with it.
    pub fn initialize<F>(config: StripConfig, open: F) -> StripResult<Self>
    where
        F: FnOnce(&StripConfig) -> StripResult<D>,
    {
        config.validate()?;

        debug!("opening strip: {:?}", config);

        let driver = open(&config)?;

        info!(
            "strip initialized. {} leds on dma {}",
            active_len(&config),
            config.dma_channel
        );

        Ok(Self { driver })
    }

    /// The frame buffer of the active channel.
    pub fn frame_mut(&mut self) -> &mut [Pixel] {
        self.driver.leds_mut()
    }

    pub fn render(&mut self) -> StripResult<()> {
        self.driver.render()
    }

    /// Consumes the session so it cannot be finalized twice.
    pub fn finalize(self) {
        debug!("finalizing strip");

        self.driver.finalize();
    }
}

fn active_len(config: &StripConfig) -> usize {
    config.active_channel().map(|(_, x)| x.count).unwrap_or_default()
}
