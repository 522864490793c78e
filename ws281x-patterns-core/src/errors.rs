use core::fmt;

use thiserror::Error;

/// The status codes of the ws2811 library. Success is `Ok(())`, never a variant.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StripError {
    #[error("Generic failure")]
    Generic,
    #[error("Out of memory")]
    OutOfMemory,
    #[error("Hardware revision is not supported")]
    HwNotSupported,
    #[error("Memory lock failed")]
    MemLock,
    #[error("mmap() failed")]
    Mmap,
    #[error("Unable to map registers into userspace")]
    MapRegisters,
    #[error("Unable to initialize GPIO")]
    GpioInit,
    #[error("Unable to initialize PWM")]
    PwmSetup,
    #[error("Failed to create mailbox device")]
    MailboxDevice,
    #[error("DMA error")]
    Dma,
    #[error("Selected GPIO not possible")]
    IllegalGpio,
    #[error("Unable to initialize PCM")]
    PcmSetup,
    #[error("Unable to initialize SPI")]
    SpiSetup,
    #[error("SPI transfer error")]
    SpiTransfer,
}

pub type StripResult<T> = Result<T, StripError>;

impl StripError {
    /// The raw `ws2811_return_t` value.
    pub const fn code(self) -> i32 {
        match self {
            Self::Generic => -1,
            Self::OutOfMemory => -2,
            Self::HwNotSupported => -3,
            Self::MemLock => -4,
            Self::Mmap => -5,
            Self::MapRegisters => -6,
            Self::GpioInit => -7,
            Self::PwmSetup => -8,
            Self::MailboxDevice => -9,
            Self::Dma => -10,
            Self::IllegalGpio => -11,
            Self::PcmSetup => -12,
            Self::SpiSetup => -13,
            Self::SpiTransfer => -14,
        }
    }

    /// Unknown nonzero codes are reported as `Generic`.
    pub const fn from_code(code: i32) -> StripResult<()> {
        let err = match code {
            0 => return Ok(()),
            -2 => Self::OutOfMemory,
            -3 => Self::HwNotSupported,
            -4 => Self::MemLock,
            -5 => Self::Mmap,
            -6 => Self::MapRegisters,
            -7 => Self::GpioInit,
            -8 => Self::PwmSetup,
            -9 => Self::MailboxDevice,
            -10 => Self::Dma,
            -11 => Self::IllegalGpio,
            -12 => Self::PcmSetup,
            -13 => Self::SpiSetup,
            -14 => Self::SpiTransfer,
            _ => Self::Generic,
        };

        Err(err)
    }
}

/// Human readable text for any status, including success. Same text as the library's `ws2811_get_return_t_str`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusText(pub StripResult<()>);

impl fmt::Display for StatusText {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0 {
            Ok(()) => f.write_str("Success"),
            Err(err) => fmt::Display::fmt(&err, f),
        }
    }
}

pub fn status_text(status: StripResult<()>) -> StatusText {
    StatusText(status)
}
