use bytemuck::{Pod, Zeroable};
use smart_leds::RGB8;

/// One led, packed as `0xWWRRGGBB`.
///
/// The bytes are stored little endian so that a `&mut [Pixel]` can be cast from the driver's `&mut [[u8; 4]]` without copying.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Pod, Zeroable)]
#[repr(transparent)]
pub struct Pixel([u8; 4]);

impl Pixel {
    pub const BLACK: Self = Self::packed(0x0000_0000);
    pub const WHITE: Self = Self::packed(0x00ff_ffff);

    pub const fn packed(value: u32) -> Self {
        Self(value.to_le_bytes())
    }

    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self([blue, green, red, 0])
    }

    pub const fn to_packed(self) -> u32 {
        u32::from_le_bytes(self.0)
    }

    pub const fn red(self) -> u8 {
        self.0[2]
    }

    pub const fn green(self) -> u8 {
        self.0[1]
    }

    pub const fn blue(self) -> u8 {
        self.0[0]
    }

    pub const fn is_black(self) -> bool {
        self.to_packed() == 0
    }
}

impl From<RGB8> for Pixel {
    fn from(color: RGB8) -> Self {
        Self::rgb(color.r, color.g, color.b)
    }
}

impl From<Pixel> for RGB8 {
    fn from(pixel: Pixel) -> Self {
        RGB8::new(pixel.red(), pixel.green(), pixel.blue())
    }
}
