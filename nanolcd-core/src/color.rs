//! RGB565 pixel values
//!
//! The panel takes 16 bits per pixel: 5 bits red, 6 bits green, 5 bits
//! blue, packed `RRRRRGGGGGGBBBBB`. There is no transparency.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A single RGB565 pixel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(transparent)]
pub struct Rgb565(pub u16);

impl Rgb565 {
    pub const WHITE: Self = Self(0xFFFF);
    pub const BLACK: Self = Self(0x0000);
    pub const BLUE: Self = Self(0x001F);
    pub const BRED: Self = Self(0xF81F);
    pub const GRED: Self = Self(0xFFE0);
    pub const GBLUE: Self = Self(0x07FF);
    pub const RED: Self = Self(0xF800);
    pub const MAGENTA: Self = Self(0xF81F);
    pub const GREEN: Self = Self(0x07E0);
    pub const CYAN: Self = Self(0x7FFF);
    pub const YELLOW: Self = Self(0xFFE0);
    pub const BROWN: Self = Self(0xBC40);
    pub const BRRED: Self = Self(0xFC07);
    pub const GRAY: Self = Self(0x8430);
    pub const DARKBLUE: Self = Self(0x01CF);
    pub const LIGHTBLUE: Self = Self(0x7D7C);
    pub const GRAYBLUE: Self = Self(0x5458);
    pub const LIGHTGREEN: Self = Self(0x841F);
    pub const LGRAY: Self = Self(0xC618);
    pub const LGRAYBLUE: Self = Self(0xA651);
    pub const LBBLUE: Self = Self(0x2B12);

    /// Pack 5/6/5-bit channel values
    ///
    /// Out-of-range channel bits are masked off.
    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self(((red as u16 & 0x1F) << 11) | ((green as u16 & 0x3F) << 5) | (blue as u16 & 0x1F))
    }

    /// Convert from 8-bit-per-channel RGB by truncation
    pub const fn from_rgb888(red: u8, green: u8, blue: u8) -> Self {
        Self::new(red >> 3, green >> 2, blue >> 3)
    }

    /// Raw 16-bit value as sent on the wire
    pub const fn raw(self) -> u16 {
        self.0
    }

    /// Red channel (0-31)
    pub const fn red(self) -> u8 {
        (self.0 >> 11) as u8
    }

    /// Green channel (0-63)
    pub const fn green(self) -> u8 {
        ((self.0 >> 5) & 0x3F) as u8
    }

    /// Blue channel (0-31)
    pub const fn blue(self) -> u8 {
        (self.0 & 0x1F) as u8
    }

    /// Same hue at half brightness
    pub const fn dampen(self) -> Self {
        Self::new(self.red() >> 1, self.green() >> 1, self.blue() >> 1)
    }
}

impl From<u16> for Rgb565 {
    fn from(raw: u16) -> Self {
        Self(raw)
    }
}

impl From<Rgb565> for u16 {
    fn from(color: Rgb565) -> Self {
        color.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_channel_packing() {
        assert_eq!(Rgb565::new(31, 0, 0), Rgb565::RED);
        assert_eq!(Rgb565::new(0, 63, 0), Rgb565::GREEN);
        assert_eq!(Rgb565::new(0, 0, 31), Rgb565::BLUE);
        assert_eq!(Rgb565::new(31, 63, 31), Rgb565::WHITE);
    }

    #[test]
    fn test_channel_accessors() {
        let color = Rgb565::BROWN;
        assert_eq!(Rgb565::new(color.red(), color.green(), color.blue()), color);
    }

    #[test]
    fn test_from_rgb888() {
        assert_eq!(Rgb565::from_rgb888(255, 255, 255), Rgb565::WHITE);
        assert_eq!(Rgb565::from_rgb888(255, 0, 0), Rgb565::RED);
        assert_eq!(Rgb565::from_rgb888(7, 3, 7), Rgb565::BLACK);
    }

    #[test]
    fn test_dampen_halves_each_channel() {
        let dim = Rgb565::WHITE.dampen();
        assert_eq!(dim.red(), 15);
        assert_eq!(dim.green(), 31);
        assert_eq!(dim.blue(), 15);
        // No bleed between channels
        assert_eq!(Rgb565::RED.dampen(), Rgb565::new(15, 0, 0));
        assert_eq!(Rgb565::BLACK.dampen(), Rgb565::BLACK);
    }
}
