//! Fixed bitmap fonts
//!
//! Two tables with different bit layouts:
//!
//! - [`Font::Ascii8x8`]: 8 bytes per glyph, one byte per **column**,
//!   bit 0 = top row. Indexed directly by character code.
//! - [`Font::Ascii8x16`]: 16 bytes per glyph, one byte per **row**,
//!   bit 0 = leftmost column. Indexed by `code - 0x20`.
//!
//! Reading either table with the other's layout renders mirrored or
//! transposed glyphs, so all bit access goes through [`Glyph::is_set`].

mod ascii_8x16;
mod ascii_8x8;

pub use ascii_8x16::FONT_8X16;
pub use ascii_8x8::FONT_8X8;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// First code covered by the 8x16 table
const FIRST_PRINTABLE: u8 = 0x20;

/// Available bitmap fonts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Font {
    /// 8x8, column-major
    Ascii8x8,
    /// 8x16, row-major
    Ascii8x16,
}

impl Font {
    /// Glyph width in pixels
    pub const fn width(self) -> u16 {
        8
    }

    /// Glyph height in pixels
    pub const fn height(self) -> u16 {
        match self {
            Font::Ascii8x8 => 8,
            Font::Ascii8x16 => 16,
        }
    }

    /// Look up a character code
    ///
    /// Codes the table does not cover come back as a space.
    pub fn glyph(self, code: u8) -> Glyph {
        let bits: &'static [u8] = match self {
            Font::Ascii8x8 => FONT_8X8
                .get(code as usize)
                .unwrap_or(&FONT_8X8[FIRST_PRINTABLE as usize]),
            Font::Ascii8x16 => code
                .checked_sub(FIRST_PRINTABLE)
                .and_then(|index| FONT_8X16.get(index as usize))
                .unwrap_or(&FONT_8X16[0]),
        };
        Glyph { font: self, bits }
    }
}

/// Bitmap of one character in one font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Glyph {
    font: Font,
    bits: &'static [u8],
}

impl Glyph {
    pub fn font(&self) -> Font {
        self.font
    }

    /// Raw table bytes (columns for 8x8, rows for 8x16)
    pub fn bytes(&self) -> &'static [u8] {
        self.bits
    }

    /// Whether the pixel at column `x`, row `y` is inked
    ///
    /// Coordinates outside the glyph read as clear.
    pub fn is_set(&self, x: usize, y: usize) -> bool {
        if x >= self.font.width() as usize || y >= self.font.height() as usize {
            return false;
        }
        match self.font {
            Font::Ascii8x8 => (self.bits[x] >> y) & 1 != 0,
            Font::Ascii8x16 => (self.bits[y] >> x) & 1 != 0,
        }
    }

    /// Inked pixels as `(x, y)`, row-major
    pub fn set_pixels(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let (width, height) = (self.font.width() as usize, self.font.height() as usize);
        (0..height)
            .flat_map(move |y| (0..width).map(move |x| (x, y)))
            .filter(move |&(x, y)| self.is_set(x, y))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_shapes() {
        assert_eq!(FONT_8X8.len(), 128);
        assert_eq!(FONT_8X16.len(), 95);
        assert_eq!(Font::Ascii8x8.glyph(b'A').bytes().len(), 8);
        assert_eq!(Font::Ascii8x16.glyph(b'A').bytes().len(), 16);
    }

    #[test]
    fn test_8x16_is_offset_by_space() {
        let glyph = Font::Ascii8x16.glyph(65);
        assert_eq!(glyph.bytes(), &FONT_8X16[33]);
    }

    #[test]
    fn test_8x16_rows_are_lsb_left() {
        // 'A' apex: single pixel in column 3 on row 2
        let glyph = Font::Ascii8x16.glyph(b'A');
        assert_eq!(glyph.bytes()[2], 0x08);
        assert!(glyph.is_set(3, 2));
        assert!(!glyph.is_set(4, 2));
    }

    #[test]
    fn test_8x8_columns_are_lsb_top() {
        // '!' is a centred vertical bar with a gap above the dot
        let glyph = Font::Ascii8x8.glyph(b'!');
        for y in 0..5 {
            assert!(glyph.is_set(3, y));
        }
        assert!(!glyph.is_set(3, 5));
        assert!(glyph.is_set(3, 6));
        assert!(!glyph.is_set(0, 0));
    }

    #[test]
    fn test_fonts_agree_on_shape() {
        // Both tables draw 'I' with a vertical stem; only layout differs
        for font in [Font::Ascii8x8, Font::Ascii8x16] {
            let glyph = font.glyph(b'I');
            let stem = (0..font.height() as usize).filter(|&y| glyph.is_set(3, y)).count();
            assert!(stem >= 6, "{:?} stem too short: {}", font, stem);
        }
    }

    #[test]
    fn test_uncovered_codes_render_blank() {
        for code in [0x00, 0x1F, 0x7F, 0x80, 0xFF] {
            assert_eq!(Font::Ascii8x16.glyph(code).set_pixels().count(), 0);
        }
        for code in [0x01, 0x7F, 0x80, 0xFF] {
            assert_eq!(Font::Ascii8x8.glyph(code).set_pixels().count(), 0);
        }
    }

    #[test]
    fn test_out_of_glyph_reads_clear() {
        let glyph = Font::Ascii8x8.glyph(b'#');
        assert!(!glyph.is_set(8, 0));
        assert!(!glyph.is_set(0, 8));
    }
}
