//! Text layout and number formatting
//!
//! Strings are drawn left to right at the configured [`FontSize`]. When the
//! next glyph would cross the right edge the cursor moves to column 0 one
//! glyph-height down. Characters that land below the panel are skipped.

use heapless::String;
use nanolcd_hal::LcdBus;

use crate::color::Rgb565;
use crate::error::DrawError;
use crate::glyph::FontSize;
use crate::lcd::{glyph_code, Lcd};

/// Most digits a `u32` can need
pub const MAX_DIGITS: usize = 10;

/// Formatted number, room for every digit plus a decimal point
pub type NumberString = String<{ MAX_DIGITS + 1 }>;

/// Text insertion point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Cursor {
    pub x: u16,
    pub y: u16,
}

impl Cursor {
    pub const fn new(x: u16, y: u16) -> Self {
        Self { x, y }
    }

    /// Where the next glyph goes, moving to a new line if it would not fit
    pub fn wrapped(self, size: FontSize, panel_width: u16) -> Self {
        if self.x.saturating_add(size.width()) > panel_width {
            Self::new(0, self.y.saturating_add(size.height()))
        } else {
            self
        }
    }

    /// Position after one glyph
    pub fn advanced(self, size: FontSize) -> Self {
        Self::new(self.x.saturating_add(size.width()), self.y)
    }
}

/// Decimal digit `position` places from the right
fn digit_at(value: u32, position: usize) -> u32 {
    (value / 10u32.pow(position as u32)) % 10
}

fn digit_char(digit: u32) -> char {
    char::from(b'0' + digit as u8)
}

/// Right-aligned decimal in a field of `digits` characters
///
/// Leading zeros become spaces, except the last digit which is always
/// shown. Values wider than the field keep their low digits.
pub fn format_number(value: u32, digits: usize) -> NumberString {
    let digits = digits.min(MAX_DIGITS);
    let mut out = NumberString::new();
    let mut significant = false;

    for position in (0..digits).rev() {
        let digit = digit_at(value, position);
        significant |= digit != 0 || position == 0;
        let ch = if significant { digit_char(digit) } else { ' ' };
        // capacity covers MAX_DIGITS
        let _ = out.push(ch);
    }
    out
}

/// Scaled integer as fixed point: `digits` digits with a point before the
/// last `decimals` of them
///
/// `format_fixed(1234, 4, 2)` is `"12.34"`. Leading zeros of the whole part
/// become spaces, keeping the digit next to the point.
pub fn format_fixed(value: u32, digits: usize, decimals: usize) -> NumberString {
    let digits = digits.min(MAX_DIGITS);
    let decimals = decimals.min(digits);
    let whole = digits - decimals;
    let mut out = NumberString::new();
    let mut significant = false;

    for index in 0..digits {
        let position = digits - 1 - index;
        let digit = digit_at(value, position);
        if index == whole {
            let _ = out.push('.');
        }
        if index < whole {
            significant |= digit != 0 || index + 1 == whole;
            let ch = if significant { digit_char(digit) } else { ' ' };
            let _ = out.push(ch);
        } else {
            let _ = out.push(digit_char(digit));
        }
    }
    out
}

impl<B: LcdBus> Lcd<B> {
    /// Draw `text` starting at `(x, y)` and return where the next character
    /// would go
    ///
    /// An empty string sends nothing and returns `(x, y)`.
    pub fn draw_str(&mut self, x: u16, y: u16, text: &str, color: Rgb565) -> Result<Cursor, DrawError<B::Error>> {
        let size = self.font_size;
        let width = self.width();
        let mut cursor = Cursor::new(x, y);

        for ch in text.chars() {
            cursor = cursor.wrapped(size, width);
            match self
                .glyphs
                .draw_char(&mut self.raster, cursor.x, cursor.y, glyph_code(ch), color, size)
            {
                Ok(()) | Err(DrawError::OutOfBounds) => {}
                Err(e) => return Err(e),
            }
            cursor = cursor.advanced(size);
        }
        Ok(cursor)
    }

    /// Unsigned decimal in a `digits`-wide field
    pub fn draw_number(
        &mut self,
        x: u16,
        y: u16,
        value: u32,
        digits: usize,
        color: Rgb565,
    ) -> Result<Cursor, DrawError<B::Error>> {
        let text = format_number(value, digits);
        self.draw_str(x, y, &text, color)
    }

    /// Fixed-point value given as a scaled integer (`1234` with two
    /// decimals reads `12.34`)
    pub fn draw_fixed(
        &mut self,
        x: u16,
        y: u16,
        value: u32,
        digits: usize,
        decimals: usize,
        color: Rgb565,
    ) -> Result<Cursor, DrawError<B::Error>> {
        let text = format_fixed(value, digits, decimals);
        self.draw_str(x, y, &text, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::LcdConfig;
    use crate::testing::{FailingBus, RecordingBus};

    fn panel(size: FontSize) -> Lcd<RecordingBus> {
        let config = LcdConfig {
            font_size: size,
            ..LcdConfig::default()
        };
        Lcd::new(RecordingBus::new(), config)
    }

    /// Logical top-left corner of every glyph window
    fn glyph_origins(lcd: &Lcd<RecordingBus>) -> Vec<(u16, u16)> {
        lcd.bus()
            .draws()
            .iter()
            .map(|d| (d.columns.0 - 1, d.rows.0 - 26))
            .collect()
    }

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(42, 5).as_str(), "   42");
        assert_eq!(format_number(0, 3).as_str(), "  0");
        assert_eq!(format_number(105, 3).as_str(), "105");
        assert_eq!(format_number(12345, 3).as_str(), "345");
        assert_eq!(format_number(7, 0).as_str(), "");
        assert_eq!(format_number(u32::MAX, 20).as_str(), "4294967295");
    }

    #[test]
    fn test_format_number_keeps_inner_zeros() {
        assert_eq!(format_number(1002, 6).as_str(), "  1002");
    }

    #[test]
    fn test_format_fixed() {
        assert_eq!(format_fixed(1234, 4, 2).as_str(), "12.34");
        assert_eq!(format_fixed(5, 4, 2).as_str(), " 0.05");
        assert_eq!(format_fixed(2500, 5, 3).as_str(), " 2.500");
        assert_eq!(format_fixed(77, 2, 0).as_str(), "77");
        assert_eq!(format_fixed(77, 2, 2).as_str(), ".77");
    }

    #[test]
    fn test_cursor_wrap() {
        let size = FontSize::Normal8x16;
        assert_eq!(Cursor::new(152, 0).wrapped(size, 160), Cursor::new(152, 0));
        assert_eq!(Cursor::new(153, 0).wrapped(size, 160), Cursor::new(0, 16));
        assert_eq!(Cursor::new(152, 0).advanced(size), Cursor::new(160, 0));
    }

    #[test]
    fn test_empty_string_is_silent() {
        let mut lcd = panel(FontSize::Normal8x16);
        let cursor = lcd.draw_str(12, 34, "", Rgb565::WHITE).unwrap();
        assert_eq!(cursor, Cursor::new(12, 34));
        assert!(lcd.bus().events().is_empty());
    }

    #[test]
    fn test_draw_str_advances_by_scaled_width() {
        let mut lcd = panel(FontSize::Double8x16);
        let cursor = lcd.draw_str(0, 0, "abc", Rgb565::WHITE).unwrap();
        assert_eq!(cursor, Cursor::new(48, 0));
        assert_eq!(glyph_origins(&lcd), [(0, 0), (16, 0), (32, 0)]);
    }

    #[test]
    fn test_draw_str_wraps() {
        let mut lcd = panel(FontSize::Triple8x8);
        // 24-wide glyphs: six fit in 160, the seventh wraps
        let cursor = lcd.draw_str(0, 0, "abcdefgh", Rgb565::WHITE).unwrap();
        let origins = glyph_origins(&lcd);
        assert_eq!(origins.len(), 8);
        assert_eq!(origins[5], (120, 0));
        assert_eq!(origins[6], (0, 24));
        assert_eq!(origins[7], (24, 24));
        assert_eq!(cursor, Cursor::new(48, 24));
    }

    #[test]
    fn test_draw_str_drops_rows_below_panel() {
        let mut lcd = panel(FontSize::Triple8x16);
        // Second line starts at y = 48; 48 + 48 > 80
        let text = "0123456789";
        lcd.draw_str(0, 0, text, Rgb565::WHITE).unwrap();
        assert_eq!(glyph_origins(&lcd).len(), 6);
    }

    #[test]
    fn test_draw_number_and_fixed() {
        let mut lcd = panel(FontSize::Small8x8);
        let cursor = lcd.draw_number(0, 0, 42, 4, Rgb565::WHITE).unwrap();
        assert_eq!(cursor, Cursor::new(32, 0));
        // Leading spaces are painted too
        assert_eq!(lcd.bus().draws().len(), 4);
        assert!(lcd.bus().draws()[0].pixels.iter().all(|&p| p == 0x0000));

        let mut lcd = panel(FontSize::Small8x8);
        let cursor = lcd.draw_fixed(0, 0, 314, 3, 2, Rgb565::WHITE).unwrap();
        assert_eq!(cursor, Cursor::new(32, 0));
    }

    #[test]
    fn test_bus_error_stops_string() {
        let mut lcd = Lcd::new(FailingBus, LcdConfig::default());
        assert_eq!(lcd.draw_str(0, 0, "hi", Rgb565::WHITE), Err(DrawError::Bus(())));
    }
}
