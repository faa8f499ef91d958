//! Glyph rendering
//!
//! A character goes through three stages:
//!
//! 1. the font bitmap is expanded into the scratch [`PixelBuffer`], one
//!    foreground or background pixel per bit
//! 2. the buffer is magnified with Scale2x/Scale3x if the size asks for it
//! 3. the buffer is streamed into a window exactly the glyph's footprint
//!
//! The footprint is checked against the panel before stage 1, so a glyph
//! that would hang off the edge costs nothing.

use nanolcd_hal::LcdBus;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgb565;
use crate::error::DrawError;
use crate::font::Font;
use crate::raster::Rasterizer;
use crate::scale::{BufferOverflow, PixelBuffer};
use crate::window::Window;

/// Rendered glyph sizes
///
/// Discriminants are the size codes used by existing callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[repr(u8)]
pub enum FontSize {
    /// 8x8 font, unscaled
    Small8x8 = 0,
    /// 8x16 font, unscaled
    #[default]
    Normal8x16 = 1,
    /// 8x8 font doubled to 16x16
    Double8x8 = 2,
    /// 8x16 font doubled to 16x32
    Double8x16 = 3,
    /// 8x8 font tripled to 24x24
    Triple8x8 = 4,
    /// 8x16 font tripled to 24x48
    Triple8x16 = 5,
}

impl FontSize {
    pub const ALL: [FontSize; 6] = [
        FontSize::Small8x8,
        FontSize::Normal8x16,
        FontSize::Double8x8,
        FontSize::Double8x16,
        FontSize::Triple8x8,
        FontSize::Triple8x16,
    ];

    /// Source font
    pub const fn font(self) -> Font {
        match self {
            FontSize::Small8x8 | FontSize::Double8x8 | FontSize::Triple8x8 => Font::Ascii8x8,
            FontSize::Normal8x16 | FontSize::Double8x16 | FontSize::Triple8x16 => Font::Ascii8x16,
        }
    }

    /// Magnification factor
    pub const fn scale(self) -> u16 {
        match self {
            FontSize::Small8x8 | FontSize::Normal8x16 => 1,
            FontSize::Double8x8 | FontSize::Double8x16 => 2,
            FontSize::Triple8x8 | FontSize::Triple8x16 => 3,
        }
    }

    /// Rendered width in pixels
    pub const fn width(self) -> u16 {
        self.font().width() * self.scale()
    }

    /// Rendered height in pixels
    pub const fn height(self) -> u16 {
        self.font().height() * self.scale()
    }
}

/// Size code outside `0..=5`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct InvalidFontSize(pub u8);

impl TryFrom<u8> for FontSize {
    type Error = InvalidFontSize;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        FontSize::ALL
            .get(code as usize)
            .copied()
            .ok_or(InvalidFontSize(code))
    }
}

impl From<FontSize> for u8 {
    fn from(size: FontSize) -> u8 {
        size as u8
    }
}

/// Renders characters through a reusable scratch buffer
pub struct GlyphRenderer {
    buffer: PixelBuffer,
    background: Rgb565,
}

impl GlyphRenderer {
    pub const fn new(background: Rgb565) -> Self {
        Self {
            buffer: PixelBuffer::new(),
            background,
        }
    }

    /// Color painted under clear font bits
    pub fn background(&self) -> Rgb565 {
        self.background
    }

    pub fn set_background(&mut self, background: Rgb565) {
        self.background = background;
    }

    /// Rasterize and scale `code` into the scratch buffer
    pub fn render(&mut self, code: u8, color: Rgb565, size: FontSize) -> Result<&PixelBuffer, BufferOverflow> {
        let font = size.font();
        let glyph = font.glyph(code);
        let background = self.background;

        self.buffer.load(font.width() as usize, font.height() as usize, |x, y| {
            if glyph.is_set(x, y) {
                color
            } else {
                background
            }
        })?;

        match size.scale() {
            2 => self.buffer.scale2x()?,
            3 => self.buffer.scale3x()?,
            _ => {}
        }
        Ok(&self.buffer)
    }

    /// Draw `code` with its top-left corner at `(x, y)`
    ///
    /// Clear bits are painted with the background color.
    pub fn draw_char<B: LcdBus>(
        &mut self,
        raster: &mut Rasterizer<B>,
        x: u16,
        y: u16,
        code: u8,
        color: Rgb565,
        size: FontSize,
    ) -> Result<(), DrawError<B::Error>> {
        let window = footprint(raster, x, y, size)?;
        let buffer = self.render(code, color, size)?;

        let mut stream = raster.window(window)?;
        stream.write_all(buffer.pixels())?;
        stream.finish()
    }

    /// Draw an 8x16 glyph leaving clear bits untouched
    ///
    /// Each set bit is its own single-pixel window.
    pub fn draw_char_transparent<B: LcdBus>(
        &mut self,
        raster: &mut Rasterizer<B>,
        x: u16,
        y: u16,
        code: u8,
        color: Rgb565,
    ) -> Result<(), DrawError<B::Error>> {
        footprint(raster, x, y, FontSize::Normal8x16)?;

        let glyph = Font::Ascii8x16.glyph(code);
        for (gx, gy) in glyph.set_pixels() {
            raster.point(x + gx as u16, y + gy as u16, color)?;
        }
        Ok(())
    }
}

/// Panel window covered by a glyph, or `OutOfBounds`
fn footprint<B: LcdBus>(
    raster: &Rasterizer<B>,
    x: u16,
    y: u16,
    size: FontSize,
) -> Result<Window, DrawError<B::Error>> {
    match Window::from_origin(x, y, size.width(), size.height()) {
        Some(window) if window.fits(raster.orientation()) => Ok(window),
        _ => {
            #[cfg(feature = "defmt")]
            defmt::trace!("glyph at ({}, {}) size {} off panel", x, y, size);
            Err(DrawError::OutOfBounds)
        }
    }
}
