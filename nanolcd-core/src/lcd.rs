//! Panel facade
//!
//! [`Lcd`] owns the bus, the rasterizer state and the glyph scratch
//! buffer, and carries the session configuration. Text calls live in
//! [`text`](crate::text).

use nanolcd_hal::LcdBus;

use crate::color::Rgb565;
use crate::config::LcdConfig;
use crate::error::DrawError;
use crate::glyph::{FontSize, GlyphRenderer};
use crate::raster::Rasterizer;
use crate::window::Orientation;

/// A 160x80 RGB565 panel behind an [`LcdBus`]
pub struct Lcd<B: LcdBus> {
    pub(crate) raster: Rasterizer<B>,
    pub(crate) glyphs: GlyphRenderer,
    pub(crate) font_size: FontSize,
}

impl<B: LcdBus> Lcd<B> {
    /// Take ownership of the bus
    ///
    /// No traffic until [`configure`](Self::configure) or a draw.
    pub fn new(bus: B, config: LcdConfig) -> Self {
        Self {
            raster: Rasterizer::new(bus, config.orientation),
            glyphs: GlyphRenderer::new(config.background),
            font_size: config.font_size,
        }
    }

    /// Current configuration
    pub fn config(&self) -> LcdConfig {
        LcdConfig {
            orientation: self.raster.orientation(),
            background: self.glyphs.background(),
            font_size: self.font_size,
        }
    }

    /// Program the scan direction for the configured orientation
    pub fn configure(&mut self) -> Result<(), DrawError<B::Error>> {
        self.raster.apply_orientation()
    }

    pub fn set_orientation(&mut self, orientation: Orientation) -> Result<(), DrawError<B::Error>> {
        self.raster.set_orientation(orientation)
    }

    pub fn set_background(&mut self, background: Rgb565) {
        self.glyphs.set_background(background);
    }

    pub fn set_font_size(&mut self, size: FontSize) {
        self.font_size = size;
    }

    pub fn width(&self) -> u16 {
        self.raster.width()
    }

    pub fn height(&self) -> u16 {
        self.raster.height()
    }

    /// Direct access to the primitives
    pub fn raster(&mut self) -> &mut Rasterizer<B> {
        &mut self.raster
    }

    pub fn bus(&self) -> &B {
        self.raster.bus()
    }

    /// Give the bus back
    pub fn release(self) -> B {
        self.raster.release()
    }

    pub fn point(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        self.raster.point(x, y, color)
    }

    pub fn big_point(&mut self, x: u16, y: u16, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        self.raster.big_point(x, y, color)
    }

    pub fn fill_rect(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DrawError<B::Error>> {
        self.raster.fill_rect(x1, y1, x2, y2, color)
    }

    pub fn clear(&mut self, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        self.raster.clear(color)
    }

    pub fn line(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DrawError<B::Error>> {
        self.raster.line(x1, y1, x2, y2, color)
    }

    pub fn rectangle(
        &mut self,
        x1: u16,
        y1: u16,
        x2: u16,
        y2: u16,
        color: Rgb565,
    ) -> Result<(), DrawError<B::Error>> {
        self.raster.rectangle(x1, y1, x2, y2, color)
    }

    pub fn circle(&mut self, x0: u16, y0: u16, r: u16, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        self.raster.circle(x0, y0, r, color)
    }

    /// Copy a `width` x `height` RGB565 image to `(x, y)`
    ///
    /// Not clipped: the whole image must fit.
    pub fn draw_bitmap(
        &mut self,
        x: u16,
        y: u16,
        width: u16,
        height: u16,
        pixels: &[Rgb565],
    ) -> Result<(), DrawError<B::Error>> {
        self.raster.blit(x, y, width, height, pixels)
    }

    /// One character at the configured size over the background color
    pub fn draw_char(&mut self, x: u16, y: u16, ch: char, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        let size = self.font_size;
        self.glyphs
            .draw_char(&mut self.raster, x, y, glyph_code(ch), color, size)
    }

    /// One 8x16 character, leaving the panel visible behind clear bits
    pub fn draw_char_transparent(
        &mut self,
        x: u16,
        y: u16,
        ch: char,
        color: Rgb565,
    ) -> Result<(), DrawError<B::Error>> {
        self.glyphs
            .draw_char_transparent(&mut self.raster, x, y, glyph_code(ch), color)
    }
}

/// Font code for a char; anything outside ASCII draws as a space
pub(crate) fn glyph_code(ch: char) -> u8 {
    if ch.is_ascii() {
        ch as u8
    } else {
        b' '
    }
}
