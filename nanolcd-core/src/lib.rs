//! Board-agnostic drawing core for a 160x80 RGB565 panel
//!
//! Everything here talks to the controller through
//! [`nanolcd_hal::LcdBus`] and never touches hardware directly:
//!
//! - Address window protocol and orientation offsets
//! - Primitive rasterization (point, rectangle, line, circle, bitmap)
//! - Two fixed bitmap fonts
//! - Scale2x/Scale3x glyph magnification
//! - Glyph rendering and text layout
//! - Panel configuration

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod color;
pub mod config;
pub mod error;
pub mod font;
pub mod glyph;
pub mod lcd;
pub mod raster;
pub mod scale;
pub mod text;
pub mod window;

#[cfg(test)]
mod testing;

pub use color::Rgb565;
pub use config::LcdConfig;
pub use error::DrawError;
pub use glyph::{FontSize, GlyphRenderer};
pub use lcd::Lcd;
pub use raster::Rasterizer;
pub use text::Cursor;
pub use window::{Orientation, PixelStream, Window};
