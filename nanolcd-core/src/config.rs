//! Panel configuration
//!
//! Fixed at start-up and only changed through explicit calls on
//! [`Lcd`](crate::lcd::Lcd), never while a draw is in progress.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgb565;
use crate::glyph::FontSize;
use crate::window::Orientation;

/// Session configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LcdConfig {
    /// Mounting orientation
    pub orientation: Orientation,
    /// Color behind glyphs
    pub background: Rgb565,
    /// Size used by the text calls
    pub font_size: FontSize,
}

impl Default for LcdConfig {
    fn default() -> Self {
        Self {
            orientation: Orientation::Landscape,
            background: Rgb565::BLACK,
            font_size: FontSize::Normal8x16,
        }
    }
}
