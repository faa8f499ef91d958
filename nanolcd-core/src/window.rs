//! Address window protocol
//!
//! The controller accepts pixels only inside a rectangular write window.
//! Opening a window sends:
//!
//! ```text
//! 0x2A  col_start+off (u16 BE)  col_end+off (u16 BE)   column range
//! 0x2B  row_start+off (u16 BE)  row_end+off (u16 BE)   row range
//! 0x2C                                                 memory write
//! ```
//!
//! after which exactly `width * height` pixel words must follow, row-major.
//! [`set_window`] hands out a [`PixelStream`] that borrows the bus for the
//! whole draw and counts the pixels still owed, so two draws can never
//! interleave and miscounts surface as errors instead of a garbled panel.

use nanolcd_hal::LcdBus;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::color::Rgb565;
use crate::error::DrawError;

/// Controller commands
pub mod cmd {
    /// Memory data access control (scan direction, axis swap)
    pub const MADCTL: u8 = 0x36;
    /// Column address set
    pub const CASET: u8 = 0x2A;
    /// Row address set
    pub const RASET: u8 = 0x2B;
    /// Memory write (begin pixel stream)
    pub const RAMWR: u8 = 0x2C;
}

/// MADCTL row/column exchange bit
const MADCTL_MV: u8 = 0x20;

/// Long side of the panel in pixels
pub const PANEL_LONG_SIDE: u16 = 160;

/// Short side of the panel in pixels
pub const PANEL_SHORT_SIDE: u16 = 80;

/// Panel mounting orientation
///
/// Each mode pairs a MADCTL scan setting with the offsets of the 80x160
/// visible area inside the controller's 132x162 frame memory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Orientation {
    /// 80 wide, 160 tall
    Portrait,
    /// 80 wide, 160 tall, rotated 180°
    PortraitFlipped,
    /// 160 wide, 80 tall
    #[default]
    Landscape,
    /// 160 wide, 80 tall, rotated 180°
    LandscapeFlipped,
}

impl Orientation {
    /// All orientation modes
    pub const ALL: [Orientation; 4] = [
        Orientation::Portrait,
        Orientation::PortraitFlipped,
        Orientation::Landscape,
        Orientation::LandscapeFlipped,
    ];

    /// MADCTL parameter byte for this mode
    pub const fn madctl(self) -> u8 {
        match self {
            Orientation::Portrait => 0x08,
            Orientation::PortraitFlipped => 0xC8,
            Orientation::Landscape => 0x78,
            Orientation::LandscapeFlipped => 0xA8,
        }
    }

    /// Offsets added to (column, row) window coordinates
    pub const fn offsets(self) -> (u16, u16) {
        match self {
            Orientation::Portrait | Orientation::PortraitFlipped => (26, 1),
            Orientation::Landscape | Orientation::LandscapeFlipped => (1, 26),
        }
    }

    /// Whether logical x drives physical rows
    pub const fn swaps_axes(self) -> bool {
        self.madctl() & MADCTL_MV != 0
    }

    /// True for the mode the board is mounted in
    pub const fn is_native(self) -> bool {
        matches!(self, Orientation::Landscape)
    }

    /// Logical width in pixels
    pub const fn width(self) -> u16 {
        if self.swaps_axes() {
            PANEL_LONG_SIDE
        } else {
            PANEL_SHORT_SIDE
        }
    }

    /// Logical height in pixels
    pub const fn height(self) -> u16 {
        if self.swaps_axes() {
            PANEL_SHORT_SIDE
        } else {
            PANEL_LONG_SIDE
        }
    }
}

/// Inclusive rectangle in logical panel coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Window {
    pub x1: u16,
    pub y1: u16,
    pub x2: u16,
    pub y2: u16,
}

impl Window {
    pub const fn new(x1: u16, y1: u16, x2: u16, y2: u16) -> Self {
        Self { x1, y1, x2, y2 }
    }

    /// Window of `width` x `height` pixels starting at `(x, y)`
    ///
    /// Returns `None` for empty sizes or when the far corner overflows.
    pub fn from_origin(x: u16, y: u16, width: u16, height: u16) -> Option<Self> {
        let x2 = x.checked_add(width.checked_sub(1)?)?;
        let y2 = y.checked_add(height.checked_sub(1)?)?;
        Some(Self::new(x, y, x2, y2))
    }

    /// Single-pixel window
    pub const fn point(x: u16, y: u16) -> Self {
        Self::new(x, y, x, y)
    }

    /// Corners are ordered (`x1 <= x2`, `y1 <= y2`)
    pub const fn is_ordered(&self) -> bool {
        self.x1 <= self.x2 && self.y1 <= self.y2
    }

    /// Ordered and entirely on the panel for `orientation`
    pub const fn fits(&self, orientation: Orientation) -> bool {
        self.is_ordered() && self.x2 < orientation.width() && self.y2 < orientation.height()
    }

    /// Column count; an inverted window counts as one column
    pub const fn width(&self) -> u32 {
        self.x2.saturating_sub(self.x1) as u32 + 1
    }

    /// Row count; an inverted window counts as one row
    pub const fn height(&self) -> u32 {
        self.y2.saturating_sub(self.y1) as u32 + 1
    }

    /// Number of pixel words the window expects
    pub const fn pixel_count(&self) -> u32 {
        self.width().saturating_mul(self.height())
    }
}

/// Open a write window and return the stream that must fill it
///
/// Out-of-range or inverted windows are rejected before any bus traffic.
/// Waits for any in-flight block transfer to finish before the first
/// command goes out.
pub fn set_window<B: LcdBus>(
    bus: &mut B,
    orientation: Orientation,
    window: Window,
) -> Result<PixelStream<'_, B>, DrawError<B::Error>> {
    if !window.fits(orientation) {
        #[cfg(feature = "defmt")]
        defmt::debug!("window {} rejected for {}", window, orientation);
        return Err(DrawError::OutOfBounds);
    }

    let (col_offset, row_offset) = orientation.offsets();

    bus.wait_idle().map_err(DrawError::Bus)?;
    send_range(bus, cmd::CASET, window.x1 + col_offset, window.x2 + col_offset)?;
    send_range(bus, cmd::RASET, window.y1 + row_offset, window.y2 + row_offset)?;
    bus.write_command(cmd::RAMWR).map_err(DrawError::Bus)?;

    Ok(PixelStream {
        bus,
        window,
        remaining: window.pixel_count(),
    })
}

fn send_range<B: LcdBus>(bus: &mut B, command: u8, start: u16, end: u16) -> Result<(), DrawError<B::Error>> {
    bus.write_command(command).map_err(DrawError::Bus)?;
    bus.write_data16(start).map_err(DrawError::Bus)?;
    bus.write_data16(end).map_err(DrawError::Bus)
}

/// Pixel sink for an open window
///
/// Holds the bus exclusively until dropped. Writes beyond the window are
/// refused; [`finish`](PixelStream::finish) reports a short stream.
pub struct PixelStream<'a, B: LcdBus> {
    bus: &'a mut B,
    window: Window,
    remaining: u32,
}

impl<'a, B: LcdBus> PixelStream<'a, B> {
    /// Window this stream fills
    pub fn window(&self) -> Window {
        self.window
    }

    /// Pixels still owed to the window
    pub fn remaining(&self) -> u32 {
        self.remaining
    }

    /// Write one pixel
    pub fn write(&mut self, color: Rgb565) -> Result<(), DrawError<B::Error>> {
        if self.remaining == 0 {
            return Err(DrawError::StreamOverrun);
        }
        self.bus.write_data16(color.raw()).map_err(DrawError::Bus)?;
        self.remaining -= 1;
        Ok(())
    }

    /// Write `count` copies of one pixel
    ///
    /// Refused as a whole if `count` exceeds what the window still holds.
    pub fn fill(&mut self, color: Rgb565, count: u32) -> Result<(), DrawError<B::Error>> {
        if count > self.remaining {
            return Err(DrawError::StreamOverrun);
        }
        self.bus
            .write_data16_repeated(color.raw(), count)
            .map_err(DrawError::Bus)?;
        self.remaining -= count;
        Ok(())
    }

    /// Write pixels in order until the iterator ends
    ///
    /// Pixels past the end of the window are not sent.
    pub fn write_all<I>(&mut self, pixels: I) -> Result<(), DrawError<B::Error>>
    where
        I: IntoIterator<Item = Rgb565>,
    {
        let mut remaining = self.remaining;
        let mut overrun = false;
        let words = pixels.into_iter().map_while(|pixel| {
            if remaining == 0 {
                overrun = true;
                None
            } else {
                remaining -= 1;
                Some(pixel.raw())
            }
        });
        let sent = self.bus.write_data16_iter(words);
        self.remaining = remaining;
        sent.map_err(DrawError::Bus)?;

        if overrun {
            Err(DrawError::StreamOverrun)
        } else {
            Ok(())
        }
    }

    /// Close the stream, checking every pixel was written
    pub fn finish(self) -> Result<(), DrawError<B::Error>> {
        if self.remaining == 0 {
            Ok(())
        } else {
            #[cfg(feature = "defmt")]
            defmt::warn!("window closed with {} pixels unwritten", self.remaining);
            Err(DrawError::StreamIncomplete)
        }
    }
}
