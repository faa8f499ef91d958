//! Draw errors

use crate::scale::BufferOverflow;

/// Errors returned by draw operations
///
/// Every variant except [`DrawError::Bus`] is a rejection: the operation
/// issued nothing on the bus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DrawError<E> {
    /// Geometry falls outside the panel (or is inverted/empty)
    OutOfBounds,
    /// Scaled glyph would not fit the scratch buffer
    BufferOverflow,
    /// More pixels were offered than the open window holds
    StreamOverrun,
    /// Window closed before all of its pixels were written
    StreamIncomplete,
    /// Pixel slice length does not match the requested dimensions
    LengthMismatch,
    /// Transport failure
    Bus(E),
}

impl<E> DrawError<E> {
    /// True for errors raised before anything reached the bus
    pub fn is_rejection(&self) -> bool {
        matches!(
            self,
            DrawError::OutOfBounds | DrawError::BufferOverflow | DrawError::LengthMismatch
        )
    }
}

impl<E> From<BufferOverflow> for DrawError<E> {
    fn from(_: BufferOverflow) -> Self {
        DrawError::BufferOverflow
    }
}
