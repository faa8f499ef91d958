//! Bus implementations
//!
//! Concrete [`LcdBus`](nanolcd_hal::LcdBus) transports for the panel:
//!
//! - [`spi_bus::SpiLcdBus`] - blocking `embedded-hal` SPI with a D/C pin

#![cfg_attr(not(test), no_std)]
#![deny(unsafe_code)]

pub mod spi_bus;

pub use spi_bus::{SpiBusError, SpiLcdBus};
