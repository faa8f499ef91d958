//! nanolcd Hardware Abstraction Layer
//!
//! This crate defines the transport contract between the panel core and
//! whatever actually moves bytes to the controller (blocking SPI, DMA,
//! bit-banged GPIO). The core never touches peripheral registers; it only
//! talks to an [`LcdBus`].
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │  nanolcd-core (window, raster, glyphs)  │
//! └─────────────────────────────────────────┘
//!                     │
//!                     ▼
//! ┌─────────────────────────────────────────┐
//! │  nanolcd-hal (this crate - traits)      │
//! └─────────────────────────────────────────┘
//!                     │
//!         ┌───────────┴───────────┐
//!         ▼                       ▼
//! ┌───────────────┐       ┌───────────────┐
//! │  SPI + D/C    │       │  DMA / test   │
//! │ (drivers crt) │       │    doubles    │
//! └───────────────┘       └───────────────┘
//! ```
//!
//! # Traits
//!
//! - [`bus::LcdBus`] - command/data tagged byte and word transmission
//! - [`spi::SpiConfig`] - link parameters the panel expects

#![no_std]
#![deny(unsafe_code)]

pub mod bus;
pub mod spi;

// Re-export key items at crate root for convenience
pub use bus::LcdBus;
pub use spi::{BitOrder, Mode, Phase, Polarity, SpiConfig};
