//! SPI transport with a data/command line
//!
//! The controller tells commands from data by the D/C pin: low while a
//! command byte is clocked out, high for parameters and pixels. The SPI
//! device should be set up as [`SpiConfig::panel`](nanolcd_hal::SpiConfig::panel)
//! describes (mode 3, MSB first).
//!
//! Pixel runs are packed big-endian into a small stack buffer and sent in
//! chunks so a full-screen fill is a few hundred transfers, not 25600.

use embedded_hal::digital::OutputPin;
use embedded_hal::spi::SpiDevice;
use nanolcd_hal::LcdBus;

/// Pixel words per SPI transfer
pub const CHUNK_WORDS: usize = 32;

/// Transport failure
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum SpiBusError<S, P> {
    /// SPI transfer failed
    Spi(S),
    /// D/C pin could not be driven
    Pin(P),
}

/// [`LcdBus`] over an `embedded-hal` SPI device and D/C pin
pub struct SpiLcdBus<SPI, DC> {
    spi: SPI,
    dc: DC,
}

impl<SPI, DC> SpiLcdBus<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    pub fn new(spi: SPI, dc: DC) -> Self {
        Self { spi, dc }
    }

    /// Give the peripherals back
    pub fn release(self) -> (SPI, DC) {
        (self.spi, self.dc)
    }

    fn command_mode(&mut self) -> Result<(), SpiBusError<SPI::Error, DC::Error>> {
        self.dc.set_low().map_err(SpiBusError::Pin)
    }

    fn data_mode(&mut self) -> Result<(), SpiBusError<SPI::Error, DC::Error>> {
        self.dc.set_high().map_err(SpiBusError::Pin)
    }

    fn send(&mut self, bytes: &[u8]) -> Result<(), SpiBusError<SPI::Error, DC::Error>> {
        self.spi.write(bytes).map_err(|e| {
            #[cfg(feature = "defmt")]
            defmt::warn!("spi write of {} bytes failed", bytes.len());
            SpiBusError::Spi(e)
        })
    }
}

impl<SPI, DC> LcdBus for SpiLcdBus<SPI, DC>
where
    SPI: SpiDevice,
    DC: OutputPin,
{
    type Error = SpiBusError<SPI::Error, DC::Error>;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        self.command_mode()?;
        self.send(&[command])
    }

    fn write_data8(&mut self, data: u8) -> Result<(), Self::Error> {
        self.data_mode()?;
        self.send(&[data])
    }

    fn write_data16(&mut self, data: u16) -> Result<(), Self::Error> {
        self.data_mode()?;
        self.send(&data.to_be_bytes())
    }

    fn write_data16_repeated(&mut self, data: u16, count: u32) -> Result<(), Self::Error> {
        if count == 0 {
            return Ok(());
        }
        self.data_mode()?;

        let mut chunk = [0u8; CHUNK_WORDS * 2];
        for word in chunk.chunks_exact_mut(2) {
            word.copy_from_slice(&data.to_be_bytes());
        }

        let mut remaining = count as usize;
        while remaining > 0 {
            let words = remaining.min(CHUNK_WORDS);
            self.send(&chunk[..words * 2])?;
            remaining -= words;
        }
        Ok(())
    }

    fn write_data16_iter<I>(&mut self, words: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = u16>,
    {
        let mut words = words.into_iter().peekable();
        if words.peek().is_none() {
            return Ok(());
        }
        self.data_mode()?;

        let mut chunk = [0u8; CHUNK_WORDS * 2];
        let mut len = 0;
        for word in words {
            chunk[len..len + 2].copy_from_slice(&word.to_be_bytes());
            len += 2;
            if len == chunk.len() {
                self.send(&chunk)?;
                len = 0;
            }
        }
        if len > 0 {
            self.send(&chunk[..len])?;
        }
        Ok(())
    }
}
