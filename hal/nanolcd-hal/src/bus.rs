//! Panel bus abstraction
//!
//! The controller distinguishes commands from parameters/pixel data with a
//! side-channel D/C line, not with the byte value. Everything goes out
//! most-significant bit first; 16-bit words are sent high byte first.

/// Command/data tagged transport to the panel controller
///
/// All writes are blocking and ordered. Implementations that hand bulk
/// transfers to a DMA engine must report the transfer through
/// [`is_busy`](LcdBus::is_busy) until it has fully left the peripheral.
pub trait LcdBus {
    /// Error type for bus operations
    type Error;

    /// Send a command byte (D/C low)
    fn write_command(&mut self, command: u8) -> Result<(), Self::Error>;

    /// Send a single parameter/data byte (D/C high)
    fn write_data8(&mut self, data: u8) -> Result<(), Self::Error>;

    /// Send a 16-bit data word, high byte first
    fn write_data16(&mut self, data: u16) -> Result<(), Self::Error> {
        let [hi, lo] = data.to_be_bytes();
        self.write_data8(hi)?;
        self.write_data8(lo)
    }

    /// Send the same 16-bit word `count` times
    ///
    /// Transports with a staging buffer should override this; solid fills
    /// are the hot path of the rasterizer.
    fn write_data16_repeated(&mut self, data: u16, count: u32) -> Result<(), Self::Error> {
        for _ in 0..count {
            self.write_data16(data)?;
        }
        Ok(())
    }

    /// Send a sequence of 16-bit words in order
    fn write_data16_iter<I>(&mut self, words: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = u16>,
    {
        for word in words {
            self.write_data16(word)?;
        }
        Ok(())
    }

    /// Check if an asynchronous block transfer is still in flight
    fn is_busy(&self) -> bool {
        false
    }

    /// Block until no transfer is in flight
    ///
    /// Commands issued while a block transfer is running corrupt the pixel
    /// stream, so callers must wait here before opening a new window.
    fn wait_idle(&mut self) -> Result<(), Self::Error> {
        while self.is_busy() {
            core::hint::spin_loop();
        }
        Ok(())
    }
}

impl<T: LcdBus + ?Sized> LcdBus for &mut T {
    type Error = T::Error;

    fn write_command(&mut self, command: u8) -> Result<(), Self::Error> {
        T::write_command(self, command)
    }

    fn write_data8(&mut self, data: u8) -> Result<(), Self::Error> {
        T::write_data8(self, data)
    }

    fn write_data16(&mut self, data: u16) -> Result<(), Self::Error> {
        T::write_data16(self, data)
    }

    fn write_data16_repeated(&mut self, data: u16, count: u32) -> Result<(), Self::Error> {
        T::write_data16_repeated(self, data, count)
    }

    fn write_data16_iter<I>(&mut self, words: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = u16>,
    {
        T::write_data16_iter(self, words)
    }

    fn is_busy(&self) -> bool {
        T::is_busy(self)
    }

    fn wait_idle(&mut self) -> Result<(), Self::Error> {
        T::wait_idle(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Bus that records every byte with its D/C state
    struct ByteLog {
        bytes: [(bool, u8); 16],
        len: usize,
        busy_polls: u8,
    }

    impl ByteLog {
        fn new() -> Self {
            Self {
                bytes: [(false, 0); 16],
                len: 0,
                busy_polls: 0,
            }
        }

        fn push(&mut self, data: bool, byte: u8) {
            self.bytes[self.len] = (data, byte);
            self.len += 1;
        }

        fn logged(&self) -> &[(bool, u8)] {
            &self.bytes[..self.len]
        }
    }

    impl LcdBus for ByteLog {
        type Error = ();

        fn write_command(&mut self, command: u8) -> Result<(), ()> {
            self.push(false, command);
            Ok(())
        }

        fn write_data8(&mut self, data: u8) -> Result<(), ()> {
            self.push(true, data);
            Ok(())
        }

        fn is_busy(&self) -> bool {
            self.busy_polls > 0
        }

        fn wait_idle(&mut self) -> Result<(), ()> {
            // Simulated DMA engine drains one poll at a time
            while self.is_busy() {
                self.busy_polls -= 1;
            }
            Ok(())
        }
    }

    #[test]
    fn test_word_is_big_endian() {
        let mut bus = ByteLog::new();
        bus.write_data16(0xF800).unwrap();
        assert_eq!(bus.logged(), &[(true, 0xF8), (true, 0x00)]);
    }

    #[test]
    fn test_command_is_tagged() {
        let mut bus = ByteLog::new();
        bus.write_command(0x2C).unwrap();
        bus.write_data8(0x05).unwrap();
        assert_eq!(bus.logged(), &[(false, 0x2C), (true, 0x05)]);
    }

    #[test]
    fn test_repeated_and_iter_defaults() {
        let mut bus = ByteLog::new();
        bus.write_data16_repeated(0x1234, 2).unwrap();
        bus.write_data16_iter([0xABCD]).unwrap();
        assert_eq!(
            bus.logged(),
            &[
                (true, 0x12),
                (true, 0x34),
                (true, 0x12),
                (true, 0x34),
                (true, 0xAB),
                (true, 0xCD)
            ]
        );
    }

    #[test]
    fn test_wait_idle_drains_transfer() {
        let mut bus = ByteLog::new();
        bus.busy_polls = 3;
        assert!(bus.is_busy());
        bus.wait_idle().unwrap();
        assert!(!bus.is_busy());
    }

    #[test]
    fn test_mut_ref_forwards() {
        fn send<B: LcdBus<Error = ()>>(mut bus: B) {
            bus.write_command(0x29).unwrap();
        }

        let mut bus = ByteLog::new();
        send(&mut bus);
        assert_eq!(bus.logged(), &[(false, 0x29)]);
    }
}
