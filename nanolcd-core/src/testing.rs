//! Recording bus for host tests

use core::convert::Infallible;

use nanolcd_hal::LcdBus;

use crate::window::cmd;

/// One transmitted unit as seen on the wire
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    Command(u8),
    Data(u8),
    /// A pending block transfer was waited out
    Idle,
}

/// A decoded window + pixel stream
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Draw {
    /// Column range as transmitted (offsets included)
    pub columns: (u16, u16),
    /// Row range as transmitted (offsets included)
    pub rows: (u16, u16),
    pub pixels: Vec<u16>,
}

/// Bus that logs every byte with its D/C state
#[derive(Debug, Default)]
pub struct RecordingBus {
    events: Vec<Event>,
    busy: bool,
}

impl RecordingBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Pretend a DMA block transfer is in flight
    pub fn start_transfer(&mut self) {
        self.busy = true;
    }

    /// Decode the log into window/pixel transactions
    ///
    /// Panics on anything that is not a well-formed window sequence
    /// followed by whole pixel words.
    pub fn draws(&self) -> Vec<Draw> {
        let mut draws = Vec::new();
        let mut i = 0;
        while i < self.events.len() {
            match self.events[i] {
                Event::Idle => i += 1,
                Event::Command(cmd::MADCTL) => i += 2,
                Event::Command(cmd::CASET) => {
                    let columns = (self.word_at(i + 1), self.word_at(i + 3));
                    assert_eq!(self.events[i + 5], Event::Command(cmd::RASET));
                    let rows = (self.word_at(i + 6), self.word_at(i + 8));
                    assert_eq!(self.events[i + 10], Event::Command(cmd::RAMWR));
                    i += 11;

                    let mut pixels = Vec::new();
                    while i < self.events.len() && matches!(self.events[i], Event::Data(_)) {
                        pixels.push(self.word_at(i));
                        i += 2;
                    }
                    draws.push(Draw {
                        columns,
                        rows,
                        pixels,
                    });
                }
                other => panic!("unexpected event {:?} at {}", other, i),
            }
        }
        draws
    }

    /// Logical (x, y) of every single-pixel draw, offsets removed
    pub fn points(&self, offsets: (u16, u16)) -> Vec<(u16, u16)> {
        self.draws()
            .iter()
            .filter(|d| d.columns.0 == d.columns.1 && d.rows.0 == d.rows.1)
            .map(|d| (d.columns.0 - offsets.0, d.rows.0 - offsets.1))
            .collect()
    }

    fn word_at(&self, i: usize) -> u16 {
        match (self.events[i], self.events[i + 1]) {
            (Event::Data(hi), Event::Data(lo)) => u16::from_be_bytes([hi, lo]),
            other => panic!("expected data word at {}, got {:?}", i, other),
        }
    }
}

impl LcdBus for RecordingBus {
    type Error = Infallible;

    fn write_command(&mut self, command: u8) -> Result<(), Infallible> {
        assert!(!self.busy, "command issued during block transfer");
        self.events.push(Event::Command(command));
        Ok(())
    }

    fn write_data8(&mut self, data: u8) -> Result<(), Infallible> {
        self.events.push(Event::Data(data));
        Ok(())
    }

    fn is_busy(&self) -> bool {
        self.busy
    }

    fn wait_idle(&mut self) -> Result<(), Infallible> {
        if self.busy {
            self.busy = false;
            self.events.push(Event::Idle);
        }
        Ok(())
    }
}

/// Bus whose every write fails
#[derive(Debug, Default)]
pub struct FailingBus;

impl LcdBus for FailingBus {
    type Error = ();

    fn write_command(&mut self, _command: u8) -> Result<(), ()> {
        Err(())
    }

    fn write_data8(&mut self, _data: u8) -> Result<(), ()> {
        Err(())
    }
}
