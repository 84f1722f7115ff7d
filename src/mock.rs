//! Recording interface shared by the unit tests

use alloc::vec::Vec;
use embedded_hal::delay::DelayNs;

use crate::config::Builder;
use crate::display::Display;
use crate::interface::DisplayInterface;

#[derive(Debug, Clone, PartialEq)]
pub enum Op {
    Command(u8),
    Data(Vec<u8>),
    Reset(u32),
    Backlight(bool),
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MockError;

#[derive(Debug, Default)]
pub struct MockInterface {
    pub ops: Vec<Op>,
    pub fail_commands: bool,
    pub fail_data: bool,
}

impl MockInterface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Command bytes in the order they were sent
    pub fn commands(&self) -> Vec<u8> {
        self.ops
            .iter()
            .filter_map(|op| match op {
                Op::Command(c) => Some(*c),
                _ => None,
            })
            .collect()
    }

    /// Number of data transfers
    pub fn data_writes(&self) -> usize {
        self.ops
            .iter()
            .filter(|op| matches!(op, Op::Data(_)))
            .count()
    }
}

impl DisplayInterface for MockInterface {
    type Error = MockError;

    fn send_command(&mut self, command: u8) -> Result<(), Self::Error> {
        if self.fail_commands {
            return Err(MockError);
        }
        self.ops.push(Op::Command(command));
        Ok(())
    }

    fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
        if self.fail_data {
            return Err(MockError);
        }
        self.ops.push(Op::Data(data.to_vec()));
        Ok(())
    }

    fn reset<D: DelayNs>(&mut self, _delay: &mut D, hold_ms: u32) -> Result<(), Self::Error> {
        self.ops.push(Op::Reset(hold_ms));
        Ok(())
    }

    fn set_backlight(&mut self, on: bool) -> Result<(), Self::Error> {
        self.ops.push(Op::Backlight(on));
        Ok(())
    }
}

pub struct MockDelay;

impl DelayNs for MockDelay {
    fn delay_ns(&mut self, _ns: u32) {}
}

/// Initialized display with the init traffic discarded
pub fn ready_display() -> Display<MockInterface> {
    let mut display = Display::new(MockInterface::new(), Builder::new().build().unwrap());
    display.init(&mut MockDelay).unwrap();
    display.interface_mut().ops.clear();
    display
}
