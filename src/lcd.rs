//! The display itself: power-up, text rendering and the few commands they use

use crate::{
    command::{CommandSet, State, LINE_1_START},
    error::TransportError,
    sender::SendCommand,
};

pub mod init;
mod render;

pub use init::{Config, INIT_SEQUENCE, POWER_ON_DELAY_MS};
pub use render::TextFrame;

/// Characters per visible line
pub const LINE_CAPACITY: usize = 16;
/// Visible lines
pub const LINE_COUNT: usize = 2;
/// Characters that fit on screen
pub const FRAME_CAPACITY: usize = LINE_CAPACITY * LINE_COUNT;

/// Execution time of "clear display" and "return home"
pub const SLOW_COMMAND_US: u32 = 2_000;
/// Wait after every other instruction the driver issues on its own
pub const COMMAND_US: u32 = 1_000;

/// An initialized 16x2 display
///
/// Only constructed through [`Lcd::new()`], so holding one means the power-up
/// sequence has completed.
pub struct Lcd<Sender: SendCommand> {
    sender: Sender,
}

impl<Sender: SendCommand> Lcd<Sender> {
    #[allow(missing_docs)]
    pub fn get_backlight(&self) -> State {
        self.sender.get_backlight()
    }

    /// Note:
    /// The new state is written right away and kept for every later transfer
    pub fn set_backlight(&mut self, backlight: State) -> Result<(), TransportError> {
        self.sender.set_backlight(backlight)
    }

    #[allow(missing_docs)]
    pub fn clean_display(&mut self) -> Result<(), TransportError> {
        self.sender
            .send_and_wait(CommandSet::ClearDisplay, SLOW_COMMAND_US)
    }

    #[allow(missing_docs)]
    pub fn return_home(&mut self) -> Result<(), TransportError> {
        self.sender
            .send_and_wait(CommandSet::ReturnHome, SLOW_COMMAND_US)
    }

    /// Move the cursor to the first cell of `line` (0 or 1)
    pub fn set_cursor_to_line(&mut self, line: u8) -> Result<(), TransportError> {
        let addr = match line {
            0 => 0,
            _ => LINE_1_START,
        };
        self.sender
            .send_and_wait(CommandSet::SetDDRAM(addr), COMMAND_US)
    }

    /// Write a character at the cursor; the controller advances the cursor itself
    pub fn write_u8_to_cur(&mut self, byte: u8) -> Result<(), TransportError> {
        self.sender.send(CommandSet::WriteDataToRAM(byte))
    }

    #[allow(missing_docs)]
    pub fn delay_ms(&mut self, ms: u32) {
        self.sender.delay_ms(ms);
    }

    /// Tear down the driver and give the sender back, the display keeps its content
    pub fn release(self) -> Sender {
        self.sender
    }
}
