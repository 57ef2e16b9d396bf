//! Built-in sender
//! If you want to drive the display through something else, implement [`SendCommand`]

use crate::{
    command::{Bits, Command, RegisterSelection, State},
    error::TransportError,
};

mod i2c_sender;

pub use i2c_sender::I2cSender;

/// [`SendCommand`] is the trait a sender should implement to communicate with the hardware
///
/// Implementors provide the nibble strobe and a blocking delay; whole-byte
/// transfers are built on top of those.
pub trait SendCommand {
    /// Latch one nibble into the controller with the given register select,
    /// carrying the current backlight state
    fn pulse(&mut self, nibble: u8, register_select: bool) -> Result<(), TransportError>;

    /// Block the caller for at least `us` microseconds
    fn delay_us(&mut self, us: u32);

    /// Block the caller for at least `ms` milliseconds
    fn delay_ms(&mut self, ms: u32) {
        self.delay_us(ms.saturating_mul(1_000));
    }

    #[allow(missing_docs)]
    fn get_backlight(&self) -> State;

    /// Change the backlight and apply it to the expander right away
    fn set_backlight(&mut self, backlight: State) -> Result<(), TransportError>;

    /// Send a [`Command`]: one pulse for a nibble, high then low nibble for a byte
    fn send(&mut self, command: impl Into<Command>) -> Result<(), TransportError> {
        let command: Command = command.into();
        let register_select = command.get_register_selection() == RegisterSelection::Data;

        match command.get_data() {
            Bits::Bit4(nibble) => self.pulse(nibble, register_select),
            Bits::Bit8(byte) => {
                self.pulse(byte >> 4, register_select)?;
                self.pulse(byte & 0x0F, register_select)
            }
        }
    }

    /// Send a raw instruction byte
    fn send_command(&mut self, byte: u8) -> Result<(), TransportError> {
        self.send(Command::new(RegisterSelection::Command, Bits::Bit8(byte)))
    }

    /// Send a raw character byte
    fn send_data(&mut self, byte: u8) -> Result<(), TransportError> {
        self.send(Command::new(RegisterSelection::Data, Bits::Bit8(byte)))
    }

    /// Send a command, then wait for it to execute
    fn send_and_wait(
        &mut self,
        command: impl Into<Command>,
        wait_us: u32,
    ) -> Result<(), TransportError> {
        self.send(command)?;
        self.delay_us(wait_us);
        Ok(())
    }
}
