//! Layout of the expander's single output register
//!
//! PCF8574 P7 -> P0 is wired as DB7/DB6/DB5/DB4/BL/EN/RW/RS

use crate::{command::State, utils::BitOps};

/// Register select: 0 = command, 1 = data
pub const RS: u8 = 0;
/// Read/write: always 0, this driver never reads the bus
pub const RW: u8 = 1;
/// Enable strobe, the controller latches on its falling edge
pub const EN: u8 = 2;
/// Backlight transistor
pub const BL: u8 = 3;

/// One byte as written to the expander
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExpanderRegister(u8);

impl ExpanderRegister {
    /// Place `nibble` on DB7..DB4 with the given register select and backlight;
    /// enable is low and RW is clear
    pub fn new(nibble: u8, register_select: bool, backlight: State) -> Self {
        let raw = ((nibble & 0x0F) << 4)
            .with_bit(RS, register_select)
            .with_bit(BL, backlight == State::On);
        Self(raw)
    }

    /// Same value with the enable strobe raised
    pub fn with_enable(self) -> Self {
        Self(self.0.with_bit(EN, true))
    }

    /// Same value with the enable strobe dropped
    pub fn without_enable(self) -> Self {
        Self(self.0.with_bit(EN, false))
    }

    #[allow(missing_docs)]
    pub fn nibble(self) -> u8 {
        self.0 >> 4
    }

    #[allow(missing_docs)]
    pub fn register_select(self) -> bool {
        self.0.is_set(RS)
    }

    #[allow(missing_docs)]
    pub fn backlight(self) -> State {
        match self.0.is_set(BL) {
            true => State::On,
            false => State::Off,
        }
    }

    /// Raw byte for the bus
    pub fn bits(self) -> u8 {
        self.0
    }
}
