//! Power-up sequence and init config

use embedded_hal::delay::DelayNs;

use crate::{
    command::{CommandSet, DataWidth, Font, LineMode, MoveDirection, ShiftType, State},
    error::Error,
    lcd::{Lcd, COMMAND_US, SLOW_COMMAND_US},
    sender::{I2cSender, SendCommand},
    transport::{Address, Transport},
};

/// Time the controller needs after power-up before it accepts anything
pub const POWER_ON_DELAY_MS: u32 = 50;

/// Power-up sequence for 4-bit, 2-line, 5x8 font, display on, cursor off, left to right
///
/// The controller may power up believing it is in either bus width, three
/// "8 bit" nibbles force it into a known state before 4-bit mode is committed.
/// Each entry is the transfer and the wait that must follow it.
pub const INIT_SEQUENCE: [(CommandSet, u32); 8] = [
    (CommandSet::HalfFunctionSet8Bit, 5_000),
    (CommandSet::HalfFunctionSet8Bit, 1_000),
    (CommandSet::HalfFunctionSet8Bit, 1_000),
    (CommandSet::HalfFunctionSet4Bit, 1_000),
    (
        CommandSet::FunctionSet(DataWidth::Bit4, LineMode::TwoLine, Font::Font5x8),
        COMMAND_US,
    ),
    (
        CommandSet::DisplayOnOff {
            display: State::On,
            cursor: State::Off,
            cursor_blink: State::Off,
        },
        COMMAND_US,
    ),
    (CommandSet::ClearDisplay, SLOW_COMMAND_US),
    (
        CommandSet::EntryModeSet(MoveDirection::LeftToRight, ShiftType::CursorOnly),
        COMMAND_US,
    ),
];

/// [`Config`] is the init config of a [`Lcd`]
#[derive(Clone, Copy, Debug, Default)]
pub struct Config {
    backlight: State,
    address: Address,
}

#[allow(missing_docs)]
impl Config {
    pub fn get_backlight(&self) -> State {
        self.backlight
    }

    pub fn set_backlight(mut self, backlight: State) -> Self {
        self.backlight = backlight;
        self
    }

    pub fn get_address(&self) -> Address {
        self.address
    }

    pub fn set_address(mut self, address: Address) -> Self {
        self.address = address;
        self
    }
}

impl<Sender: SendCommand> Lcd<Sender> {
    /// Create a [`Lcd`] driver, and init LCD hardware
    ///
    /// Any failed transfer aborts the sequence with [`Error::Initialization`];
    /// the display is then in an unknown state and the whole sequence has to be
    /// run again from the start.
    pub fn new(mut sender: Sender) -> Result<Self, Error> {
        log::debug!("initializing display");

        sender.delay_ms(POWER_ON_DELAY_MS);

        for (step, (command, wait_us)) in INIT_SEQUENCE.iter().enumerate() {
            if let Err(err) = sender.send_and_wait(*command, *wait_us) {
                log::error!("display init failed at step {step} ({command:?}): {err}");
                return Err(Error::Initialization(err));
            }
        }

        log::debug!("display ready");

        Ok(Lcd { sender })
    }
}

impl<T: Transport, D: DelayNs> Lcd<I2cSender<T, D>> {
    /// Build the expander sender from `config` and init LCD hardware
    ///
    /// The backlight from `config` is already applied to the init transfers.
    pub fn with_config(transport: T, delayer: D, config: Config) -> Result<Self, Error> {
        Self::new(I2cSender::new(transport, delayer, config.get_backlight()))
    }
}
