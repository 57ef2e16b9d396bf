//! HD44780 instruction set, limited to what a write-only 16x2 text display needs

use crate::utils::BitOps;

/// Commands (and data writes) understood by the controller
#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandSet {
    ClearDisplay,
    ReturnHome,
    EntryModeSet(MoveDirection, ShiftType),
    DisplayOnOff {
        display: State,
        cursor: State,
        cursor_blink: State,
    },
    // not a command from datasheet, it's the lone high nibble of
    // "function set, 8 bit" sent while the bus width is still unknown
    HalfFunctionSet8Bit,
    // the lone high nibble that commits 4 bit mode
    HalfFunctionSet4Bit,
    FunctionSet(DataWidth, LineMode, Font),
    SetDDRAM(u8),
    WriteDataToRAM(u8),
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum MoveDirection {
    RightToLeft,
    #[default]
    LeftToRight,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum ShiftType {
    #[default]
    CursorOnly,
    CursorAndDisplay,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum State {
    Off,
    #[default]
    On,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum DataWidth {
    #[default]
    Bit4,
    Bit8,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LineMode {
    OneLine,
    #[default]
    TwoLine,
}

#[allow(missing_docs)]
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Font {
    #[default]
    Font5x8,
    Font5x11,
}

/// DDRAM address of the first cell of the second line
pub const LINE_1_START: u8 = 0x40;

/// Which controller register a transfer targets
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RegisterSelection {
    #[allow(missing_docs)]
    Command,
    #[allow(missing_docs)]
    Data,
}

/// Payload width of a transfer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Bits {
    /// a single nibble pulse, only used while initializing
    Bit4(u8),
    /// a full byte, sent as high nibble then low nibble
    Bit8(u8),
}

/// A raw transfer: register selection plus payload
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Command {
    rs: RegisterSelection,
    data: Bits,
}

impl Command {
    pub(crate) fn new(rs: RegisterSelection, data: Bits) -> Self {
        Self { rs, data }
    }

    #[allow(missing_docs)]
    pub fn get_register_selection(&self) -> RegisterSelection {
        self.rs
    }

    #[allow(missing_docs)]
    pub fn get_data(&self) -> Bits {
        self.data
    }
}

impl From<CommandSet> for Command {
    fn from(command: CommandSet) -> Self {
        use RegisterSelection::{Command as Cmd, Data};

        match command {
            CommandSet::ClearDisplay => Self::new(Cmd, Bits::Bit8(0b0000_0001)),

            CommandSet::ReturnHome => Self::new(Cmd, Bits::Bit8(0b0000_0010)),

            CommandSet::EntryModeSet(dir, st) => {
                let raw_bits = 0b0000_0100u8
                    .with_bit(1, dir == MoveDirection::LeftToRight)
                    .with_bit(0, st == ShiftType::CursorAndDisplay);

                Self::new(Cmd, Bits::Bit8(raw_bits))
            }

            CommandSet::DisplayOnOff {
                display,
                cursor,
                cursor_blink,
            } => {
                let raw_bits = 0b0000_1000u8
                    .with_bit(2, display == State::On)
                    .with_bit(1, cursor == State::On)
                    .with_bit(0, cursor_blink == State::On);

                Self::new(Cmd, Bits::Bit8(raw_bits))
            }

            CommandSet::HalfFunctionSet8Bit => Self::new(Cmd, Bits::Bit4(0b0011)),

            CommandSet::HalfFunctionSet4Bit => Self::new(Cmd, Bits::Bit4(0b0010)),

            CommandSet::FunctionSet(width, line, font) => {
                let raw_bits = 0b0010_0000u8
                    .with_bit(4, width == DataWidth::Bit8)
                    .with_bit(3, line == LineMode::TwoLine)
                    .with_bit(2, font == Font::Font5x11);

                Self::new(Cmd, Bits::Bit8(raw_bits))
            }

            CommandSet::SetDDRAM(addr) => {
                debug_assert!(addr < 2u8.pow(7), "DDRAM address out of range");

                Self::new(Cmd, Bits::Bit8(0b1000_0000 | (addr & 0b0111_1111)))
            }

            CommandSet::WriteDataToRAM(data) => Self::new(Data, Bits::Bit8(data)),
        }
    }
}
