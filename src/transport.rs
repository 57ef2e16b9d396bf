//! Single-byte writes to the expander, the only code touching real hardware

use core::{fmt, str::FromStr};

use embedded_hal::i2c::{I2c, SevenBitAddress};

use crate::error::TransportError;

/// Something that can put one byte into the expander's output register
pub trait Transport {
    /// Write `value` to the expander, exactly one byte, no read-back
    fn write(&mut self, value: u8) -> Result<(), TransportError>;
}

impl<T: Transport + ?Sized> Transport for &mut T {
    fn write(&mut self, value: u8) -> Result<(), TransportError> {
        (**self).write(value)
    }
}

/// 7-bit bus address of the expander
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum Address {
    /// PCF8574 boards, 0x27
    #[default]
    Standard,
    /// PCF8574A boards, 0x3F
    Alternate,
    /// Any other strapping of A2..A0
    Custom(SevenBitAddress),
}

impl Address {
    #[allow(missing_docs)]
    pub fn get_addr(self) -> SevenBitAddress {
        match self {
            Address::Standard => 0x27,
            Address::Alternate => 0x3F,
            Address::Custom(addr) => addr,
        }
    }
}

/// Why an address string was rejected
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ParseAddressError;

impl fmt::Display for ParseAddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("expected `standard`, `alternate` or a 7-bit address such as 0x27")
    }
}

impl core::error::Error for ParseAddressError {}

impl FromStr for Address {
    type Err = ParseAddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        if s.eq_ignore_ascii_case("standard") {
            return Ok(Address::Standard);
        }
        if s.eq_ignore_ascii_case("alternate") {
            return Ok(Address::Alternate);
        }

        let addr = match s.strip_prefix("0x").or_else(|| s.strip_prefix("0X")) {
            Some(hex) => u8::from_str_radix(hex, 16),
            None => s.parse::<u8>(),
        }
        .map_err(|_| ParseAddressError)?;

        match addr {
            0x27 => Ok(Address::Standard),
            0x3F => Ok(Address::Alternate),
            addr if addr < 0x80 => Ok(Address::Custom(addr)),
            _ => Err(ParseAddressError),
        }
    }
}

/// [`Transport`] over an `embedded-hal` I2C bus at a fixed address
pub struct I2cTransport<I2C> {
    i2c: I2C,
    addr: Address,
}

impl<I2C: I2c> I2cTransport<I2C> {
    #[allow(missing_docs)]
    pub fn new(i2c: I2C, addr: Address) -> Self {
        Self { i2c, addr }
    }

    #[allow(missing_docs)]
    pub fn get_address(&self) -> Address {
        self.addr
    }

    /// Give the bus back
    pub fn release(self) -> I2C {
        self.i2c
    }
}

impl<I2C: I2c> Transport for I2cTransport<I2C> {
    fn write(&mut self, value: u8) -> Result<(), TransportError> {
        log::trace!("expander <- {value:#010b}");
        self.i2c
            .write(self.addr.get_addr(), &[value])
            .map_err(TransportError::from_i2c)
    }
}
