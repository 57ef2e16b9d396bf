/*!
# LCD 1602 I2C Driver

Drives a 16x2 HD44780 character display through a PCF8574 I2C expander in 4-bit mode.

Basic Usage:

1. Wrap an [`embedded_hal::i2c::I2c`] bus in a [`transport::I2cTransport`] at the expander's
   [`transport::Address`]
<br/>
<br/>
2. Either build a [`sender::I2cSender`] and call [`lcd::Lcd::new()`] to initialize the display
   (works without `std`), or call [`session::Session::attach()`] to get a lock-guarded session
<br/>
<br/>
3. Call [`session::Session::write()`] (or [`lcd::Lcd::render()`]) with up to 32 bytes of text;
   bytes 0..16 go to the first line, bytes 16..32 to the second
*/

#![cfg_attr(not(feature = "std"), no_std)]
#![warn(missing_docs)]

pub mod command;
pub mod error;
pub mod lcd;
#[cfg(feature = "linux")]
pub mod linux;
pub mod register;
pub mod sender;
#[cfg(feature = "std")]
pub mod session;
pub mod transport;
mod utils;

pub use error::{Error, TransportError};
