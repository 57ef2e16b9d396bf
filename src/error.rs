//! Error types
//!
//! A transport failure is never retried: a half-latched nibble would leave the
//! controller expecting the other half, so the operation in progress is aborted
//! and the error handed to the caller.

use embedded_hal::i2c::{self, ErrorKind, NoAcknowledgeSource};

/// A single expander write failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum TransportError {
    /// Nothing acknowledged the address or the data byte
    #[error("expander did not acknowledge ({0:?})")]
    NoAcknowledge(NoAcknowledgeSource),
    /// Another bus master won arbitration
    #[error("I2C arbitration lost")]
    ArbitrationLoss,
    /// Any other bus fault reported by the HAL
    #[error("I2C bus error: {0:?}")]
    Bus(ErrorKind),
}

impl TransportError {
    /// Classify a HAL error
    pub fn from_i2c<E: i2c::Error>(err: E) -> Self {
        Self::from(err.kind())
    }
}

impl From<ErrorKind> for TransportError {
    fn from(kind: ErrorKind) -> Self {
        match kind {
            ErrorKind::NoAcknowledge(source) => Self::NoAcknowledge(source),
            ErrorKind::ArbitrationLoss => Self::ArbitrationLoss,
            other => Self::Bus(other),
        }
    }
}

/// Errors surfaced by display operations
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A command or data transfer failed; the operation was aborted
    #[error(transparent)]
    Transport(#[from] TransportError),

    /// The power-up sequence failed; the display must be attached again from scratch
    #[error("display initialization failed: {0}")]
    Initialization(#[source] TransportError),

    /// The host bus device backing the session could not be opened
    #[cfg(feature = "std")]
    #[error("could not acquire display resources: {0}")]
    Allocation(std::string::String),
}

#[cfg(feature = "std")]
impl From<Error> for std::io::Error {
    fn from(err: Error) -> Self {
        let kind = match &err {
            Error::Transport(_) | Error::Initialization(_) => std::io::ErrorKind::Other,
            Error::Allocation(_) => std::io::ErrorKind::NotFound,
        };
        std::io::Error::new(kind, err)
    }
}
