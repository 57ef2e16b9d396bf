//! Lock-guarded display session
//!
//! A [`Session`] is created by [`Session::attach()`] once the expander shows up,
//! and every write goes through it. The lock is held for a whole render, so two
//! callers can never interleave nibbles on the bus.

use std::{
    io,
    sync::{Mutex, MutexGuard, PoisonError},
};

use embedded_hal::delay::DelayNs;

use crate::{
    command::State,
    error::Error,
    lcd::{Config, Lcd, FRAME_CAPACITY},
    sender::I2cSender,
    transport::Transport,
};

/// Most bytes a single write accepts, one slot of the copy buffer is kept for a terminator
pub const MAX_WRITE_LEN: usize = 63;

const WRITE_BUFFER_LEN: usize = MAX_WRITE_LEN + 1;

/// One attached display
pub struct Session<T: Transport, D: DelayNs> {
    lcd: Mutex<Lcd<I2cSender<T, D>>>,
}

impl<T: Transport, D: DelayNs> Session<T, D> {
    /// Run the power-up sequence and hand out a session ready for writes
    ///
    /// Backlight defaults to on (see [`Config`]). Nothing is kept if the
    /// sequence fails; attach again to retry from the start.
    pub fn attach(transport: T, delayer: D, config: Config) -> Result<Self, Error> {
        log::debug!(
            "attaching display at {:?}, backlight {:?}",
            config.get_address(),
            config.get_backlight()
        );

        let lcd = Lcd::with_config(transport, delayer, config)?;

        log::info!("display attached");

        Ok(Self {
            lcd: Mutex::new(lcd),
        })
    }

    // a panic while holding the lock can't leave anything but the backlight flag behind
    fn lock(&self) -> MutexGuard<'_, Lcd<I2cSender<T, D>>> {
        self.lcd.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replace the screen content with `bytes`
    ///
    /// Up to [`MAX_WRITE_LEN`] bytes are accepted and the first 32 of those are
    /// shown; the rest is dropped without error. Returns the accepted count.
    /// An empty `bytes` is a no-op returning 0.
    pub fn write(&self, bytes: &[u8]) -> Result<usize, Error> {
        if bytes.is_empty() {
            return Ok(0);
        }

        let mut lcd = self.lock();

        let accepted = bytes.len().min(MAX_WRITE_LEN);
        let mut buffer = [0u8; WRITE_BUFFER_LEN];
        buffer[..accepted].copy_from_slice(&bytes[..accepted]);

        lcd.render(&buffer[..accepted.min(FRAME_CAPACITY)])?;

        log::trace!("accepted {accepted} of {} bytes", bytes.len());

        Ok(accepted)
    }

    #[allow(missing_docs)]
    pub fn get_backlight(&self) -> State {
        self.lock().get_backlight()
    }

    /// Switch the backlight; the setting sticks for every later write
    pub fn set_backlight(&self, backlight: State) -> Result<(), Error> {
        self.lock().set_backlight(backlight)?;
        Ok(())
    }

    /// Blank the display and give back the transport and delayer
    ///
    /// The clear is best effort: a failure is logged and teardown continues.
    pub fn detach(self) -> (T, D) {
        let mut lcd = self.lcd.into_inner().unwrap_or_else(PoisonError::into_inner);

        if let Err(err) = lcd.clean_display() {
            log::warn!("could not clear display on detach: {err}");
        }

        log::info!("display detached");

        lcd.release().release()
    }
}

/// Byte-stream access: each `write` call replaces the screen content
///
/// `write_all` would render the tail of an oversized buffer as a second frame,
/// use `write` for one frame.
impl<T: Transport, D: DelayNs> io::Write for &Session<T, D> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        Ok(Session::write(*self, buf)?)
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
