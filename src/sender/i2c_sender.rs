use embedded_hal::delay::DelayNs;

use crate::{
    command::State, error::TransportError, register::ExpanderRegister, sender::SendCommand,
    transport::Transport,
};

/// Enable must stay high at least this long for the nibble to be set up
pub const ENABLE_PULSE_US: u32 = 1;
/// Wait after the falling edge, well above the controller's own minimum
pub const SETTLE_US: u32 = 50;

/// Sender for a PCF8574-style expander in 4-bit mode
pub struct I2cSender<T: Transport, D: DelayNs> {
    transport: T,
    delayer: D,
    backlight: State,
}

impl<T: Transport, D: DelayNs> I2cSender<T, D> {
    #[allow(missing_docs)]
    pub fn new(transport: T, delayer: D, backlight: State) -> Self {
        Self {
            transport,
            delayer,
            backlight,
        }
    }

    /// Give back the transport and the delayer
    pub fn release(self) -> (T, D) {
        (self.transport, self.delayer)
    }
}

impl<T: Transport, D: DelayNs> SendCommand for I2cSender<T, D> {
    fn pulse(&mut self, nibble: u8, register_select: bool) -> Result<(), TransportError> {
        let value = ExpanderRegister::new(nibble, register_select, self.backlight);

        // the controller latches on the falling edge, so high must land first
        self.transport.write(value.with_enable().bits())?;
        self.delayer.delay_us(ENABLE_PULSE_US);
        self.transport.write(value.bits())?;
        self.delayer.delay_us(SETTLE_US);

        Ok(())
    }

    fn delay_us(&mut self, us: u32) {
        self.delayer.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delayer.delay_ms(ms);
    }

    fn get_backlight(&self) -> State {
        self.backlight
    }

    fn set_backlight(&mut self, backlight: State) -> Result<(), TransportError> {
        self.backlight = backlight;

        // enable stays low, nothing is latched
        self.transport
            .write(ExpanderRegister::new(0, false, backlight).bits())
    }
}
