//! Linux host support through `/dev/i2c-N`

use std::path::Path;

use linux_embedded_hal::{Delay, I2cdev};

use crate::{error::Error, lcd::Config, session::Session, transport::I2cTransport};

/// A session on a Linux I2C character device
pub type LinuxSession = Session<I2cTransport<I2cdev>, Delay>;

/// Open `bus` (e.g. `/dev/i2c-1`) and attach the display at the address in `config`
pub fn open(bus: impl AsRef<Path>, config: Config) -> Result<LinuxSession, Error> {
    let bus = bus.as_ref();

    let i2c = I2cdev::new(bus)
        .map_err(|err| Error::Allocation(format!("{}: {err}", bus.display())))?;

    log::debug!("opened {}", bus.display());

    Session::attach(I2cTransport::new(i2c, config.get_address()), Delay, config)
}
