//! Drive a 16x2 LCD through a PCF8574 backpack with a STM32F411RET6, without `std`
//!
//! Wiring diagram
//!
//! PCF8574 backpack <-> STM32F411RET6
//!              GND <-> GND
//!              VCC <-> 5V
//!              SDA <-> PB7 (4.7 kOhm pull-up to 3.3V)
//!              SCL <-> PB6 (4.7 kOhm pull-up to 3.3V)

#![no_std]
#![no_main]

use panic_rtt_target as _;
use rtt_target::{rprintln, rtt_init_print};
use stm32f4xx_hal::{
    i2c::{self, I2c},
    pac,
    prelude::*,
};

use lcd1602_i2c::{
    command::State,
    lcd::{Config, Lcd},
    transport::{Address, I2cTransport},
};

const FRAMES: [&[u8]; 3] = [
    b"hello,          world!",
    b"backlight off...",
    b"0123456789abcdef0123456789abcdefdropped",
];

#[cortex_m_rt::entry]
fn main() -> ! {
    rtt_init_print!();

    let dp = pac::Peripherals::take().expect("Cannot take device peripherals");
    let cp = pac::CorePeripherals::take().expect("Cannot take core peripherals");

    let rcc = dp.RCC.constrain();
    let clocks = rcc.cfgr.use_hse(12.MHz()).freeze();

    let delayer = cp.SYST.delay(&clocks);

    let gpiob = dp.GPIOB.split();

    let i2c = I2c::new(
        dp.I2C1,
        (gpiob.pb6, gpiob.pb7),
        i2c::Mode::standard(100.kHz()), // The PCF8574T max I2C speed
        &clocks,
    );

    let transport = I2cTransport::new(i2c, Address::Standard);

    let mut lcd = match Lcd::with_config(transport, delayer, Config::default()) {
        Ok(lcd) => lcd,
        Err(err) => {
            rprintln!("LCD init failed: {}", err);
            #[allow(clippy::empty_loop)]
            loop {}
        }
    };

    loop {
        for (index, frame) in FRAMES.iter().enumerate() {
            let backlight = match index {
                1 => State::Off,
                _ => State::On,
            };

            if let Err(err) = lcd
                .set_backlight(backlight)
                .and_then(|_| lcd.render(frame))
            {
                rprintln!("LCD write failed: {}", err);
            }

            lcd.delay_ms(2_000);
        }
    }
}
