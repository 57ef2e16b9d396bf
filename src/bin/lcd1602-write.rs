use std::{
    io::{self, Read},
    path::PathBuf,
};

use anyhow::Context;
use clap::{Parser, ValueEnum};

use lcd1602_i2c::{command::State, lcd::Config, linux, transport::Address};

/// Show up to 32 characters on a 16x2 I2C character display
///
/// Characters 1-16 go to the first line, 17-32 to the second.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Args {
    /// I2C character device the expander sits on
    #[arg(short, long, default_value = "/dev/i2c-1")]
    bus: PathBuf,

    /// Expander address: `standard` (0x27), `alternate` (0x3F) or a 7-bit value
    #[arg(short, long, default_value = "standard")]
    address: Address,

    #[arg(long, value_enum, default_value_t = Backlight::On)]
    backlight: Backlight,

    /// Text to show, read from stdin when missing
    text: Option<String>,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Backlight {
    On,
    Off,
}

impl From<Backlight> for State {
    fn from(value: Backlight) -> Self {
        match value {
            Backlight::On => State::On,
            Backlight::Off => State::Off,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();

    let text = match args.text {
        Some(text) => text.into_bytes(),
        None => {
            let mut buf = Vec::new();
            io::stdin()
                .read_to_end(&mut buf)
                .context("reading text from stdin")?;
            // `echo` style input carries a trailing newline the display can't show
            while matches!(buf.last(), Some(b'\n' | b'\r')) {
                buf.pop();
            }
            buf
        }
    };

    let config = Config::default()
        .set_address(args.address)
        .set_backlight(args.backlight.into());

    let session = linux::open(&args.bus, config)
        .with_context(|| format!("attaching display on {}", args.bus.display()))?;

    let accepted = session.write(&text).context("writing to display")?;
    log::info!("{accepted} of {} bytes accepted", text.len());

    Ok(())
}
