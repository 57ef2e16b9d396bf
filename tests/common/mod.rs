//! Recording transport and delay shared by the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};

use embedded_hal::delay::DelayNs;
use lcd1602_i2c::{
    register::{BL, EN, RS},
    transport::Transport,
    TransportError,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Event {
    Write(u8),
    DelayNs(u64),
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pulse {
    pub nibble: u8,
    pub register_select: bool,
    pub backlight: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Transfer {
    Command(u8),
    Data(u8),
}

#[derive(Default)]
struct Inner {
    events: Vec<Event>,
    attempts: usize,
    fail_at: Option<usize>,
}

/// Shared, ordered log of everything the driver did to the bus and the clock
#[derive(Clone, Default)]
pub struct Log(Arc<Mutex<Inner>>);

impl Log {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fail the write attempt `n` attempts from now (0 = the very next one)
    pub fn fail_after(&self, n: usize) {
        let mut inner = self.0.lock().unwrap();
        inner.fail_at = Some(inner.attempts + n);
    }

    pub fn bus(&self) -> RecordingBus {
        RecordingBus(self.clone())
    }

    pub fn delay(&self) -> RecordingDelay {
        RecordingDelay(self.clone())
    }

    /// Forget everything recorded so far
    pub fn clear(&self) {
        self.0.lock().unwrap().events.clear();
    }

    pub fn events(&self) -> Vec<Event> {
        self.0.lock().unwrap().events.clone()
    }

    pub fn attempts(&self) -> usize {
        self.0.lock().unwrap().attempts
    }

    pub fn writes(&self) -> Vec<u8> {
        self.events()
            .into_iter()
            .filter_map(|event| match event {
                Event::Write(value) => Some(value),
                Event::DelayNs(_) => None,
            })
            .collect()
    }

    /// Strobes as the controller sees them; panics on a write pattern that isn't
    /// "enable high, then the same value with enable low"
    pub fn pulses(&self) -> Vec<Pulse> {
        decode_pulses(&self.writes())
    }

    /// Pair pulses into bytes; only valid once the display is in 4-bit mode
    pub fn transfers(&self) -> Vec<Transfer> {
        pair_transfers(&self.pulses())
    }
}

pub fn decode_pulses(writes: &[u8]) -> Vec<Pulse> {
    assert!(writes.len() % 2 == 0, "dangling half pulse: {writes:02x?}");

    writes
        .chunks(2)
        .map(|pair| {
            let (high, low) = (pair[0], pair[1]);
            assert!(high & (1 << EN) != 0, "enable not raised: {high:#010b}");
            assert_eq!(low, high & !(1 << EN), "enable not dropped on the same value");
            Pulse {
                nibble: low >> 4,
                register_select: low & (1 << RS) != 0,
                backlight: low & (1 << BL) != 0,
            }
        })
        .collect()
}

pub fn pair_transfers(pulses: &[Pulse]) -> Vec<Transfer> {
    assert!(pulses.len() % 2 == 0, "odd number of nibbles");

    pulses
        .chunks(2)
        .map(|pair| {
            assert_eq!(pair[0].register_select, pair[1].register_select);
            let byte = (pair[0].nibble << 4) | pair[1].nibble;
            match pair[0].register_select {
                true => Transfer::Data(byte),
                false => Transfer::Command(byte),
            }
        })
        .collect()
}

pub struct RecordingBus(Log);

impl Transport for RecordingBus {
    fn write(&mut self, value: u8) -> Result<(), TransportError> {
        let mut inner = (self.0).0.lock().unwrap();
        let attempt = inner.attempts;
        inner.attempts += 1;
        if inner.fail_at == Some(attempt) {
            return Err(TransportError::ArbitrationLoss);
        }
        inner.events.push(Event::Write(value));
        Ok(())
    }
}

pub struct RecordingDelay(Log);

impl RecordingDelay {
    fn record(&mut self, ns: u64) {
        (self.0).0.lock().unwrap().events.push(Event::DelayNs(ns));
    }
}

impl DelayNs for RecordingDelay {
    fn delay_ns(&mut self, ns: u32) {
        self.record(u64::from(ns));
    }

    fn delay_us(&mut self, us: u32) {
        self.record(u64::from(us) * 1_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.record(u64::from(ms) * 1_000_000);
    }
}

pub const US: u64 = 1_000;
pub const MS: u64 = 1_000_000;
