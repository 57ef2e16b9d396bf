mod common;

use common::{Event, Log, RecordingBus, RecordingDelay, Transfer, MS};
use lcd1602_i2c::{
    lcd::{Config, Lcd},
    sender::I2cSender,
    TransportError,
};

fn ready_lcd() -> (Log, Lcd<I2cSender<RecordingBus, RecordingDelay>>) {
    let log = Log::new();
    let lcd = Lcd::with_config(log.bus(), log.delay(), Config::default()).unwrap();
    log.clear();
    (log, lcd)
}

fn data(text: &[u8]) -> Vec<Transfer> {
    text.iter().map(|&b| Transfer::Data(b)).collect()
}

#[test]
fn single_line_text() {
    let (log, mut lcd) = ready_lcd();
    lcd.render(b"hello").unwrap();

    let mut expected = vec![Transfer::Command(0x01), Transfer::Command(0x02)];
    expected.extend(data(b"hello"));
    assert_eq!(log.transfers(), expected);
}

#[test]
fn seventeenth_byte_starts_the_second_line() {
    let (log, mut lcd) = ready_lcd();
    let text = b"0123456789abcdefX";
    lcd.render(text).unwrap();

    let transfers = log.transfers();
    let mut expected = vec![Transfer::Command(0x01), Transfer::Command(0x02)];
    expected.extend(data(&text[..16]));
    expected.push(Transfer::Command(0xC0));
    expected.push(Transfer::Data(b'X'));
    assert_eq!(transfers, expected);

    let jump = transfers
        .iter()
        .position(|t| *t == Transfer::Command(0xC0))
        .unwrap();
    assert_eq!(transfers[jump - 1], Transfer::Data(b'f'));
}

#[test]
fn exactly_one_line_never_jumps() {
    let (log, mut lcd) = ready_lcd();
    lcd.render(&[b'#'; 16]).unwrap();

    assert!(!log.transfers().contains(&Transfer::Command(0xC0)));
}

#[test]
fn bytes_past_the_screen_are_dropped() {
    let (log, mut lcd) = ready_lcd();
    let text: Vec<u8> = (b'A'..=b'z').take(40).collect();
    lcd.render(&text).unwrap();

    let written: Vec<u8> = log
        .transfers()
        .into_iter()
        .filter_map(|t| match t {
            Transfer::Data(b) => Some(b),
            Transfer::Command(_) => None,
        })
        .collect();
    assert_eq!(written, &text[..32]);
}

#[test]
fn empty_render_only_clears_and_homes() {
    let (log, mut lcd) = ready_lcd();

    for _ in 0..3 {
        lcd.render(&[]).unwrap();
        assert_eq!(
            log.transfers(),
            [Transfer::Command(0x01), Transfer::Command(0x02)]
        );
        log.clear();
    }
}

#[test]
fn pulse_count_matches_frame_length() {
    for len in 0..=32usize {
        let (log, mut lcd) = ready_lcd();
        lcd.render(&vec![b'.'; len]).unwrap();

        let transfers = 2 + len + usize::from(len > 16);
        assert_eq!(log.transfers().len(), transfers, "len {len}");
        assert_eq!(log.pulses().len(), 2 * transfers, "len {len}");
    }
}

#[test]
fn slow_commands_get_their_wait() {
    let (log, mut lcd) = ready_lcd();
    lcd.render(b"").unwrap();

    // each command is 8 writes; a long wait must follow both of them
    let events = log.events();
    let mut writes_seen = 0;
    let mut long_waits_after = Vec::new();
    for event in events {
        match event {
            Event::Write(_) => writes_seen += 1,
            Event::DelayNs(ns) if ns >= 2 * MS => long_waits_after.push(writes_seen),
            Event::DelayNs(_) => {}
        }
    }
    assert_eq!(long_waits_after, [4, 8]);
}

#[test]
fn failure_stops_the_render() {
    for fail_at in [0, 3, 9, 20] {
        let (log, mut lcd) = ready_lcd();
        let before = log.attempts();
        log.fail_after(fail_at);

        assert_eq!(
            lcd.render(b"a failing write, line two"),
            Err(TransportError::ArbitrationLoss)
        );
        assert_eq!(log.attempts() - before, fail_at + 1);
    }
}

#[test]
fn data_pulses_carry_register_select() {
    let (log, mut lcd) = ready_lcd();
    lcd.render(b"ok").unwrap();

    let pulses = log.pulses();
    assert!(pulses[..4].iter().all(|p| !p.register_select));
    assert!(pulses[4..].iter().all(|p| p.register_select));
    assert!(pulses.iter().all(|p| p.backlight));
}
