#![allow(dead_code)]

use embassy_time::{Duration, Instant};
use qwasium::channel::ReportChannel;
use qwasium::event::KeyEvent;
use qwasium::hid::Report;
use qwasium::keyboard::Keyboard;
use qwasium::keycode::KeyCode;
use qwasium_ergodox_ez::{COL, NUM_LAYER, ROW};

// Init logger for tests
#[ctor::ctor]
pub fn init_log() {
    let _ = env_logger::builder()
        .filter_level(log::LevelFilter::Debug)
        .is_test(true)
        .try_init();
}

pub const KC_LCTRL: u8 = 1 << 0;
pub const KC_LSHIFT: u8 = 1 << 1;
pub const KC_LGUI: u8 = 1 << 3;

#[derive(Debug, Clone)]
pub struct TestKeyPress {
    pub row: u8,
    pub col: u8,
    pub pressed: bool,
    pub delay: u64, // Delay before this key event in milliseconds
}

pub const fn press(row: u8, col: u8, delay: u64) -> TestKeyPress {
    TestKeyPress {
        row,
        col,
        pressed: true,
        delay,
    }
}

pub const fn release(row: u8, col: u8, delay: u64) -> TestKeyPress {
    TestKeyPress {
        row,
        col,
        pressed: false,
        delay,
    }
}

/// Feed the key sequence with its delays, then let every pending timeout expire.
pub fn run_key_sequence(keyboard: &mut Keyboard<'_, ROW, COL, NUM_LAYER>, key_sequence: &[TestKeyPress]) {
    let mut now = Instant::from_millis(1000);
    for key in key_sequence {
        now += Duration::from_millis(key.delay);
        keyboard.process_event(KeyEvent::at(key.row, key.col, key.pressed, now));
    }
    keyboard.process_timeout(now + Duration::from_secs(1));
}

pub fn drain_reports(reports: &ReportChannel) -> Vec<Report> {
    let mut all = Vec::new();
    while let Ok(report) = reports.try_receive() {
        all.push(report);
    }
    all
}

/// Keyboard reports sent so far, as `(modifier, keycodes)`
pub fn keyboard_reports(reports: &ReportChannel) -> Vec<(u8, [u8; 6])> {
    drain_reports(reports)
        .into_iter()
        .filter_map(|report| match report {
            Report::KeyboardReport(r) => Some((r.modifier, r.keycodes)),
            _ => None,
        })
        .collect()
}

pub fn keys<const N: usize>(keycodes: [KeyCode; N]) -> [u8; 6] {
    let mut slots = [0; 6];
    for (slot, key) in slots.iter_mut().zip(keycodes) {
        *slot = key as u8;
    }
    slots
}

pub const NO_KEYS: [u8; 6] = [0; 6];
