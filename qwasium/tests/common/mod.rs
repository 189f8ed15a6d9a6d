#![allow(dead_code)]

use embassy_time::{Duration, Instant};
use heapless::Vec;
use qwasium::action::{Action, KeyAction};
use qwasium::channel::ReportChannel;
use qwasium::config::{BehaviorConfig, MacrosConfig, TapDancesConfig};
use qwasium::hid::Report;
use qwasium::keyboard::Keyboard;
use qwasium::keyboard_macros::{KeyboardMacro, MacroOperation, SWITCH_KEYBOARD};
use qwasium::keycode::KeyCode;
use qwasium::modifier::ModifierCombination;
use qwasium::tap_dance::{TapHold, TapHoldMode};
use qwasium::{a, k, layer, mcr, mo, mt, shifted_tap_hold, td, tg};

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

pub const ROW: usize = 2;
pub const COL: usize = 6;
pub const NUM_LAYER: usize = 3;

#[rustfmt::skip]
pub const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    layer!([
        [k!(A), mt!(F, ModifierCombination::LCTRL), td!(0), td!(1), mcr!(0), mcr!(1)],
        [k!(B), mo!(1), mo!(2), k!(LShift), k!(AudioVolUp), k!(MouseBtn1)]
    ]),
    layer!([
        [k!(Kc1), a!(Transparent), a!(Transparent), a!(Transparent), k!(MouseUp), k!(MouseWheelDown)],
        [tg!(2), a!(Transparent), a!(Transparent), a!(Transparent), k!(WwwBack), a!(No)]
    ]),
    layer!([
        [k!(Kc2), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)],
        [a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent), a!(Transparent)]
    ]),
];

pub const TEXT_MACRO: KeyboardMacro = KeyboardMacro::new(&[MacroOperation::Text("Hi@")]);

pub fn tap_dances() -> Vec<TapHold, 8> {
    Vec::from_iter([
        shifted_tap_hold!(Minus, ModifierCombination::LCTRL),
        TapHold::new(Action::Key(KeyCode::Escape), Action::Modifier(ModifierCombination::LGUI)),
    ])
}

pub fn behavior_config(mode: TapHoldMode) -> BehaviorConfig {
    BehaviorConfig {
        tap_dance: TapDancesConfig {
            tap_dances: tap_dances(),
            mode,
            ..Default::default()
        },
        keyboard_macros: MacrosConfig {
            macros: Vec::from_iter([SWITCH_KEYBOARD, TEXT_MACRO]),
        },
        ..Default::default()
    }
}

pub fn create_test_keyboard_with_config(
    behavior: BehaviorConfig,
    reports: &ReportChannel,
) -> Keyboard<'_, ROW, COL, NUM_LAYER> {
    Keyboard::new(&KEYMAP, behavior, reports)
}

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
        keyboard.process_event(qwasium::event::KeyEvent::at(key.row, key.col, key.pressed, now));
    }
    keyboard.process_timeout(now + Duration::from_secs(1));
}

/// Every report sent so far
pub fn drain_reports(reports: &ReportChannel) -> std::vec::Vec<Report> {
    let mut all = std::vec::Vec::new();
    while let Ok(report) = reports.try_receive() {
        all.push(report);
    }
    all
}

/// Keyboard reports sent so far, as `(modifier, keycodes)`
pub fn keyboard_reports(reports: &ReportChannel) -> std::vec::Vec<(u8, [u8; 6])> {
    drain_reports(reports)
        .into_iter()
        .filter_map(|report| match report {
            Report::KeyboardReport(r) => Some((r.modifier, r.keycodes)),
            _ => None,
        })
        .collect()
}

/// Keycodes of a report, the rest of the slots empty
pub fn keys<const N: usize>(keycodes: [KeyCode; N]) -> [u8; 6] {
    let mut slots = [0; 6];
    for (slot, key) in slots.iter_mut().zip(keycodes) {
        *slot = key as u8;
    }
    slots
}

pub const NO_KEYS: [u8; 6] = [0; 6];

/// Run the key sequence on a fresh keyboard and check the keyboard reports.
pub fn key_sequence_test(mode: TapHoldMode, key_sequence: &[TestKeyPress], expected: &[(u8, [u8; 6])]) {
    let reports = ReportChannel::new();
    let mut keyboard = create_test_keyboard_with_config(behavior_config(mode), &reports);
    run_key_sequence(&mut keyboard, key_sequence);
    assert_eq!(keyboard_reports(&reports), expected);
    assert_eq!(keyboard.held_keycodes(), &[KeyCode::No; 6]);
    assert_eq!(keyboard.held_modifiers().into_bits(), 0);
}
