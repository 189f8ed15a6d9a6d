pub mod common;

use heapless::Vec;
use qwasium::channel::ReportChannel;
use qwasium::combo::{Combo, ComboState};
use qwasium::config::{BehaviorConfig, CombosConfig};
use qwasium::keycode::KeyCode;
use qwasium::{k, mo};
use qwasium::tap_dance::TapHoldMode;

use crate::common::*;

fn combo_config() -> BehaviorConfig {
    BehaviorConfig {
        combo: CombosConfig {
            combos: Vec::from_iter([
                Combo::new([k!(A), k!(B)], k!(Kc1), None),
                Combo::new([k!(A), k!(B), k!(LShift)], k!(Escape), None),
            ]),
            ..Default::default()
        },
        ..behavior_config(TapHoldMode::Standard)
    }
}

fn three_key_combo_config() -> BehaviorConfig {
    BehaviorConfig {
        combo: CombosConfig {
            combos: Vec::from_iter([Combo::new([k!(A), k!(B), k!(LShift)], k!(Escape), None)]),
            ..Default::default()
        },
        ..behavior_config(TapHoldMode::Standard)
    }
}

#[test]
fn test_combo_fires_once_and_rearms() {
    let reports = ReportChannel::new();
    let mut keyboard = create_test_keyboard_with_config(three_key_combo_config(), &reports);
    run_key_sequence(
        &mut keyboard,
        &[
            press(0, 0, 10),
            press(1, 0, 10),
            press(1, 3, 10),
            // Held for a while, nothing more is sent
            release(1, 0, 300),
            press(1, 0, 50),
            release(0, 0, 50),
            release(1, 0, 10),
            release(1, 3, 10),
        ],
    );
    assert_eq!(
        keyboard_reports(&reports),
        [
            (0, keys([KeyCode::Escape])),
            (0, NO_KEYS),
            (0, keys([KeyCode::Escape])),
            (0, NO_KEYS),
        ]
    );
    assert_eq!(keyboard.combos()[0].state(), ComboState::Idle);
    assert_eq!(keyboard.held_keycodes(), &[KeyCode::No; 6]);
    assert_eq!(keyboard.held_modifiers().into_bits(), 0);
}

#[test]
fn test_combo_timeout() {
    let reports = ReportChannel::new();
    let mut keyboard = create_test_keyboard_with_config(three_key_combo_config(), &reports);
    run_key_sequence(
        &mut keyboard,
        &[press(0, 0, 10), press(1, 0, 100), release(1, 0, 20), release(0, 0, 20)],
    );
    assert_eq!(
        keyboard_reports(&reports),
        [
            (0, keys([KeyCode::A])),
            (0, keys([KeyCode::A, KeyCode::B])),
            (0, keys([KeyCode::A])),
            (0, NO_KEYS),
        ]
    );
}

#[test]
fn test_combo_interrupted_by_other_key() {
    let reports = ReportChannel::new();
    let mut keyboard = create_test_keyboard_with_config(three_key_combo_config(), &reports);
    run_key_sequence(
        &mut keyboard,
        &[press(0, 0, 10), press(1, 4, 10), release(1, 4, 10), release(0, 0, 10)],
    );
    // The buffered key goes out before the interrupting one
    let reports = drain_reports(&reports);
    assert_eq!(reports.len(), 4);
    assert!(matches!(&reports[0], qwasium::hid::Report::KeyboardReport(r) if { r.keycodes } == keys([KeyCode::A])));
    assert!(matches!(&reports[1], qwasium::hid::Report::MediaKeyboardReport(_)));
    assert!(matches!(&reports[2], qwasium::hid::Report::MediaKeyboardReport(_)));
    assert!(matches!(&reports[3], qwasium::hid::Report::KeyboardReport(r) if { r.keycodes } == NO_KEYS));
}

#[test]
fn test_combo_released_before_complete() {
    key_sequence_test(
        TapHoldMode::Standard,
        &[press(0, 0, 10), release(0, 0, 20)],
        &[(0, keys([KeyCode::A])), (0, NO_KEYS)],
    );
}

#[test]
fn test_longer_combo_first() {
    let reports = ReportChannel::new();
    let keyboard = create_test_keyboard_with_config(combo_config(), &reports);
    assert_eq!(keyboard.combos()[0].output(), k!(Escape));
    assert_eq!(keyboard.combos()[1].output(), k!(Kc1));
}

#[test]
fn test_buffered_layer_key_applies_to_next_key() {
    let reports = ReportChannel::new();
    let behavior = BehaviorConfig {
        combo: CombosConfig {
            combos: Vec::from_iter([Combo::new([mo!(1), mo!(2)], k!(Escape), None)]),
            ..Default::default()
        },
        ..behavior_config(TapHoldMode::Standard)
    };
    let mut keyboard = create_test_keyboard_with_config(behavior, &reports);
    run_key_sequence(
        &mut keyboard,
        &[press(1, 1, 10), press(0, 0, 10), release(0, 0, 10), release(1, 1, 10)],
    );
    // Layer 1 is on before the second key is looked up
    assert_eq!(
        keyboard_reports(&reports),
        [(0, keys([KeyCode::Kc1])), (0, NO_KEYS)]
    );
    assert_eq!(keyboard.keymap().layer_state(), 0);
}
