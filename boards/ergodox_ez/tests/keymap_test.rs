pub mod common;

use qwasium::action::KeyAction;
use qwasium::channel::ReportChannel;
use qwasium::hid::Report;
use qwasium::keyboard::Keyboard;
use qwasium::keyboard_macros::MacroOperation;
use qwasium::keycode::{ConsumerKey, KeyCode};
use qwasium::{k, mcr, mo};
use qwasium_ergodox_ez::keymap::{
    LAYER_BASE, LAYER_BASE_JIS, LAYER_MOUS, LAYER_SYMB_JIS, MACRO_SWITCH_KEYBOARD, MACRO_VERSION, VERSION,
};
use qwasium_ergodox_ez::{KEYMAP, create_keyboard, get_behavior_config};

use crate::common::*;

#[test]
fn test_keymap_shape() {
    assert_eq!(KEYMAP.len(), 8);
    let base = &KEYMAP[LAYER_BASE as usize];
    // Top row of both halves
    assert_eq!(base[0][0], k!(F1));
    assert_eq!(base[6][0], k!(Application));
    assert_eq!(base[7][0], k!(NumLock));
    assert_eq!(base[13][0], k!(F12));
    // Inner column keys
    assert_eq!(base[6][1], mcr!(MACRO_SWITCH_KEYBOARD));
    assert_eq!(base[6][3], k!(Backspace));
    assert_eq!(base[7][3], k!(Delete));
    // Thumb clusters
    assert_eq!(base[3][5], k!(Space));
    assert_eq!(base[1][5], mo!(LAYER_MOUS));
    assert_eq!(base[12][5], k!(Space));
    assert_eq!(base[5][5], k!(MediaPlayPause));
    // The JIS set has no input source switch on the inner column
    assert_eq!(KEYMAP[LAYER_BASE_JIS as usize][6][1], k!(Grave));
    assert_eq!(KEYMAP[LAYER_BASE_JIS as usize][1][5], mo!(7));
}

#[test]
fn test_version_macro() {
    let behavior = get_behavior_config();
    assert_eq!(behavior.keyboard_macros.macros.len(), 4);
    assert!(!VERSION.passthrough);
    assert_eq!(
        VERSION.operations,
        [MacroOperation::Text(concat!("ergodox_ez/qwasium @ ", env!("CARGO_PKG_VERSION")))]
    );
    // Not on any key
    for action in KEYMAP.iter().flatten().flatten() {
        assert_ne!(*action, mcr!(MACRO_VERSION));
    }
}

#[test]
fn test_version_macro_types_text() {
    const LAYERS: [[[KeyAction; 1]; 1]; 1] = [[[mcr!(MACRO_VERSION)]]];
    let reports = ReportChannel::new();
    let mut keyboard: Keyboard<'_, 1, 1, 1> = Keyboard::new(&LAYERS, get_behavior_config(), &reports);
    keyboard.process_event(qwasium::event::KeyEvent::at(0, 0, true, embassy_time::Instant::from_millis(0)));

    let text = concat!("ergodox_ez/qwasium @ ", env!("CARGO_PKG_VERSION"));
    let sent = keyboard_reports(&reports);
    // Every character is pressed and released, then the modifiers are restored
    assert_eq!(sent.len(), 2 * text.len() + 1);
    assert_eq!(sent[0], (0, keys([KeyCode::E])));
    assert_eq!(sent[1], (0, NO_KEYS));
    // "_" of "ergodox_ez"
    assert_eq!(sent[14], (KC_LSHIFT, keys([KeyCode::Minus])));
    assert_eq!(sent[sent.len() - 1], (0, NO_KEYS));
}

#[test]
fn test_home_row_mod_tap() {
    let reports = ReportChannel::new();
    let mut keyboard = create_keyboard(&reports);
    run_key_sequence(&mut keyboard, &[press(1, 2, 10), release(1, 2, 50)]);
    assert_eq!(keyboard_reports(&reports), [(0, keys([KeyCode::A])), (0, NO_KEYS)]);
}

#[test]
fn test_media_key() {
    let reports = ReportChannel::new();
    let mut keyboard = create_keyboard(&reports);
    run_key_sequence(&mut keyboard, &[press(5, 5, 10), release(5, 5, 50)]);
    let usage_ids: Vec<u16> = drain_reports(&reports)
        .into_iter()
        .filter_map(|report| match report {
            Report::MediaKeyboardReport(r) => Some(r.usage_id),
            _ => None,
        })
        .collect();
    assert_eq!(usage_ids, [ConsumerKey::PlayPause as u16, 0]);
}

/// Left thumb layer keys: MO(1) and MO(2) on the bottom row, MO(3) on the thumb cluster
const LAYER_KEYS: [TestKeyPress; 6] = [
    press(4, 4, 10),
    press(3, 4, 10),
    press(1, 5, 10),
    release(1, 5, 50),
    release(3, 4, 10),
    release(4, 4, 10),
];

#[test]
fn test_switch_layer_set() {
    let reports = ReportChannel::new();
    let mut keyboard = create_keyboard(&reports);

    // US -> JIS
    run_key_sequence(&mut keyboard, &LAYER_KEYS);
    assert_eq!(keyboard.keymap().layer_state(), 1u32 << LAYER_BASE_JIS);
    assert!(drain_reports(&reports).is_empty());

    run_key_sequence(&mut keyboard, &[press(6, 1, 10), release(6, 1, 10)]);
    assert_eq!(keyboard_reports(&reports), [(0, keys([KeyCode::Grave])), (0, NO_KEYS)]);

    // The layer keys are looked up on the JIS layers now
    run_key_sequence(&mut keyboard, &[press(4, 4, 10)]);
    assert!(keyboard.keymap().is_layer_active(LAYER_SYMB_JIS));
    run_key_sequence(&mut keyboard, &[release(4, 4, 10)]);
    assert_eq!(keyboard.keymap().layer_state(), 1u32 << LAYER_BASE_JIS);

    // JIS -> US
    run_key_sequence(&mut keyboard, &LAYER_KEYS);
    assert_eq!(keyboard.keymap().layer_state(), 0);
    assert_eq!(keyboard.held_keycodes(), &[KeyCode::No; 6]);
}

#[test]
fn test_layer_key_alone() {
    let reports = ReportChannel::new();
    let mut keyboard = create_keyboard(&reports);
    // The combo timeout passes, MO(3) works on its own
    run_key_sequence(&mut keyboard, &[press(1, 5, 10), press(7, 1, 100), release(7, 1, 10)]);
    assert!(keyboard.keymap().is_layer_active(LAYER_MOUS));
    assert_eq!(keyboard_reports(&reports), [(0, keys([KeyCode::Copy])), (0, NO_KEYS)]);

    run_key_sequence(&mut keyboard, &[release(1, 5, 10)]);
    assert_eq!(keyboard.keymap().layer_state(), 0);
}
