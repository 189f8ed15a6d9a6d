pub mod common;

use qwasium::channel::ReportChannel;
use qwasium::keycode::KeyCode;
use qwasium::tap_dance::TapHoldMode;

use crate::common::*;

#[test]
fn test_momentary_layer() {
    key_sequence_test(
        TapHoldMode::Standard,
        &[
            press(1, 1, 10),
            press(0, 0, 10),
            release(0, 0, 10),
            release(1, 1, 10),
            press(0, 0, 10),
            release(0, 0, 10),
        ],
        &[
            (0, keys([KeyCode::Kc1])),
            (0, NO_KEYS),
            (0, keys([KeyCode::A])),
            (0, NO_KEYS),
        ],
    );
}

#[test]
fn test_release_on_pressed_layer() {
    key_sequence_test(
        TapHoldMode::Standard,
        &[press(1, 1, 10), press(0, 0, 10), release(1, 1, 10), release(0, 0, 10)],
        &[(0, keys([KeyCode::Kc1])), (0, NO_KEYS)],
    );
}

#[test]
fn test_toggle_layer() {
    let reports = ReportChannel::new();
    let mut keyboard = create_test_keyboard_with_config(behavior_config(TapHoldMode::Standard), &reports);

    run_key_sequence(&mut keyboard, &[press(1, 1, 10), press(1, 0, 10)]);
    // Toggled on release
    assert_eq!(keyboard.keymap().layer_state(), 0b010);
    run_key_sequence(&mut keyboard, &[release(1, 0, 10), release(1, 1, 10)]);
    assert_eq!(keyboard.keymap().layer_state(), 0b100);
    assert_eq!(keyboard.keymap().get_activated_layer(), 2);

    run_key_sequence(&mut keyboard, &[press(0, 0, 10), release(0, 0, 10)]);
    assert_eq!(keyboard_reports(&reports), [(0, keys([KeyCode::Kc2])), (0, NO_KEYS)]);

    // Layer 2 is transparent there, the toggle key of layer 1 turns it off again
    run_key_sequence(
        &mut keyboard,
        &[press(1, 1, 10), press(1, 0, 10), release(1, 0, 10), release(1, 1, 10)],
    );
    assert_eq!(keyboard.keymap().layer_state(), 0);
}

#[test]
fn test_unused_key() {
    key_sequence_test(
        TapHoldMode::Standard,
        &[press(1, 1, 10), press(1, 5, 10), release(1, 5, 10), release(1, 1, 10)],
        &[],
    );
}
