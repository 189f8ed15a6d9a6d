//! qwasium keymap for the kprepublic cstc40, a 40% ortholinear board in the planck mit layout.
//!
//! Four layers: base with home row mod-taps, symbols, numbers with navigation, and a mouse
//! layer reached by holding both layer keys of a thumb cluster.
#![cfg_attr(not(test), no_std)]

pub mod keymap;

use heapless::Vec;
use qwasium::channel::ReportChannel;
use qwasium::combo::{COMBO_MAX_NUM, Combo};
use qwasium::config::{BehaviorConfig, CombosConfig, MacrosConfig, TapDancesConfig};
use qwasium::keyboard::Keyboard;
use qwasium::keymap::check_tap_dances;
use qwasium::keyboard_macros::MACRO_MAX_NUM;
use qwasium::mo;
use qwasium::tap_dance::{TAP_DANCE_MAX_NUM, TapHoldMode};

pub use crate::keymap::{COL, KEYMAP, NUM_LAYER, ROW};
use crate::keymap::{LAYER_MOUS, LAYER_NUM, LAYER_SYMB, MACROS, TAP_DANCES};

const _: () = assert!(TAP_DANCES.len() <= TAP_DANCE_MAX_NUM);
const _: () = assert!(MACROS.len() <= MACRO_MAX_NUM);
const _: () = assert!(check_tap_dances(&KEYMAP, TAP_DANCES.len()));

/// Both layer keys held together open the mouse layer
pub fn get_combos() -> Vec<Combo, COMBO_MAX_NUM> {
    Vec::from_iter([Combo::new(
        [mo!(LAYER_SYMB), mo!(LAYER_NUM)],
        mo!(LAYER_MOUS),
        None,
    )])
}

pub fn get_behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        tap_dance: TapDancesConfig {
            tap_dances: Vec::from_iter(TAP_DANCES),
            mode: TapHoldMode::PermissiveHold,
            ..Default::default()
        },
        combo: CombosConfig {
            combos: get_combos(),
            ..Default::default()
        },
        keyboard_macros: MacrosConfig {
            macros: Vec::from_iter(MACROS),
        },
    }
}

/// The cstc40 keyboard, sending its reports to `reports`
pub fn create_keyboard(reports: &ReportChannel) -> Keyboard<'_, ROW, COL, NUM_LAYER> {
    Keyboard::new(&KEYMAP, get_behavior_config(), reports)
}
