//! qwasium keymap for the ergodox ez.
//!
//! The layers follow the cstc40 keymap. Layers 0-3 are meant for a host set to a US layout,
//! layers 4-7 repeat them for a JIS host. Holding the three layer keys of a thumb cluster
//! together switches between the two sets.
//!
//! The three LEDs of the right half show num lock, caps lock and scroll lock.
#![cfg_attr(not(test), no_std)]

mod layout;
pub mod keymap;

use embedded_hal::digital::OutputPin;
use embedded_hal_async::delay::DelayNs;
use heapless::Vec;
use qwasium::channel::ReportChannel;
use qwasium::combo::{COMBO_MAX_NUM, Combo};
use qwasium::config::{BehaviorConfig, CombosConfig, LightConfig, LightPinConfig, MacrosConfig, TapDancesConfig};
use qwasium::keyboard::Keyboard;
use qwasium::keyboard_macros::MACRO_MAX_NUM;
use qwasium::led_indicator::LedIndicator;
use qwasium::light::LightService;
use qwasium::tap_dance::TapHoldMode;
use qwasium::{mo, tg};

pub use crate::keymap::{COL, KEYMAP, NUM_LAYER, ROW};
use crate::keymap::{
    LAYER_BASE_JIS, LAYER_MOUS, LAYER_MOUS_JIS, LAYER_NUM, LAYER_NUM_JIS, LAYER_SYMB, LAYER_SYMB_JIS, MACROS,
};

const _: () = assert!(MACROS.len() <= MACRO_MAX_NUM);

/// Layer set switches. Both toggle the JIS base layer: on from the US layers, off from the JIS ones.
pub fn get_combos() -> Vec<Combo, COMBO_MAX_NUM> {
    Vec::from_iter([
        Combo::new(
            [mo!(LAYER_SYMB), mo!(LAYER_NUM), mo!(LAYER_MOUS)],
            tg!(LAYER_BASE_JIS),
            None,
        ),
        Combo::new(
            [mo!(LAYER_SYMB_JIS), mo!(LAYER_NUM_JIS), mo!(LAYER_MOUS_JIS)],
            tg!(LAYER_BASE_JIS),
            None,
        ),
    ])
}

pub fn get_behavior_config() -> BehaviorConfig {
    BehaviorConfig {
        tap_dance: TapDancesConfig {
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

/// The ergodox ez keyboard, sending its reports to `reports`
pub fn create_keyboard(reports: &ReportChannel) -> Keyboard<'_, ROW, COL, NUM_LAYER> {
    Keyboard::new(&KEYMAP, get_behavior_config(), reports)
}

/// Lock indicators on the right half, from top to bottom: num lock, caps lock, scroll lock
pub fn create_light_service<P: OutputPin>(led_1: P, led_2: P, led_3: P) -> LightService<P> {
    let led = |pin| {
        Some(LightPinConfig {
            pin,
            low_active: false,
        })
    };
    LightService::from_config(LightConfig {
        numslock: led(led_1),
        capslock: led(led_2),
        scrolllock: led(led_3),
    })
}

/// Startup blink, every LED is off when it returns
pub async fn init_lights<P: OutputPin, D: DelayNs>(light: &mut LightService<P>, delay: &mut D) {
    light.blink_all(delay).await;
    light.set_leds(LedIndicator::new());
}
