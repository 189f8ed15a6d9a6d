use embassy_time::Duration;
use embedded_hal::digital::OutputPin;
use heapless::Vec;

use crate::combo::{COMBO_MAX_NUM, Combo};
use crate::keyboard_macros::{KeyboardMacro, MACRO_MAX_NUM};
use crate::tap_dance::{TAP_DANCE_MAX_NUM, TapHold, TapHoldMode};

/// Config for configurable action behavior
#[derive(Clone, Debug, Default)]
pub struct BehaviorConfig {
    pub tap_dance: TapDancesConfig,
    pub combo: CombosConfig,
    pub keyboard_macros: MacrosConfig,
    pub mouse: MouseKeyConfig,
}

/// Config for tap dances and mod-taps
#[derive(Clone, Debug)]
pub struct TapDancesConfig {
    /// Bindings referred to by `KeyAction::TapDance(index)`
    pub tap_dances: Vec<TapHold, TAP_DANCE_MAX_NUM>,
    /// Time after the last press at which a pending dance finishes
    pub tapping_term: Duration,
    pub mode: TapHoldMode,
}

impl Default for TapDancesConfig {
    fn default() -> Self {
        Self {
            tap_dances: Vec::new(),
            tapping_term: Duration::from_millis(200),
            mode: TapHoldMode::Standard,
        }
    }
}

/// Config for combo behavior
#[derive(Clone, Debug)]
pub struct CombosConfig {
    pub combos: Vec<Combo, COMBO_MAX_NUM>,
    pub timeout: Duration,
}

impl Default for CombosConfig {
    fn default() -> Self {
        Self {
            timeout: Duration::from_millis(50),
            combos: Vec::new(),
        }
    }
}

/// Macros referred to by `Action::TriggerMacro(index)`
#[derive(Clone, Debug, Default)]
pub struct MacrosConfig {
    pub macros: Vec<KeyboardMacro, MACRO_MAX_NUM>,
}

/// Config for mouse keys
///
/// A held movement or wheel key repeats its report, speeding up from `*_delta` to
/// `*_delta * *_max_speed` over `*_time_to_max` repeats.
#[derive(Clone, Copy, Debug)]
pub struct MouseKeyConfig {
    pub move_delta: u8,
    pub max_speed: u8,
    pub time_to_max: u8,
    /// Upper bound of a cursor step
    pub move_max: u8,
    pub wheel_delta: u8,
    pub wheel_max_speed: u8,
    pub wheel_time_to_max: u8,
    pub wheel_max: u8,
    /// Time between the press and the first repeat
    pub delay: Duration,
    /// Time between two cursor reports
    pub interval: Duration,
    pub wheel_delay: Duration,
    /// Time between two wheel reports
    pub wheel_interval: Duration,
}

impl Default for MouseKeyConfig {
    fn default() -> Self {
        Self {
            move_delta: 8,
            max_speed: 10,
            time_to_max: 30,
            move_max: 127,
            wheel_delta: 1,
            wheel_max_speed: 8,
            wheel_time_to_max: 40,
            wheel_max: 127,
            delay: Duration::from_millis(10),
            interval: Duration::from_millis(20),
            wheel_delay: Duration::from_millis(10),
            wheel_interval: Duration::from_millis(80),
        }
    }
}

/// Config for lights
pub struct LightConfig<P: OutputPin> {
    pub capslock: Option<LightPinConfig<P>>,
    pub scrolllock: Option<LightPinConfig<P>>,
    pub numslock: Option<LightPinConfig<P>>,
}

pub struct LightPinConfig<P: OutputPin> {
    pub pin: P,
    pub low_active: bool,
}

impl<P: OutputPin> Default for LightConfig<P> {
    fn default() -> Self {
        Self {
            capslock: None,
            scrolllock: None,
            numslock: None,
        }
    }
}
