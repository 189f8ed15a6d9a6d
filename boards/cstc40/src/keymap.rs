use qwasium::action::KeyAction;
use qwasium::keyboard_macros::{KeyboardMacro, SWITCH_KEYBOARD, WORD_BACKWARD, WORD_FORWARD};
use qwasium::modifier::ModifierCombination;
use qwasium::tap_dance::TapHold;
use qwasium::{a, k, layer, mcr, mo, mt, shifted, shifted_tap_hold, td};

pub const COL: usize = 12;
pub const ROW: usize = 4;
pub const NUM_LAYER: usize = 4;

/// Default layer
pub const LAYER_BASE: u8 = 0;
/// Symbols
pub const LAYER_SYMB: u8 = 1;
/// Numbers and navigation
pub const LAYER_NUM: u8 = 2;
/// Mouse and less used keys, reached with the `{MO(1), MO(2)}` combo
pub const LAYER_MOUS: u8 = 3;

const LCTL: ModifierCombination = ModifierCombination::LCTRL;
const LGUI: ModifierCombination = ModifierCombination::LGUI;
const LALT: ModifierCombination = ModifierCombination::LALT;
const LSFT: ModifierCombination = ModifierCombination::LSHIFT;

// Tap dances of the symbol layer: a shifted key on tap, a modifier on hold
pub const TD_UNDS_CTL: u8 = 0;
pub const TD_PIPE_GUI: u8 = 1;
pub const TD_LABK_ALT: u8 = 2;
pub const TD_RABK_SFT: u8 = 3;
pub const TD_LCBR_SFT: u8 = 4;
pub const TD_RCBR_ALT: u8 = 5;

pub const TAP_DANCES: [TapHold; 6] = [
    shifted_tap_hold!(Minus, LCTL),
    shifted_tap_hold!(Backslash, LGUI),
    shifted_tap_hold!(Comma, LALT),
    shifted_tap_hold!(Dot, LSFT),
    shifted_tap_hold!(LeftBracket, LSFT),
    shifted_tap_hold!(RightBracket, LALT),
];

pub const MACRO_SWITCH_KEYBOARD: u8 = 0;
pub const MACRO_WORD_FORWARD: u8 = 1;
pub const MACRO_WORD_BACKWARD: u8 = 2;

pub const MACROS: [KeyboardMacro; 3] = [SWITCH_KEYBOARD, WORD_FORWARD, WORD_BACKWARD];

#[rustfmt::skip]
pub const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // LAYER_BASE
    layer!([
        [k!(Escape), k!(Q), k!(W), k!(E), k!(R), k!(T), k!(Y), k!(U), k!(I), k!(O), k!(P), k!(Backspace)],
        [k!(Tab), mt!(A, LCTL), mt!(S, LGUI), mt!(D, LALT), mt!(F, LSFT), k!(G), k!(H), mt!(J, LSFT), mt!(K, LALT), mt!(L, LGUI), mt!(Semicolon, LCTL), k!(Enter)],
        [k!(LShift), k!(Z), k!(X), k!(C), k!(V), k!(B), k!(N), k!(M), k!(Comma), k!(Dot), k!(Slash), k!(RShift)],
        [k!(LCtrl), k!(LGui), k!(LAlt), mo!(LAYER_NUM), mo!(LAYER_SYMB), k!(Space), a!(No), mo!(LAYER_SYMB), mo!(LAYER_NUM), k!(RAlt), k!(LGui), k!(RCtrl)]
    ]),
    // LAYER_SYMB
    layer!([
        [k!(Escape), shifted!(Kc1), shifted!(Kc2), shifted!(Kc3), shifted!(Kc4), shifted!(Kc5), shifted!(Kc6), shifted!(Kc7), shifted!(Kc8), shifted!(Kc9), shifted!(Kc0), k!(Backspace)],
        [k!(Tab), td!(TD_UNDS_CTL), td!(TD_PIPE_GUI), td!(TD_LABK_ALT), td!(TD_RABK_SFT), mcr!(MACRO_SWITCH_KEYBOARD), k!(Delete), td!(TD_LCBR_SFT), td!(TD_RCBR_ALT), mt!(LeftBracket, LGUI), mt!(RightBracket, LCTL), k!(Enter)],
        [k!(LShift), k!(Equal), k!(Backslash), k!(Language2), k!(International2), mcr!(MACRO_WORD_BACKWARD), a!(No), k!(Grave), shifted!(Grave), shifted!(Quote), k!(Quote), k!(RShift)],
        [k!(LCtrl), k!(LGui), k!(LAlt), mo!(LAYER_NUM), mo!(LAYER_SYMB), k!(Space), a!(No), mo!(LAYER_SYMB), mo!(LAYER_NUM), k!(RAlt), k!(LGui), k!(RCtrl)]
    ]),
    // LAYER_NUM
    layer!([
        [k!(Escape), a!(No), mcr!(MACRO_WORD_FORWARD), a!(No), k!(End), a!(No), k!(Home), a!(No), a!(No), a!(No), k!(Minus), k!(Backspace)],
        [k!(Tab), mt!(Kc1, LCTL), mt!(Kc2, LGUI), mt!(Kc3, LALT), mt!(Kc4, LSFT), k!(Kc5), k!(Left), mt!(Down, LSFT), mt!(Up, LALT), mt!(Right, LGUI), mt!(KpPlus, LCTL), k!(Enter)],
        [k!(LShift), k!(Kc6), k!(Kc7), k!(Kc8), k!(Kc9), k!(Kc0), a!(No), a!(No), k!(Comma), k!(Dot), k!(Slash), k!(RShift)],
        [k!(LCtrl), k!(LGui), k!(LAlt), mo!(LAYER_NUM), mo!(LAYER_SYMB), k!(Space), a!(No), mo!(LAYER_SYMB), mo!(LAYER_NUM), k!(RAlt), k!(LGui), k!(RCtrl)]
    ]),
    // LAYER_MOUS
    layer!([
        [k!(F1), k!(F2), k!(F3), k!(F4), k!(F5), k!(F6), k!(F7), k!(F8), k!(F9), k!(F10), k!(F11), k!(F12)],
        [k!(Tab), a!(No), k!(PrintScreen), k!(MouseBtn1), k!(MouseBtn2), a!(No), k!(MouseLeft), k!(MouseDown), k!(MouseUp), k!(MouseRight), a!(No), k!(Enter)],
        [k!(LShift), a!(No), a!(No), a!(No), a!(No), a!(No), k!(MouseWheelLeft), k!(MouseWheelUp), k!(MouseWheelDown), k!(MouseWheelRight), a!(No), k!(RShift)],
        [k!(LCtrl), k!(LGui), k!(LAlt), mo!(LAYER_NUM), mo!(LAYER_SYMB), k!(Space), a!(No), mo!(LAYER_SYMB), mo!(LAYER_NUM), k!(RAlt), k!(LGui), k!(RCtrl)]
    ]),
];
