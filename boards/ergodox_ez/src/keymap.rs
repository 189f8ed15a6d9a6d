use qwasium::action::KeyAction;
use qwasium::keyboard_macros::{KeyboardMacro, MacroOperation, SWITCH_KEYBOARD, WORD_BACKWARD, WORD_FORWARD};
use qwasium::modifier::ModifierCombination;
use qwasium::{a, k, mcr, mo, mt, shifted};

use crate::layout::layout_ergodox_pretty;

pub const COL: usize = 6;
pub const ROW: usize = 14;
pub const NUM_LAYER: usize = 8;

// US
pub const LAYER_BASE: u8 = 0;
pub const LAYER_SYMB: u8 = 1;
pub const LAYER_NUM: u8 = 2;
pub const LAYER_MOUS: u8 = 3;
// JIS, toggled on top of the US layers
pub const LAYER_BASE_JIS: u8 = 4;
pub const LAYER_SYMB_JIS: u8 = 5;
pub const LAYER_NUM_JIS: u8 = 6;
pub const LAYER_MOUS_JIS: u8 = 7;

const LCTL: ModifierCombination = ModifierCombination::LCTRL;
const LGUI: ModifierCombination = ModifierCombination::LGUI;
const LALT: ModifierCombination = ModifierCombination::LALT;
const LSFT: ModifierCombination = ModifierCombination::LSHIFT;

pub const MACRO_SWITCH_KEYBOARD: u8 = 0;
pub const MACRO_WORD_FORWARD: u8 = 1;
pub const MACRO_WORD_BACKWARD: u8 = 2;
/// Types the firmware version, not on any key
pub const MACRO_VERSION: u8 = 3;

pub const VERSION: KeyboardMacro = KeyboardMacro::new(&[MacroOperation::Text(concat!(
    "ergodox_ez/qwasium @ ",
    env!("CARGO_PKG_VERSION")
))]);

pub const MACROS: [KeyboardMacro; 4] = [SWITCH_KEYBOARD, WORD_FORWARD, WORD_BACKWARD, VERSION];

#[rustfmt::skip]
pub const KEYMAP: [[[KeyAction; COL]; ROW]; NUM_LAYER] = [
    // LAYER_BASE
    layout_ergodox_pretty!(
        k!(F1),     k!(F2),       k!(F3),       k!(F4),       k!(F5),       k!(F6),     k!(Application),           k!(NumLock),                k!(F7),     k!(F8),         k!(F9),       k!(F10),      k!(F11),             k!(F12),
        k!(Escape), k!(Q),        k!(W),        k!(E),        k!(R),        k!(T),      mcr!(MACRO_SWITCH_KEYBOARD), mcr!(MACRO_SWITCH_KEYBOARD), k!(Y),   k!(U),          k!(I),        k!(O),        k!(P),               k!(Backspace),
        k!(Tab),    mt!(A, LCTL), mt!(S, LGUI), mt!(D, LALT), mt!(F, LSFT), k!(G),                                                             k!(H),      mt!(J, LSFT),   mt!(K, LALT), mt!(L, LGUI), mt!(Semicolon, LCTL), k!(Enter),
        k!(LShift), k!(Z),        k!(X),        k!(C),        k!(V),        k!(B),      k!(Backspace),             k!(Delete),                 k!(N),      k!(M),          k!(Comma),    k!(Dot),      k!(Slash),           k!(RShift),
        k!(LCtrl),  k!(LGui),     k!(LAlt),     mo!(LAYER_NUM), mo!(LAYER_SYMB),                                                                       mo!(LAYER_SYMB), mo!(LAYER_NUM), k!(RAlt), k!(LGui),         k!(RCtrl),
                                                                            k!(MediaPlayPause), k!(BrightnessUp), k!(AudioVolUp), k!(AudioMute),
                                                                                                k!(BrightnessDown), k!(AudioVolDown),
                                                              k!(Space), mo!(LAYER_NUM), mo!(LAYER_MOUS),         mo!(LAYER_MOUS), mo!(LAYER_NUM), k!(Space)
    ),
    // LAYER_SYMB
    layout_ergodox_pretty!(
        k!(F1),     k!(F2),            k!(F3),                k!(F4),            k!(F5),          k!(F6),                      k!(Application),             k!(NumLock),                 k!(F7),          k!(F8),                   k!(F9),                    k!(F10),          k!(F11),              k!(F12),
        k!(Escape), shifted!(Kc1),     shifted!(Kc2),         shifted!(Kc3),     shifted!(Kc4),   shifted!(Kc5),               mcr!(MACRO_SWITCH_KEYBOARD), mcr!(MACRO_SWITCH_KEYBOARD), shifted!(Kc6),   shifted!(Kc7),            shifted!(Kc8),             shifted!(Kc9),    shifted!(Kc0),        k!(Backspace),
        k!(Tab),    shifted!(Minus),   shifted!(Backslash),   shifted!(Comma),   shifted!(Dot),   mcr!(MACRO_SWITCH_KEYBOARD),                                                           k!(Delete),      shifted!(LeftBracket),    shifted!(RightBracket),    k!(LeftBracket),  k!(RightBracket),     k!(Enter),
        k!(LShift), k!(Equal),         k!(Backslash),         k!(Language2),     k!(International2), mcr!(MACRO_WORD_BACKWARD), k!(Backspace),             k!(Delete),                  a!(No),          k!(Grave),                shifted!(Grave),           shifted!(Quote),  k!(Quote),            k!(RShift),
        k!(LCtrl),  k!(LGui),          k!(LAlt),              mo!(LAYER_NUM),    mo!(LAYER_SYMB),                                                                                                         mo!(LAYER_SYMB),          mo!(LAYER_NUM),            k!(RAlt),         k!(LGui),             k!(RCtrl),
                                                                                                  k!(MediaPlayPause), k!(BrightnessUp), k!(AudioVolUp), k!(AudioMute),
                                                                                                                      k!(BrightnessDown), k!(AudioVolDown),
                                                                                 k!(Space), mo!(LAYER_NUM), mo!(LAYER_MOUS),         mo!(LAYER_MOUS), mo!(LAYER_NUM), k!(Space)
    ),
    // LAYER_NUM
    layout_ergodox_pretty!(
        k!(F1),     k!(F2),         k!(F3),                   k!(F4),         k!(F5),         k!(F6),     k!(Application),             k!(NumLock),                 k!(F7),     k!(F8),          k!(F9),        k!(F10),          k!(F11),            k!(F12),
        k!(Escape), a!(No),         mcr!(MACRO_WORD_FORWARD), a!(No),         k!(End),        a!(No),     mcr!(MACRO_SWITCH_KEYBOARD), mcr!(MACRO_SWITCH_KEYBOARD), k!(Home),   k!(PageDown),    k!(PageUp),    a!(No),           k!(Minus),          k!(Backspace),
        k!(Tab),    mt!(Kc1, LCTL), mt!(Kc2, LGUI),           mt!(Kc3, LALT), mt!(Kc4, LSFT), k!(Kc5),                                                              k!(Left),   mt!(Down, LSFT), mt!(Up, LALT), mt!(Right, LGUI), mt!(KpPlus, LCTL),  k!(Enter),
        k!(LShift), k!(Kc6),        k!(Kc7),                  k!(Kc8),        k!(Kc9),        k!(Kc0),    k!(Backspace),               k!(Delete),                  a!(No),     a!(No),          k!(Comma),     k!(Dot),          k!(Slash),          k!(RShift),
        k!(LCtrl),  k!(LGui),       k!(LAlt),                 mo!(LAYER_NUM), mo!(LAYER_SYMB),                                                                                  mo!(LAYER_SYMB), mo!(LAYER_NUM), k!(RAlt),       k!(LGui),           k!(RCtrl),
                                                                                              k!(MediaPlayPause), k!(BrightnessUp), k!(AudioVolUp), k!(AudioMute),
                                                                                                                  k!(BrightnessDown), k!(AudioVolDown),
                                                                              k!(Space), mo!(LAYER_NUM), mo!(LAYER_MOUS),         mo!(LAYER_MOUS), mo!(LAYER_NUM), k!(Space)
    ),
    // LAYER_MOUS
    layout_ergodox_pretty!(
        k!(F1),     k!(F2),   k!(F3),          k!(F4),         k!(F5),          k!(F6), k!(Application),     k!(NumLock), k!(F7),             k!(F8),           k!(F9),             k!(F10),             k!(F11), k!(F12),
        k!(Escape), a!(No),   a!(No),          a!(No),         a!(No),          a!(No), k!(WwwForward),      k!(Copy),    k!(MouseWheelLeft), k!(MouseWheelUp), k!(MouseWheelDown), k!(MouseWheelRight), a!(No),  k!(Backspace),
        k!(Tab),    a!(No),   k!(PrintScreen), k!(ScrollLock), k!(Pause),       a!(No),                                   k!(MouseLeft),      k!(MouseDown),    k!(MouseUp),        k!(MouseRight),      a!(No),  k!(Enter),
        k!(LShift), a!(No),   a!(No),          a!(No),         a!(No),          a!(No), k!(WwwBack),         k!(Paste),   a!(No),             a!(No),           a!(No),             a!(No),              a!(No),  k!(RShift),
        k!(LCtrl),  k!(LGui), k!(LAlt),        mo!(LAYER_NUM), mo!(LAYER_SYMB),                                                               mo!(LAYER_SYMB),  mo!(LAYER_NUM),     k!(RAlt),            k!(LGui), k!(RCtrl),
                                                                                k!(MouseBtn1), k!(MouseBtn2), k!(MouseBtn1), k!(MouseBtn2),
                                                                                               a!(No),        a!(No),
                                                               k!(Space), mo!(LAYER_NUM), mo!(LAYER_MOUS),    mo!(LAYER_MOUS), mo!(LAYER_NUM), k!(Space)
    ),
    // LAYER_BASE_JIS
    layout_ergodox_pretty!(
        k!(F1),     k!(F2),       k!(F3),       k!(F4),       k!(F5),       k!(F6),     k!(Application),  k!(NumLock), k!(F7),     k!(F8),         k!(F9),       k!(F10),      k!(F11),             k!(F12),
        k!(Escape), k!(Q),        k!(W),        k!(E),        k!(R),        k!(T),      k!(Grave),        k!(Grave),   k!(Y),      k!(U),          k!(I),        k!(O),        k!(P),               k!(Backspace),
        k!(Tab),    mt!(A, LCTL), mt!(S, LGUI), mt!(D, LALT), mt!(F, LSFT), k!(G),                                     k!(H),      mt!(J, LSFT),   mt!(K, LALT), mt!(L, LGUI), mt!(Semicolon, LCTL), k!(Enter),
        k!(LShift), k!(Z),        k!(X),        k!(C),        k!(V),        k!(B),      k!(Backspace),    k!(Delete),  k!(N),      k!(M),          k!(Comma),    k!(Dot),      k!(Slash),           k!(RShift),
        k!(LCtrl),  k!(LGui),     k!(LAlt),     mo!(LAYER_NUM_JIS), mo!(LAYER_SYMB_JIS),                                           mo!(LAYER_SYMB_JIS), mo!(LAYER_NUM_JIS), k!(RAlt), k!(LGui),   k!(RCtrl),
                                                                            k!(MediaPlayPause), k!(BrightnessUp), k!(AudioVolUp), k!(AudioMute),
                                                                                                k!(BrightnessDown), k!(AudioVolDown),
                                                              k!(Space), mo!(LAYER_NUM_JIS), mo!(LAYER_MOUS_JIS),         mo!(LAYER_MOUS_JIS), mo!(LAYER_NUM_JIS), k!(Space)
    ),
    // LAYER_SYMB_JIS
    layout_ergodox_pretty!(
        k!(F1),     k!(F2),            k!(F3),                k!(F4),            k!(F5),          k!(F6),                      k!(Application), k!(NumLock), k!(F7),          k!(F8),                   k!(F9),                    k!(F10),          k!(F11),              k!(F12),
        k!(Escape), shifted!(Kc1),     shifted!(Kc2),         shifted!(Kc3),     shifted!(Kc4),   shifted!(Kc5),               k!(Grave),       k!(Grave),   shifted!(Kc6),   shifted!(Kc7),            shifted!(Kc8),             shifted!(Kc9),    shifted!(Kc0),        k!(Backspace),
        k!(Tab),    shifted!(Minus),   shifted!(Backslash),   shifted!(Comma),   shifted!(Dot),   k!(Grave),                                                 k!(Delete),      shifted!(LeftBracket),    shifted!(RightBracket),    k!(LeftBracket),  k!(RightBracket),     k!(Enter),
        k!(LShift), k!(Equal),         k!(Backslash),         k!(Language2),     k!(International2), mcr!(MACRO_WORD_BACKWARD), k!(Backspace), k!(Delete),  a!(No),          k!(Grave),                shifted!(Grave),           shifted!(Quote),  k!(Quote),            k!(RShift),
        k!(LCtrl),  k!(LGui),          k!(LAlt),              mo!(LAYER_NUM_JIS), mo!(LAYER_SYMB_JIS),                                                                          mo!(LAYER_SYMB_JIS),      mo!(LAYER_NUM_JIS),        k!(RAlt),         k!(LGui),             k!(RCtrl),
                                                                                                  k!(MediaPlayPause), k!(BrightnessUp), k!(AudioVolUp), k!(AudioMute),
                                                                                                                      k!(BrightnessDown), k!(AudioVolDown),
                                                                                 k!(Space), mo!(LAYER_NUM_JIS), mo!(LAYER_MOUS_JIS),         mo!(LAYER_MOUS_JIS), mo!(LAYER_NUM_JIS), k!(Space)
    ),
    // LAYER_NUM_JIS
    layout_ergodox_pretty!(
        k!(F1),     k!(F2),         k!(F3),                   k!(F4),         k!(F5),         k!(F6),     k!(Application),             k!(NumLock),                 k!(F7),     k!(F8),          k!(F9),        k!(F10),          k!(F11),            k!(F12),
        k!(Escape), a!(No),         mcr!(MACRO_WORD_FORWARD), a!(No),         k!(End),        a!(No),     mcr!(MACRO_SWITCH_KEYBOARD), mcr!(MACRO_SWITCH_KEYBOARD), k!(Home),   k!(PageDown),    k!(PageUp),    a!(No),           k!(Minus),          k!(Backspace),
        k!(Tab),    mt!(Kc1, LCTL), mt!(Kc2, LGUI),           mt!(Kc3, LALT), mt!(Kc4, LSFT), k!(Kc5),                                                              k!(Left),   mt!(Down, LSFT), mt!(Up, LALT), mt!(Right, LGUI), mt!(KpPlus, LCTL),  k!(Enter),
        k!(LShift), k!(Kc6),        k!(Kc7),                  k!(Kc8),        k!(Kc9),        k!(Kc0),    k!(Backspace),               k!(Delete),                  a!(No),     a!(No),          k!(Comma),     k!(Dot),          k!(Slash),          k!(RShift),
        k!(LCtrl),  k!(LGui),       k!(LAlt),                 mo!(LAYER_NUM_JIS), mo!(LAYER_SYMB_JIS),                                                                      mo!(LAYER_SYMB_JIS), mo!(LAYER_NUM_JIS), k!(RAlt), k!(LGui),         k!(RCtrl),
                                                                                              k!(MediaPlayPause), k!(BrightnessUp), k!(AudioVolUp), k!(AudioMute),
                                                                                                                  k!(BrightnessDown), k!(AudioVolDown),
                                                                              k!(Space), mo!(LAYER_NUM_JIS), mo!(LAYER_MOUS_JIS),         mo!(LAYER_MOUS_JIS), mo!(LAYER_NUM_JIS), k!(Space)
    ),
    // LAYER_MOUS_JIS
    layout_ergodox_pretty!(
        k!(F1),     k!(F2),   k!(F3),          k!(F4),         k!(F5),          k!(F6), k!(Application),     k!(NumLock), k!(F7),             k!(F8),           k!(F9),             k!(F10),             k!(F11), k!(F12),
        k!(Escape), a!(No),   a!(No),          a!(No),         a!(No),          a!(No), k!(WwwForward),      k!(Copy),    k!(MouseWheelLeft), k!(MouseWheelUp), k!(MouseWheelDown), k!(MouseWheelRight), a!(No),  k!(Backspace),
        k!(Tab),    a!(No),   k!(PrintScreen), k!(ScrollLock), k!(Pause),       a!(No),                                   k!(MouseLeft),      k!(MouseDown),    k!(MouseUp),        k!(MouseRight),      a!(No),  k!(Enter),
        k!(LShift), a!(No),   a!(No),          a!(No),         a!(No),          a!(No), k!(WwwBack),         k!(Paste),   a!(No),             a!(No),           a!(No),             a!(No),              a!(No),  k!(RShift),
        k!(LCtrl),  k!(LGui), k!(LAlt),        mo!(LAYER_NUM_JIS), mo!(LAYER_SYMB_JIS),                                                       mo!(LAYER_SYMB_JIS), mo!(LAYER_NUM_JIS), k!(RAlt),        k!(LGui), k!(RCtrl),
                                                                                k!(MouseBtn1), k!(MouseBtn2), k!(MouseBtn1), k!(MouseBtn2),
                                                                                               a!(No),        a!(No),
                                                               k!(Space), mo!(LAYER_NUM_JIS), mo!(LAYER_MOUS_JIS),    mo!(LAYER_MOUS_JIS), mo!(LAYER_NUM_JIS), k!(Space)
    ),
];
