//! Fixed key sequences triggered by a single key.

use crate::keycode::KeyCode;

/// Max number of macros
pub const MACRO_MAX_NUM: usize = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum MacroOperation {
    /// Press and release the key
    Tap(KeyCode),
    /// Press the key
    Press(KeyCode),
    /// Release the key
    Release(KeyCode),
    /// Type the ascii text, with shift where a character needs it
    Text(&'static str),
}

/// A macro and whether the key that triggered it is processed normally afterwards.
#[derive(Debug, Clone, Copy)]
pub struct KeyboardMacro {
    pub operations: &'static [MacroOperation],
    pub passthrough: bool,
}

impl KeyboardMacro {
    /// A macro which consumes its trigger key
    pub const fn new(operations: &'static [MacroOperation]) -> Self {
        Self {
            operations,
            passthrough: false,
        }
    }

    /// A macro after which the trigger key goes on to the default processing
    pub const fn with_passthrough(operations: &'static [MacroOperation]) -> Self {
        Self {
            operations,
            passthrough: true,
        }
    }
}

/// Switch the input source: Gui+Space, then two taps of the conversion key
pub const SWITCH_KEYBOARD: KeyboardMacro = KeyboardMacro::with_passthrough(&[
    MacroOperation::Press(KeyCode::LGui),
    MacroOperation::Press(KeyCode::Space),
    MacroOperation::Release(KeyCode::LGui),
    MacroOperation::Release(KeyCode::Space),
    MacroOperation::Tap(KeyCode::International2),
    MacroOperation::Tap(KeyCode::International2),
]);

/// Jump one word to the right
pub const WORD_FORWARD: KeyboardMacro = KeyboardMacro::with_passthrough(&[
    MacroOperation::Press(KeyCode::LCtrl),
    MacroOperation::Press(KeyCode::RCtrl),
    MacroOperation::Tap(KeyCode::Right),
    MacroOperation::Release(KeyCode::LCtrl),
    MacroOperation::Release(KeyCode::RCtrl),
]);

/// Jump one word to the left
pub const WORD_BACKWARD: KeyboardMacro = KeyboardMacro::with_passthrough(&[
    MacroOperation::Press(KeyCode::LCtrl),
    MacroOperation::Press(KeyCode::RCtrl),
    MacroOperation::Tap(KeyCode::Left),
    MacroOperation::Release(KeyCode::LCtrl),
    MacroOperation::Release(KeyCode::RCtrl),
]);
