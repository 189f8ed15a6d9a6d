//! Keyboard actions.
//!
//! - [`KeyAction`] is what a position in the keymap does
//! - [`Action`] is a single operation a key sends or executes

use crate::keycode::KeyCode;
use crate::modifier::ModifierCombination;

/// A KeyAction is stored in each cell of the keymap.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum KeyAction {
    /// No action.
    No,
    /// Use the action of the next active layer below.
    Transparent,
    /// A single action, active while the key is held.
    Single(Action),
    /// Mod-tap: the first action when tapped, the second when held.
    TapHold(Action, Action),
    /// Tap dance, the index of a configured tap-hold binding.
    TapDance(u8),
}

/// A single operation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Action {
    /// No operation.
    No,
    /// A keycode, sent in the report matching its usage page.
    Key(KeyCode),
    /// One or more modifiers.
    Modifier(ModifierCombination),
    /// A keycode sent together with modifiers, `LSFT(KC_1)` for example.
    KeyWithModifier(KeyCode, ModifierCombination),
    /// Activate the layer while held.
    LayerOn(u8),
    /// Toggle the layer when released.
    LayerToggle(u8),
    /// Run the macro with the given index.
    TriggerMacro(u8),
}
