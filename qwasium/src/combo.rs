use heapless::Vec;

use crate::action::KeyAction;
use crate::event::{KeyEvent, KeyPos};

// Max number of combos
pub const COMBO_MAX_NUM: usize = 8;
// Max number of trigger keys of a combo
pub const COMBO_MAX_LENGTH: usize = 4;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ComboState {
    /// Waiting for the trigger keys
    Idle,
    /// Every trigger key is down, the output is about to fire
    AllPressed,
    /// The output is active until a trigger key goes up
    Fired,
}

/// Pressing every key of `actions` together acts as `output`.
#[derive(Clone, Debug)]
pub struct Combo {
    pub(crate) actions: Vec<KeyAction, COMBO_MAX_LENGTH>,
    pub(crate) output: KeyAction,
    /// Only match on this layer
    pub(crate) layer: Option<u8>,
    /// Where each trigger is held down, indexed like `actions`
    held: [Option<KeyPos>; COMBO_MAX_LENGTH],
    state: ComboState,
}

impl Default for Combo {
    fn default() -> Self {
        Self::empty()
    }
}

impl Combo {
    pub fn new<I: IntoIterator<Item = KeyAction>>(actions: I, output: KeyAction, layer: Option<u8>) -> Self {
        Self {
            actions: Vec::from_iter(actions),
            output,
            layer,
            held: [None; COMBO_MAX_LENGTH],
            state: ComboState::Idle,
        }
    }

    pub fn empty() -> Self {
        Self::new(Vec::<KeyAction, COMBO_MAX_LENGTH>::new(), KeyAction::No, None)
    }

    pub fn state(&self) -> ComboState {
        self.state
    }

    pub fn output(&self) -> KeyAction {
        self.output
    }

    /// Record a key press. Returns `true` if the key is one of the triggers.
    pub(crate) fn update(&mut self, key_action: KeyAction, key_event: KeyEvent, active_layer: u8) -> bool {
        if !key_event.pressed || key_action == KeyAction::No {
            return false;
        }

        if let Some(layer) = self.layer {
            if layer != active_layer {
                return false;
            }
        }

        let Some(i) = self.actions.iter().position(|&a| a == key_action) else {
            return false;
        };
        self.held[i] = Some(key_event.pos);
        if self.state == ComboState::Idle && self.all_pressed() {
            self.state = ComboState::AllPressed;
        }
        true
    }

    fn all_pressed(&self) -> bool {
        !self.actions.is_empty() && self.held[..self.actions.len()].iter().all(Option::is_some)
    }

    /// Fire the combo, returns the output to press
    pub(crate) fn fire(&mut self) -> KeyAction {
        self.state = ComboState::Fired;
        self.output
    }

    pub(crate) fn holds(&self, pos: KeyPos) -> bool {
        self.held.contains(&Some(pos))
    }

    /// Positions of the triggers currently held
    pub(crate) fn held_positions(&self) -> impl Iterator<Item = KeyPos> + '_ {
        self.held.iter().flatten().copied()
    }

    /// A trigger key went up. Returns `true` if the output was active and must be released.
    ///
    /// The other triggers stay held, pressing the released one again fires the combo again.
    pub(crate) fn release(&mut self, pos: KeyPos) -> bool {
        if !self.holds(pos) {
            return false;
        }
        self.forget_position(pos);
        let fired = self.state == ComboState::Fired;
        self.state = ComboState::Idle;
        fired
    }

    /// Hand a trigger back to normal key processing
    pub(crate) fn forget(&mut self, pos: KeyPos) {
        if self.state == ComboState::Fired {
            return;
        }
        self.forget_position(pos);
        self.state = ComboState::Idle;
    }

    fn forget_position(&mut self, pos: KeyPos) {
        for slot in self.held.iter_mut() {
            if *slot == Some(pos) {
                *slot = None;
            }
        }
    }
}
