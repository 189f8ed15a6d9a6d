//! Custom handling of every key event before the default processing.

use super::Keyboard;
use super::tap_dance::DanceSlot;
use crate::action::{Action, KeyAction};
use crate::event::KeyEvent;
use crate::keyboard_macros::MacroOperation;
use crate::keycode::{KeyCode, from_ascii};
use crate::modifier::HidModifiers;

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    /// Returns `false` when the default processing of the key must be skipped.
    ///
    /// - a tap-hold key released before its dance finished still sends its tap
    /// - a macro key runs the macro on press, and continues only if the macro passes through
    pub(crate) fn process_record(&mut self, action: KeyAction, event: KeyEvent) -> bool {
        match action {
            KeyAction::TapDance(idx) if !event.pressed => {
                self.tap_unfinished_dance(DanceSlot::TapDance(idx as usize));
                true
            }
            KeyAction::TapHold(_, _) if !event.pressed => {
                if let Some(i) = self.mod_tap_at(event.pos) {
                    self.tap_unfinished_dance(DanceSlot::ModTap(i));
                }
                true
            }
            KeyAction::Single(Action::TriggerMacro(idx)) if event.pressed => self.run_macro(idx),
            _ => true,
        }
    }

    fn tap_unfinished_dance(&mut self, slot: DanceSlot) {
        let Some(dance) = self.dance(slot) else {
            return;
        };
        if dance.state.count == 0 || dance.state.finished {
            return;
        }
        let tap = dance.binding.tap;
        let last_press = dance.last_press;
        if let Some(event) = last_press {
            debug!("Released before the tapping term, tap {:?}", tap);
            self.process_action(tap, event);
            self.process_action(tap, event.with_pressed(false));
        }
    }

    /// Send the macro's key sequence, returns whether the trigger key passes through.
    fn run_macro(&mut self, idx: u8) -> bool {
        let Some(keyboard_macro) = self.behavior.keyboard_macros.macros.get(idx as usize).copied() else {
            warn!("Macro {} is not defined", idx);
            return true;
        };
        debug!("Run macro {}", idx);
        for operation in keyboard_macro.operations {
            match *operation {
                MacroOperation::Press(key) => {
                    self.register_key(key);
                    self.send_keyboard_report();
                }
                MacroOperation::Release(key) => {
                    self.unregister_key(key);
                    self.send_keyboard_report();
                }
                MacroOperation::Tap(key) => {
                    self.register_key(key);
                    self.send_keyboard_report();
                    self.unregister_key(key);
                    self.send_keyboard_report();
                }
                MacroOperation::Text(text) => self.type_text(text),
            }
        }
        keyboard_macro.passthrough
    }

    /// Type ascii text, the keys and modifiers held by the user are restored afterwards.
    fn type_text(&mut self, text: &str) {
        let held_modifiers = self.held_modifiers;
        let held_keycodes = self.held_keycodes;
        for ascii in text.bytes() {
            let (key, shifted) = from_ascii(ascii);
            if key == KeyCode::No {
                warn!("Can't type {:#x}, skipped", ascii);
                continue;
            }
            self.held_modifiers = if shifted {
                KeyCode::LShift.to_hid_modifiers()
            } else {
                HidModifiers::new()
            };
            self.register_keycode(key);
            self.send_keyboard_report();
            self.unregister_keycode(key);
            self.send_keyboard_report();
        }
        self.held_modifiers = held_modifiers;
        self.held_keycodes = held_keycodes;
        self.send_keyboard_report();
    }
}
