//! Combo stage, between the keymap lookup and the key processing.

use embassy_time::Instant;
use heapless::Vec;

use super::Keyboard;
use crate::action::KeyAction;
use crate::combo::{COMBO_MAX_LENGTH, ComboState};
use crate::event::{KeyEvent, KeyPos};

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    /// Returns `true` if the event was taken by a combo.
    ///
    /// Presses of trigger keys are buffered until a combo fires, the combo timeout passes,
    /// another key is pressed or a buffered key is released. Buffered keys which didn't make
    /// up a combo are processed as normal keys.
    pub(super) fn process_combo(&mut self, action: KeyAction, event: KeyEvent) -> bool {
        if !event.pressed {
            return self.release_combo_key(action, event);
        }

        let active_layer = self.keymap.get_activated_layer();
        let mut is_trigger = false;
        for combo in self.combos.iter_mut() {
            is_trigger |= combo.update(action, event, active_layer);
        }
        if !is_trigger {
            if self.combo_buffer.is_empty() {
                return false;
            }
            self.flush_combo_buffer();
            // A flushed layer key changes what this key does
            let action = self.keymap.get_action_with_layer_cache(event);
            self.process_key(action, event);
            return true;
        }

        if self.combo_buffer.is_full() {
            self.flush_combo_buffer();
        }
        if self.combo_buffer.push_back((action, event)).is_err() {
            warn!("Combo buffer is full");
        }

        if let Some(idx) = self.combos.iter().position(|c| c.state() == ComboState::AllPressed) {
            let output = self.combos[idx].fire();
            let consumed: Vec<KeyPos, COMBO_MAX_LENGTH> = self.combos[idx].held_positions().collect();
            debug!("Combo {} fired: {:?}", idx, output);

            for (i, combo) in self.combos.iter_mut().enumerate() {
                if i != idx {
                    consumed.iter().for_each(|&pos| combo.forget(pos));
                }
            }
            // Buffered keys which aren't part of the combo go first
            let mut rest: Vec<(KeyAction, KeyEvent), COMBO_MAX_LENGTH> = Vec::new();
            while let Some((a, e)) = self.combo_buffer.pop_front() {
                if !consumed.contains(&e.pos) {
                    rest.push((a, e)).ok();
                }
            }
            for (a, e) in rest {
                self.forget_combo_key(e.pos);
                self.process_key(a, e);
            }
            self.process_key(output, event);
        }
        true
    }

    fn release_combo_key(&mut self, action: KeyAction, event: KeyEvent) -> bool {
        if self.combo_buffer.iter().any(|(_, e)| e.pos == event.pos) {
            // Released before a combo could fire, it's a normal key
            self.flush_combo_buffer();
            return false;
        }

        let mut taken = false;
        for i in 0..self.combos.len() {
            if !self.combos[i].holds(event.pos) {
                continue;
            }
            taken = true;
            if self.combos[i].release(event.pos) {
                let output = self.combos[i].output();
                debug!("Combo {} released by {:?}", i, action);
                self.process_key(output, event);
            }
        }
        taken
    }

    /// Process the buffered keys as normal keys
    pub(super) fn flush_combo_buffer(&mut self) {
        while let Some((action, event)) = self.combo_buffer.pop_front() {
            self.forget_combo_key(event.pos);
            self.process_key(action, event);
        }
    }

    fn forget_combo_key(&mut self, pos: KeyPos) {
        for combo in self.combos.iter_mut() {
            combo.forget(pos);
        }
    }

    pub(super) fn combo_deadline(&self) -> Option<Instant> {
        self.combo_buffer
            .front()
            .map(|(_, e)| e.time + self.behavior.combo.timeout)
    }
}
