//! Tap dance and mod-tap engine: counts presses, finishes dances and hands them to the resolver.

use embassy_time::Instant;
use heapless::Vec;

use super::Keyboard;
use crate::action::Action;
use crate::event::{KeyEvent, KeyPos};
use crate::tap_dance::{MOD_TAP_MAX_NUM, TAP_DANCE_MAX_NUM, TapDance, TapHold, TapHoldMode};

/// A running dance: a tap dance binding, or a held mod-tap key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum DanceSlot {
    TapDance(usize),
    ModTap(usize),
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    pub(super) fn dance(&self, slot: DanceSlot) -> Option<&TapDance> {
        match slot {
            DanceSlot::TapDance(i) => self.tap_dances.get(i),
            DanceSlot::ModTap(i) => self.mod_taps.get(i),
        }
    }

    pub(super) fn dance_mut(&mut self, slot: DanceSlot) -> Option<&mut TapDance> {
        match slot {
            DanceSlot::TapDance(i) => self.tap_dances.get_mut(i),
            DanceSlot::ModTap(i) => self.mod_taps.get_mut(i),
        }
    }

    fn dance_slots(&self) -> Vec<DanceSlot, { TAP_DANCE_MAX_NUM + MOD_TAP_MAX_NUM }> {
        (0..self.tap_dances.len())
            .map(DanceSlot::TapDance)
            .chain((0..self.mod_taps.len()).map(DanceSlot::ModTap))
            .collect()
    }

    pub(super) fn mod_tap_at(&self, pos: KeyPos) -> Option<usize> {
        self.mod_taps.iter().position(|d| d.pos() == Some(pos))
    }

    pub(super) fn process_tap_dance(&mut self, idx: usize, event: KeyEvent) {
        let Some(dance) = self.tap_dances.get_mut(idx) else {
            warn!("Tap dance {} is not configured", idx);
            return;
        };
        if event.pressed {
            dance.press(event);
        } else {
            dance.release();
            if dance.state.finished {
                self.reset_dance(DanceSlot::TapDance(idx));
            }
        }
    }

    /// A mod-tap is a single-tap dance living while its key is held.
    pub(super) fn process_mod_tap(&mut self, tap: Action, hold: Action, event: KeyEvent) {
        if event.pressed {
            let mut dance = TapDance::new(TapHold::new(tap, hold));
            dance.press(event);
            if self.mod_taps.push(dance).is_err() {
                warn!("Too many mod-tap keys held, ignoring {:?}", event.pos);
            }
        } else if let Some(i) = self.mod_tap_at(event.pos) {
            self.mod_taps[i].release();
            if self.mod_taps[i].state.finished {
                self.reset_dance(DanceSlot::ModTap(i));
            }
            self.mod_taps.remove(i);
        }
    }

    /// Another key went down while dances are pending.
    ///
    /// In standard mode the interruption finishes the dances right away.
    pub(super) fn interrupt_tap_dances(&mut self, event: KeyEvent) {
        let finish = self.behavior.tap_dance.mode == TapHoldMode::Standard;
        for slot in self.dance_slots() {
            let Some(dance) = self.dance_mut(slot) else {
                continue;
            };
            if !dance.state.is_pending() || dance.pos() == Some(event.pos) {
                continue;
            }
            dance.state.interrupted = true;
            if finish {
                self.finish_dance(slot);
            }
        }
    }

    /// Whether the event must wait for an undecided tap-hold key on another position
    pub(super) fn is_held_back(&self, event: KeyEvent) -> bool {
        if self.behavior.tap_dance.mode != TapHoldMode::PermissiveHold {
            return false;
        }
        self.tap_dances
            .iter()
            .chain(self.mod_taps.iter())
            .any(|d| d.is_hold_undecided() && d.pos() != Some(event.pos))
    }

    pub(super) fn tap_dance_deadline(&self) -> Option<Instant> {
        let term = self.behavior.tap_dance.tapping_term;
        self.tap_dances
            .iter()
            .chain(self.mod_taps.iter())
            .filter_map(|d| d.deadline(term))
            .min()
    }

    pub(super) fn finish_expired_dances(&mut self, now: Instant) {
        let term = self.behavior.tap_dance.tapping_term;
        for slot in self.dance_slots() {
            let expired = self
                .dance(slot)
                .and_then(|d| d.deadline(term))
                .is_some_and(|deadline| deadline <= now);
            if expired {
                self.finish_dance(slot);
            }
        }
    }

    /// The dance is over: register what the resolver decides.
    ///
    /// A dance whose key is already up is reset right away.
    fn finish_dance(&mut self, slot: DanceSlot) {
        let mode = self.behavior.tap_dance.mode;
        let Some(dance) = self.dance_mut(slot) else {
            return;
        };
        dance.state.finished = true;
        let state = dance.state;
        let resolved = dance.binding.resolve(&state, mode);
        let last_press = dance.last_press;
        debug!("Tap dance {:?} finished: {:?}, registers {:?}", slot, state, resolved);

        if let (Some(action), Some(event)) = (resolved, last_press) {
            self.process_action(action, event);
        }
        if !state.pressed {
            self.reset_dance(slot);
        }
    }

    /// Unregister the resolved action and get ready for the next dance
    pub(super) fn reset_dance(&mut self, slot: DanceSlot) {
        let Some(dance) = self.dance_mut(slot) else {
            return;
        };
        let released = dance.binding.reset();
        let last_press = dance.last_press;
        dance.clear();

        if let (Some(action), Some(event)) = (released, last_press) {
            self.process_action(action, event.with_pressed(false));
        }
    }
}
