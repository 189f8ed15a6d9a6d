//! Tap-hold bindings and the resolver deciding what a finished dance does.

use embassy_time::{Duration, Instant};

use crate::action::Action;
use crate::event::{KeyEvent, KeyPos};

pub const TAP_DANCE_MAX_NUM: usize = 8;
/// Mod-tap keys held at the same time
pub(crate) const MOD_TAP_MAX_NUM: usize = 8;

/// How an interrupted, still held first press is decided.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TapHoldMode {
    /// Another key pressed during the dance ends it as a tap.
    #[default]
    Standard,
    /// Keys pressed during the dance wait for it, a single held press becomes a hold even
    /// when interrupted.
    PermissiveHold,
}

/// Progress of a dance, as seen by the resolver.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapDanceState {
    /// Presses since the dance started
    pub count: u8,
    /// The key is down
    pub pressed: bool,
    /// Another key was pressed during the dance
    pub interrupted: bool,
    /// The dance ended, by timeout or interruption
    pub finished: bool,
}

impl TapDanceState {
    /// Started and not finished yet
    pub fn is_pending(&self) -> bool {
        self.count > 0 && !self.finished
    }
}

/// A tap-hold binding: one action when tapped, another when held.
///
/// It remembers the action it registered, so that releasing the key releases exactly that.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct TapHold {
    pub tap: Action,
    pub hold: Action,
    held: Option<Action>,
}

impl TapHold {
    pub const fn new(tap: Action, hold: Action) -> Self {
        Self { tap, hold, held: None }
    }

    /// The action registered by the last resolution, if not reset yet
    pub fn held(&self) -> Option<Action> {
        self.held
    }

    /// Decide a finished dance, returns the action to register.
    ///
    /// Nothing is registered when the key is already up, or when an action is still held.
    /// A single press held until the end is a hold, unless another key interrupted it in
    /// [`TapHoldMode::Standard`]. Every other held press is a tap.
    pub fn resolve(&mut self, state: &TapDanceState, mode: TapHoldMode) -> Option<Action> {
        if !state.pressed || self.held.is_some() {
            return None;
        }
        let is_hold = state.count == 1 && (!state.interrupted || mode == TapHoldMode::PermissiveHold);
        let action = if is_hold { self.hold } else { self.tap };
        self.held = Some(action);
        Some(action)
    }

    /// Forget the held action, returns it so that it can be unregistered.
    pub fn reset(&mut self) -> Option<Action> {
        self.held.take()
    }
}

/// A binding with the dance running on it.
#[derive(Clone, Debug)]
pub(crate) struct TapDance {
    pub(crate) binding: TapHold,
    pub(crate) state: TapDanceState,
    /// Latest press, reused for the events the dance synthesizes
    pub(crate) last_press: Option<KeyEvent>,
}

impl TapDance {
    pub(crate) fn new(binding: TapHold) -> Self {
        Self {
            binding,
            state: TapDanceState::default(),
            last_press: None,
        }
    }

    pub(crate) fn press(&mut self, event: KeyEvent) {
        self.state.count = self.state.count.saturating_add(1);
        self.state.pressed = true;
        self.last_press = Some(event);
    }

    pub(crate) fn release(&mut self) {
        self.state.pressed = false;
    }

    pub(crate) fn pos(&self) -> Option<KeyPos> {
        self.last_press.map(|e| e.pos)
    }

    /// When the pending dance finishes by itself
    pub(crate) fn deadline(&self, tapping_term: Duration) -> Option<Instant> {
        if !self.state.is_pending() {
            return None;
        }
        self.last_press.map(|e| e.time + tapping_term)
    }

    /// A single press still held, whose tap or hold is not known yet.
    pub(crate) fn is_hold_undecided(&self) -> bool {
        self.state.is_pending() && self.state.pressed && self.state.count == 1
    }

    pub(crate) fn clear(&mut self) {
        self.state = TapDanceState::default();
        self.last_press = None;
    }
}
