mod combo;
mod mouse;
mod record;
mod tap_dance;

use embassy_futures::select::{Either, select};
use embassy_time::{Instant, Timer};
use heapless::{Deque, Vec};
use usbd_hid::descriptor::{KeyboardReport, MediaKeyboardReport};

use crate::action::{Action, KeyAction};
use crate::channel::{KEY_EVENT_CHANNEL, ReportChannel};
use crate::combo::{COMBO_MAX_LENGTH, COMBO_MAX_NUM, Combo};
use crate::config::BehaviorConfig;
use crate::event::KeyEvent;
use crate::hid::Report;
use crate::keyboard::mouse::MouseState;
use crate::keycode::KeyCode;
use crate::keymap::KeyMap;
use crate::modifier::{HidModifiers, ModifierCombination};
use crate::tap_dance::{MOD_TAP_MAX_NUM, TAP_DANCE_MAX_NUM, TapDance, TapDanceState};

/// Key events waiting for an undecided tap-hold key
const DEFERRED_EVENT_MAX_NUM: usize = 16;

/// Processes key events into HID reports: layers, combos, tap dances, mod-taps and macros.
///
/// The processing is synchronous and driven by the timestamps of the events, [`Keyboard::run`]
/// feeds it from [`KEY_EVENT_CHANNEL`] and wakes it up when a tap dance or a combo times out.
pub struct Keyboard<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> {
    /// Keymap
    keymap: KeyMap<'a, ROW, COL, NUM_LAYER>,

    /// Options for configurable action behavior
    behavior: BehaviorConfig,

    /// Dances of the `KeyAction::TapDance` bindings, indexed like the bindings
    tap_dances: Vec<TapDance, TAP_DANCE_MAX_NUM>,

    /// Dances of the mod-tap keys currently held
    mod_taps: Vec<TapDance, MOD_TAP_MAX_NUM>,

    /// Combos, longest first
    combos: Vec<Combo, COMBO_MAX_NUM>,

    /// Pressed combo triggers, waiting for the rest of a combo
    combo_buffer: Deque<(KeyAction, KeyEvent), COMBO_MAX_LENGTH>,

    /// Events held back while a tap-hold key is undecided
    deferred: Deque<KeyEvent, DEFERRED_EVENT_MAX_NUM>,

    /// Registered modifiers
    held_modifiers: HidModifiers,

    /// Modifiers sent along with a key, like the shift of `LSFT(KC_1)`.
    /// They don't outlive the next key press.
    with_modifiers: HidModifiers,

    /// Registered keycodes, sent in the keyboard report
    held_keycodes: [KeyCode; 6],

    /// Mouse buttons and held mouse keys
    mouse: MouseState,

    /// Output of the reports
    reports: &'a ReportChannel,
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    pub fn new(
        layers: &'a [[[KeyAction; COL]; ROW]; NUM_LAYER],
        behavior: BehaviorConfig,
        reports: &'a ReportChannel,
    ) -> Self {
        let mut combos = behavior.combo.combos.clone();
        // Longer combos take priority over the combos they contain
        combos.sort_unstable_by(|c1, c2| c2.actions.len().cmp(&c1.actions.len()));
        let tap_dances = behavior.tap_dance.tap_dances.iter().map(|b| TapDance::new(*b)).collect();

        Self {
            keymap: KeyMap::new(layers),
            behavior,
            tap_dances,
            mod_taps: Vec::new(),
            combos,
            combo_buffer: Deque::new(),
            deferred: Deque::new(),
            held_modifiers: HidModifiers::new(),
            with_modifiers: HidModifiers::new(),
            held_keycodes: [KeyCode::No; 6],
            mouse: MouseState::new(),
            reports,
        }
    }

    pub fn keymap(&self) -> &KeyMap<'a, ROW, COL, NUM_LAYER> {
        &self.keymap
    }

    pub fn held_keycodes(&self) -> &[KeyCode; 6] {
        &self.held_keycodes
    }

    /// Modifiers of the next keyboard report
    pub fn held_modifiers(&self) -> HidModifiers {
        self.held_modifiers | self.with_modifiers
    }

    /// Combos in priority order
    pub fn combos(&self) -> &[Combo] {
        &self.combos
    }

    /// State of the dance on the tap dance binding `idx`
    pub fn tap_dance_state(&self, idx: usize) -> Option<TapDanceState> {
        self.tap_dances.get(idx).map(|d| d.state)
    }

    /// Action registered by the tap dance binding `idx`
    pub fn tap_dance_held(&self, idx: usize) -> Option<Action> {
        self.tap_dances.get(idx).and_then(|d| d.binding.held())
    }

    /// Main keyboard processing task, it receives key events and turns them into reports.
    pub async fn run(&mut self) {
        loop {
            match self.next_deadline() {
                Some(deadline) => match select(KEY_EVENT_CHANNEL.receive(), Timer::at(deadline)).await {
                    Either::First(event) => self.process_event(event),
                    Either::Second(_) => self.process_timeout(Instant::now()),
                },
                None => {
                    let event = KEY_EVENT_CHANNEL.receive().await;
                    self.process_event(event);
                }
            }
        }
    }

    /// Process a key event.
    ///
    /// Timeouts up to the event's time are handled first.
    pub fn process_event(&mut self, event: KeyEvent) {
        self.process_timeout(event.time);
        if self.is_held_back(event) {
            debug!("Defer {:?} until the tap-hold key is decided", event);
            if event.pressed {
                self.interrupt_tap_dances(event);
            }
            if let Err(event) = self.deferred.push_back(event) {
                warn!("Deferred event buffer is full, processing {:?} now", event);
                self.process_inner(event);
            }
        } else {
            self.process_inner(event);
        }
        self.replay_deferred();
    }

    /// Finish the tap dances, flush the combos and repeat the mouse keys due at `now`.
    pub fn process_timeout(&mut self, now: Instant) {
        self.finish_expired_dances(now);
        if self.combo_deadline().is_some_and(|deadline| deadline <= now) {
            debug!("Combo timeout, flushing buffered keys");
            self.flush_combo_buffer();
        }
        self.replay_deferred();
        self.repeat_mouse_keys(now);
    }

    /// The next time [`Keyboard::process_timeout`] has something to do
    pub fn next_deadline(&self) -> Option<Instant> {
        [self.tap_dance_deadline(), self.combo_deadline(), self.mouse.deadline()]
            .into_iter()
            .flatten()
            .min()
    }

    fn replay_deferred(&mut self) {
        while let Some(&event) = self.deferred.front() {
            if self.is_held_back(event) {
                break;
            }
            self.deferred.pop_front();
            self.process_inner(event);
        }
    }

    fn process_inner(&mut self, event: KeyEvent) {
        let action = self.keymap.get_action_with_layer_cache(event);
        trace!("Process {:?}, action {:?}", event, action);

        if self.process_combo(action, event) {
            return;
        }
        self.process_key(action, event);
    }

    /// Process a key after the combo stage
    fn process_key(&mut self, action: KeyAction, event: KeyEvent) {
        if event.pressed {
            self.interrupt_tap_dances(event);
            self.with_modifiers = HidModifiers::new();
        }
        if !self.process_record(action, event) {
            return;
        }
        self.process_key_action(action, event);
    }

    fn process_key_action(&mut self, action: KeyAction, event: KeyEvent) {
        match action {
            KeyAction::No | KeyAction::Transparent => (),
            KeyAction::Single(action) => self.process_action(action, event),
            KeyAction::TapHold(tap, hold) => self.process_mod_tap(tap, hold, event),
            KeyAction::TapDance(idx) => self.process_tap_dance(idx as usize, event),
        }
    }

    /// Register or unregister an action
    fn process_action(&mut self, action: Action, event: KeyEvent) {
        match action {
            Action::No => (),
            Action::Key(key) => self.process_action_key(key, event),
            Action::Modifier(modifiers) => {
                if event.pressed {
                    self.register_modifiers(modifiers);
                } else {
                    self.unregister_modifiers(modifiers);
                }
                self.send_keyboard_report();
            }
            Action::KeyWithModifier(key, modifiers) => {
                if event.pressed {
                    self.with_modifiers |= modifiers.to_hid_modifiers();
                    self.register_key(key);
                } else {
                    self.unregister_key(key);
                    self.with_modifiers &= !modifiers.to_hid_modifiers();
                }
                self.send_keyboard_report();
            }
            Action::LayerOn(layer_num) => {
                if event.pressed {
                    self.keymap.activate_layer(layer_num);
                } else {
                    self.keymap.deactivate_layer(layer_num);
                }
            }
            Action::LayerToggle(layer_num) => {
                if !event.pressed {
                    self.keymap.toggle_layer(layer_num);
                }
            }
            // Macros run in the record processor
            Action::TriggerMacro(_) => (),
        }
    }

    fn process_action_key(&mut self, key: KeyCode, event: KeyEvent) {
        if key.as_consumer().is_some() {
            self.process_action_consumer_control(key, event);
        } else if key.is_mouse_key() {
            self.process_action_mouse(key, event);
        } else if key.is_basic() || key.is_modifier() {
            if event.pressed {
                self.register_key(key);
            } else {
                self.unregister_key(key);
            }
            self.send_keyboard_report();
        } else {
            debug!("Keycode {:?} isn't sent by this keyboard", key);
        }
    }

    fn process_action_consumer_control(&mut self, key: KeyCode, event: KeyEvent) {
        let usage_id = match key.as_consumer() {
            Some(consumer) if event.pressed => consumer as u16,
            _ => 0,
        };
        self.send_report(Report::MediaKeyboardReport(MediaKeyboardReport { usage_id }));
    }

    /// Register a key, the key can be a basic keycode or a modifier.
    fn register_key(&mut self, key: KeyCode) {
        if key.is_modifier() {
            self.held_modifiers |= key.to_hid_modifiers();
        } else if key.is_basic() {
            self.register_keycode(key);
        }
    }

    /// Unregister a key, the key can be a basic keycode or a modifier.
    fn unregister_key(&mut self, key: KeyCode) {
        if key.is_modifier() {
            self.held_modifiers &= !key.to_hid_modifiers();
        } else if key.is_basic() {
            self.unregister_keycode(key);
        }
    }

    /// Register a key to be sent in hid report.
    fn register_keycode(&mut self, key: KeyCode) {
        if self.held_keycodes.contains(&key) {
            return;
        }
        match self.held_keycodes.iter().position(|&k| k == KeyCode::No) {
            Some(index) => self.held_keycodes[index] = key,
            None => warn!("All keycode slots are taken, dropping {:?}", key),
        }
    }

    /// Unregister a key from hid report.
    fn unregister_keycode(&mut self, key: KeyCode) {
        if let Some(index) = self.held_keycodes.iter().position(|&k| k == key) {
            self.held_keycodes[index] = KeyCode::No;
        }
    }

    /// Register a modifier combination to be sent in hid report.
    fn register_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers |= modifiers.to_hid_modifiers();
    }

    /// Unregister a modifier combination from hid report.
    fn unregister_modifiers(&mut self, modifiers: ModifierCombination) {
        self.held_modifiers &= !modifiers.to_hid_modifiers();
    }

    fn send_keyboard_report(&mut self) {
        self.send_report(Report::KeyboardReport(KeyboardReport {
            modifier: (self.held_modifiers | self.with_modifiers).into_bits(),
            reserved: 0,
            leds: 0,
            keycodes: self.held_keycodes.map(|k| k as u8),
        }));
    }

    /// Handlers never wait for the host, a report which doesn't fit is dropped.
    fn send_report(&self, report: Report) {
        if self.reports.try_send(report).is_err() {
            warn!("Report channel is full, dropping report");
        }
    }
}
