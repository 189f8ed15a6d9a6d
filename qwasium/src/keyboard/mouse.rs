//! Mouse keys: buttons, and cursor or wheel movement repeated while the key is held.

use embassy_time::Instant;
use heapless::Vec;
use usbd_hid::descriptor::MouseReport;

use super::Keyboard;
use crate::config::MouseKeyConfig;
use crate::event::{KeyEvent, KeyPos};
use crate::hid::Report;
use crate::keycode::KeyCode;

/// Max number of direction keys held at the same time
const MOUSE_DIRECTION_MAX_NUM: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub(crate) enum MouseKeyCategory {
    Movement,
    Wheel,
}

impl MouseKeyCategory {
    fn of(key: KeyCode) -> Option<Self> {
        match key {
            KeyCode::MouseUp | KeyCode::MouseDown | KeyCode::MouseLeft | KeyCode::MouseRight => Some(Self::Movement),
            KeyCode::MouseWheelUp | KeyCode::MouseWheelDown | KeyCode::MouseWheelLeft | KeyCode::MouseWheelRight => {
                Some(Self::Wheel)
            }
            _ => None,
        }
    }
}

/// Pressed buttons, held direction keys and their auto-repeat.
pub(crate) struct MouseState {
    buttons: u8,
    /// Held direction keys with their physical positions
    held_directions: Vec<(KeyCode, KeyPos), MOUSE_DIRECTION_MAX_NUM>,
    repeat: u8,
    wheel_repeat: u8,
    /// Next cursor report
    move_deadline: Option<Instant>,
    /// Next wheel report
    wheel_deadline: Option<Instant>,
}

impl MouseState {
    pub(crate) const fn new() -> Self {
        Self {
            buttons: 0,
            held_directions: Vec::new(),
            repeat: 0,
            wheel_repeat: 0,
            move_deadline: None,
            wheel_deadline: None,
        }
    }

    pub(crate) fn deadline(&self) -> Option<Instant> {
        match (self.move_deadline, self.wheel_deadline) {
            (Some(d1), Some(d2)) => Some(d1.min(d2)),
            (d1, d2) => d1.or(d2),
        }
    }

    fn is_held(&self, key: KeyCode) -> bool {
        self.held_directions.iter().any(|(k, _)| *k == key)
    }

    fn is_category_held(&self, category: MouseKeyCategory) -> bool {
        self.held_directions
            .iter()
            .any(|(k, _)| MouseKeyCategory::of(*k) == Some(category))
    }

    /// Movement along one axis, keys pulling both ways cancel out
    fn axis(&self, negative: KeyCode, positive: KeyCode, unit: i8) -> i8 {
        let mut value = 0;
        if self.is_held(positive) {
            value += unit;
        }
        if self.is_held(negative) {
            value -= unit;
        }
        value
    }

    /// The report of the buttons, moving along the given category
    fn report(&self, category: Option<MouseKeyCategory>, config: &MouseKeyConfig) -> MouseReport {
        let mut report = MouseReport {
            buttons: self.buttons,
            x: 0,
            y: 0,
            wheel: 0,
            pan: 0,
        };
        match category {
            Some(MouseKeyCategory::Movement) => {
                let unit = calculate_unit(
                    self.repeat,
                    config.move_delta,
                    config.max_speed,
                    config.time_to_max,
                    config.move_max,
                );
                report.x = self.axis(KeyCode::MouseLeft, KeyCode::MouseRight, unit);
                report.y = self.axis(KeyCode::MouseUp, KeyCode::MouseDown, unit);
            }
            Some(MouseKeyCategory::Wheel) => {
                let unit = calculate_unit(
                    self.wheel_repeat,
                    config.wheel_delta,
                    config.wheel_max_speed,
                    config.wheel_time_to_max,
                    config.wheel_max,
                );
                report.wheel = self.axis(KeyCode::MouseWheelDown, KeyCode::MouseWheelUp, unit);
                report.pan = self.axis(KeyCode::MouseWheelLeft, KeyCode::MouseWheelRight, unit);
            }
            None => (),
        }
        report
    }
}

fn button_index(key: KeyCode) -> Option<u8> {
    match key {
        KeyCode::MouseBtn1 => Some(0),
        KeyCode::MouseBtn2 => Some(1),
        KeyCode::MouseBtn3 => Some(2),
        KeyCode::MouseBtn4 => Some(3),
        KeyCode::MouseBtn5 => Some(4),
        KeyCode::MouseBtn6 => Some(5),
        KeyCode::MouseBtn7 => Some(6),
        KeyCode::MouseBtn8 => Some(7),
        _ => None,
    }
}

/// Distance of one report after `repeat` repeats, easing out towards `delta * max_speed`.
fn calculate_unit(repeat: u8, delta: u8, max_speed: u8, time_to_max: u8, max: u8) -> i8 {
    let min_unit = delta as u32;
    let max_unit = delta as u32 * max_speed as u32;
    let unit = if repeat == 0 {
        min_unit
    } else if repeat >= time_to_max {
        max_unit
    } else {
        let repeat = repeat as u32;
        let ttm = time_to_max as u32;
        let progress_num = (2 * repeat * ttm).saturating_sub(repeat * repeat);
        min_unit + max_unit.saturating_sub(min_unit) * progress_num / (ttm * ttm)
    };
    unit.clamp(1, max.max(1) as u32).min(i8::MAX as u32) as i8
}

impl<'a, const ROW: usize, const COL: usize, const NUM_LAYER: usize> Keyboard<'a, ROW, COL, NUM_LAYER> {
    /// Buttons report on press and release. Direction keys report on press, then repeat
    /// until the last key of their category is released.
    pub(super) fn process_action_mouse(&mut self, key: KeyCode, event: KeyEvent) {
        if let Some(category) = MouseKeyCategory::of(key) {
            if event.pressed {
                self.press_mouse_direction(key, category, event);
            } else {
                self.release_mouse_direction(key, category, event.pos);
            }
        } else if let Some(bit) = button_index(key) {
            if event.pressed {
                self.mouse.buttons |= 1 << bit;
            } else {
                self.mouse.buttons &= !(1 << bit);
            }
            self.send_mouse_report(None);
        }
    }

    fn press_mouse_direction(&mut self, key: KeyCode, category: MouseKeyCategory, event: KeyEvent) {
        let config = self.behavior.mouse;
        let first = !self.mouse.is_category_held(category);
        if self.mouse.held_directions.push((key, event.pos)).is_err() {
            warn!("Too many mouse keys held, ignoring {:?}", key);
            return;
        }
        if first {
            // Start again from the lowest speed
            match category {
                MouseKeyCategory::Movement => {
                    self.mouse.repeat = 0;
                    self.mouse.move_deadline = Some(event.time + config.delay);
                }
                MouseKeyCategory::Wheel => {
                    self.mouse.wheel_repeat = 0;
                    self.mouse.wheel_deadline = Some(event.time + config.wheel_delay);
                }
            }
        }
        self.send_mouse_report(Some(category));
    }

    /// Movement was sent with the reports, releasing only stops the repeat.
    fn release_mouse_direction(&mut self, key: KeyCode, category: MouseKeyCategory, pos: KeyPos) {
        if let Some(i) = self.mouse.held_directions.iter().position(|e| *e == (key, pos)) {
            self.mouse.held_directions.swap_remove(i);
        }
        if self.mouse.is_category_held(category) {
            return;
        }
        match category {
            MouseKeyCategory::Movement => {
                self.mouse.repeat = 0;
                self.mouse.move_deadline = None;
            }
            MouseKeyCategory::Wheel => {
                self.mouse.wheel_repeat = 0;
                self.mouse.wheel_deadline = None;
            }
        }
    }

    /// Send the repeats due at `now`. A late repeat is sent once, not caught up.
    pub(super) fn repeat_mouse_keys(&mut self, now: Instant) {
        let config = self.behavior.mouse;
        if self.mouse.move_deadline.is_some_and(|d| d <= now) {
            self.mouse.repeat = self.mouse.repeat.saturating_add(1);
            self.mouse.move_deadline = Some(now + config.interval);
            self.send_mouse_report(Some(MouseKeyCategory::Movement));
        }
        if self.mouse.wheel_deadline.is_some_and(|d| d <= now) {
            self.mouse.wheel_repeat = self.mouse.wheel_repeat.saturating_add(1);
            self.mouse.wheel_deadline = Some(now + config.wheel_interval);
            self.send_mouse_report(Some(MouseKeyCategory::Wheel));
        }
    }

    fn send_mouse_report(&mut self, category: Option<MouseKeyCategory>) {
        let report = self.mouse.report(category, &self.behavior.mouse);
        self.send_report(Report::MouseReport(report));
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_unit_eases_to_max_speed() {
        let config = MouseKeyConfig::default();
        let unit = |repeat| calculate_unit(repeat, config.move_delta, config.max_speed, config.time_to_max, config.move_max);
        assert_eq!(unit(0), 8);
        assert_eq!(unit(1), 12);
        assert_eq!(unit(2), 17);
        assert!(unit(15) > unit(14));
        assert_eq!(unit(30), 80);
        assert_eq!(unit(u8::MAX), 80);
    }

    #[test]
    fn test_unit_bounds() {
        // Never stands still, never above the max
        assert_eq!(calculate_unit(0, 0, 10, 30, 127), 1);
        assert_eq!(calculate_unit(40, 100, 10, 30, 127), 127);
        assert_eq!(calculate_unit(40, 100, 10, 30, 200), i8::MAX);
    }

    #[test]
    fn test_opposite_directions_cancel() {
        let config = MouseKeyConfig::default();
        let mut mouse = MouseState::new();
        let pos = |col| KeyPos { row: 0, col };
        mouse.held_directions.push((KeyCode::MouseLeft, pos(0))).ok();
        mouse.held_directions.push((KeyCode::MouseUp, pos(1))).ok();
        let report = mouse.report(Some(MouseKeyCategory::Movement), &config);
        assert_eq!((report.x, report.y), (-8, -8));

        mouse.held_directions.push((KeyCode::MouseRight, pos(2))).ok();
        let report = mouse.report(Some(MouseKeyCategory::Movement), &config);
        assert_eq!((report.x, report.y), (0, -8));
        // Wheel isn't moved by the cursor keys
        assert_eq!(mouse.report(Some(MouseKeyCategory::Wheel), &config).wheel, 0);
    }
}
