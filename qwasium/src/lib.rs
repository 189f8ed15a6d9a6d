//! # qwasium
//!
//! Runtime for the qwasium keymaps: layer lookup, mod-taps and tap dances decided by a
//! tap-hold resolver, combos, macros, and lock indicator LEDs.
//!
//! Key events come in from a matrix scanner through [`channel::KEY_EVENT_CHANNEL`], HID
//! reports go out through a report channel owned by the caller.
//!
//! ## Feature flags
#![doc = document_features::document_features!()]
#![cfg_attr(not(test), no_std)]

// This mod MUST go first, so that the others see its macros.
pub(crate) mod fmt;

use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
pub use qwasium_types as types;
pub use qwasium_types::{action, keycode, led_indicator, modifier};

pub mod channel;
pub mod combo;
pub mod config;
mod driver;
pub mod event;
pub mod hid;
pub mod keyboard;
pub mod keyboard_macros;
pub mod keymap;
pub mod layout_macro;
pub mod light;
pub mod tap_dance;

/// Raw mutex used by every channel in the crate
pub type RawMutex = CriticalSectionRawMutex;

pub(crate) const KEY_EVENT_CHANNEL_SIZE: usize = 16;
pub(crate) const REPORT_CHANNEL_SIZE: usize = 64;
pub(crate) const LED_INDICATOR_CHANNEL_SIZE: usize = 4;
