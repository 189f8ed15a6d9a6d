//! # qwasium types
//!
//! Plain data types shared by the keyboard runtime and the keymap crates.
//!
//! - [`action`] - what a key position does: plain keys, mod-taps, tap dances, layers and macros
//! - [`keycode`] - HID keycodes, consumer (media) keys and ASCII conversion
//! - [`modifier`] - modifier combinations as written in keymaps, and the HID modifier byte
//! - [`led_indicator`] - lock LED state reported by the host

#![no_std]

pub mod action;
pub mod keycode;
pub mod led_indicator;
pub mod modifier;
