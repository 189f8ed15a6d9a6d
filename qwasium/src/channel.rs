//! Exposed channels which can be used to share data across tasks

use embassy_sync::channel::Channel;
pub use embassy_sync::{blocking_mutex, channel};

use crate::event::KeyEvent;
use crate::hid::Report;
use crate::led_indicator::LedIndicator;
use crate::{KEY_EVENT_CHANNEL_SIZE, LED_INDICATOR_CHANNEL_SIZE, REPORT_CHANNEL_SIZE, RawMutex};

/// Channel of reports produced by the keyboard
pub type ReportChannel = Channel<RawMutex, Report, REPORT_CHANNEL_SIZE>;

/// Channel for key events from the matrix scanner
pub static KEY_EVENT_CHANNEL: Channel<RawMutex, KeyEvent, KEY_EVENT_CHANNEL_SIZE> = Channel::new();
/// Lock state received from the host
pub static LED_INDICATOR_CHANNEL: Channel<RawMutex, LedIndicator, LED_INDICATOR_CHANNEL_SIZE> = Channel::new();
