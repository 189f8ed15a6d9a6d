//! Reports sent to the host.

use usbd_hid::descriptor::{KeyboardReport, MediaKeyboardReport, MouseReport};

pub enum Report {
    /// Normal keyboard hid report
    KeyboardReport(KeyboardReport),
    /// Mouse hid report
    MouseReport(MouseReport),
    /// Media keyboard report
    MediaKeyboardReport(MediaKeyboardReport),
}
