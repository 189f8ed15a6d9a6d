//! Key events coming out of the matrix scanner.

use embassy_time::Instant;

/// Position of a key in the matrix
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyPos {
    pub row: u8,
    pub col: u8,
}

/// A key went down or up.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct KeyEvent {
    pub pos: KeyPos,
    pub pressed: bool,
    /// When the change was scanned
    pub time: Instant,
}

impl KeyEvent {
    pub const fn at(row: u8, col: u8, pressed: bool, time: Instant) -> Self {
        Self {
            pos: KeyPos { row, col },
            pressed,
            time,
        }
    }

    /// The same key and time, with another press state.
    pub(crate) fn with_pressed(self, pressed: bool) -> Self {
        Self { pressed, ..self }
    }
}
