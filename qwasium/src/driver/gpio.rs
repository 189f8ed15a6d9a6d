use embedded_hal::digital::{OutputPin, PinState};

/// Output pin driven by "active" instead of by level, low-active pins are inverted.
pub(crate) struct OutputController<P: OutputPin> {
    pin: P,
    low_active: bool,
}

impl<P: OutputPin> OutputController<P> {
    pub(crate) fn new(pin: P, low_active: bool) -> Self {
        Self { pin, low_active }
    }

    pub(crate) fn activate(&mut self) {
        self.set_active(true);
    }

    pub(crate) fn deactivate(&mut self) {
        self.set_active(false);
    }

    /// Pin errors are discarded
    pub(crate) fn set_active(&mut self, active: bool) {
        let level = PinState::from(active != self.low_active);
        self.pin.set_state(level).ok();
    }
}
