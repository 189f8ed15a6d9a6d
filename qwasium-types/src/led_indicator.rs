use bitfield_struct::bitfield;

/// Indicators defined in the HID spec 11.1
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LedIndicatorType {
    NumLock,
    CapsLock,
    ScrollLock,
    Compose,
    Kana,
}

impl LedIndicatorType {
    /// Read this indicator's flag out of the host's lock state.
    pub fn is_on(self, state: LedIndicator) -> bool {
        match self {
            LedIndicatorType::NumLock => state.num_lock(),
            LedIndicatorType::CapsLock => state.caps_lock(),
            LedIndicatorType::ScrollLock => state.scroll_lock(),
            LedIndicatorType::Compose => state.compose(),
            LedIndicatorType::Kana => state.kana(),
        }
    }
}

/// Lock state in the output report the host sends to the keyboard.
#[bitfield(u8, order = Lsb, defmt = cfg(feature = "defmt"))]
#[derive(Eq, PartialEq)]
pub struct LedIndicator {
    #[bits(1)]
    pub num_lock: bool,
    #[bits(1)]
    pub caps_lock: bool,
    #[bits(1)]
    pub scroll_lock: bool,
    #[bits(1)]
    pub compose: bool,
    #[bits(1)]
    pub kana: bool,
    #[bits(3)]
    _reserved: u8,
}

impl LedIndicator {
    pub const fn new_from(num_lock: bool, caps_lock: bool, scroll_lock: bool) -> Self {
        Self::new()
            .with_num_lock(num_lock)
            .with_caps_lock(caps_lock)
            .with_scroll_lock(scroll_lock)
    }
}
