/// Physical keys on the dongle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Key {
    Ok,
    Up,
    Down,
    Left,
    Right,
    Back,
}

/// How long the key was held.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PressKind {
    /// Released before `LONG_PRESS_MS`.
    Short,
    /// Held for at least `LONG_PRESS_MS`.
    Long,
}

/// Debounced button event delivered to the main loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ButtonEvent {
    pub key: Key,
    pub kind: PressKind,
}

impl ButtonEvent {
    pub const fn short(key: Key) -> Self {
        Self {
            key,
            kind: PressKind::Short,
        }
    }

    pub const fn long(key: Key) -> Self {
        Self {
            key,
            kind: PressKind::Long,
        }
    }
}
