//! Screen state and log scrolling.
//!
//! `scroll_offset` counts how many entries the visible window is shifted
//! back from the newest entry; 0 shows the newest lines.

/// Screens (views) the UI can be in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ScreenState {
    /// Title screen shown at boot.
    #[default]
    Splash,
    /// Live status plus the scrollable event log.
    Listening { scroll_offset: u32 },
}

/// Fieldless discriminant of [`ScreenState`], used as a dispatch key.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Page {
    Splash,
    Listening,
}

impl ScreenState {
    /// Listening screen showing the newest entries.
    pub const fn listening() -> Self {
        ScreenState::Listening { scroll_offset: 0 }
    }

    pub fn page(&self) -> Page {
        match self {
            ScreenState::Splash => Page::Splash,
            ScreenState::Listening { .. } => Page::Listening,
        }
    }

    pub fn scroll_offset(&self) -> u32 {
        match self {
            ScreenState::Splash => 0,
            ScreenState::Listening { scroll_offset } => *scroll_offset,
        }
    }

    /// Same screen with the offset pulled back inside the current log bounds.
    pub fn clamped(self, log_len: usize, visible_lines: usize) -> Self {
        match self {
            ScreenState::Splash => self,
            ScreenState::Listening { scroll_offset } => ScreenState::Listening {
                scroll_offset: scroll_offset.min(max_scroll(log_len, visible_lines)),
            },
        }
    }
}

/// Largest offset that still fills the window: `max(0, log_len - visible_lines)`.
pub fn max_scroll(log_len: usize, visible_lines: usize) -> u32 {
    let max = log_len.saturating_sub(visible_lines);
    u32::try_from(max).unwrap_or(u32::MAX)
}

/// Shift the window one entry towards older lines.
pub fn scroll_older(offset: u32, log_len: usize, visible_lines: usize) -> u32 {
    let max = max_scroll(log_len, visible_lines);
    if offset < max {
        offset + 1
    } else {
        max
    }
}

/// Shift the window one entry towards newer lines.
pub fn scroll_newer(offset: u32) -> u32 {
    offset.saturating_sub(1)
}
