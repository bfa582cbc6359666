//! Button dispatch.
//!
//! The router is a pure function of `(screen, event)` plus the few facts it
//! needs from the watcher (log length for scroll bounds, monitoring flag
//! for the OK toggle).  Transitions are listed in [`TRANSITIONS`]; any
//! `(page, key, kind)` triple missing from the table is ignored.

use crate::config::MAX_VISIBLE_LOG_LINES;
use crate::ui::input::{ButtonEvent, Key, PressKind};
use crate::ui::screen::{scroll_newer, scroll_older, Page, ScreenState};

/// Control command for the activity watcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum WatcherCommand {
    None,
    Start,
    Stop,
}

/// Result of routing one button event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Dispatch {
    /// The event produced a defined transition.
    Consumed {
        screen: ScreenState,
        command: WatcherCommand,
    },
    /// Leave the application.
    Exit,
    /// No transition is defined for this event on the current screen.
    Ignored,
}

impl Dispatch {
    pub fn is_consumed(&self) -> bool {
        matches!(self, Dispatch::Consumed { .. })
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Action {
    Enter,
    Leave,
    Toggle,
    ScrollOlder,
    ScrollNewer,
    Exit,
}

/// `(page, key, kind) → action`.  Up/Left and Down/Right are synonyms.
const TRANSITIONS: &[(Page, Key, PressKind, Action)] = &[
    (Page::Splash, Key::Ok, PressKind::Short, Action::Enter),
    (Page::Splash, Key::Back, PressKind::Long, Action::Exit),
    (Page::Listening, Key::Ok, PressKind::Short, Action::Toggle),
    (Page::Listening, Key::Back, PressKind::Short, Action::Leave),
    (Page::Listening, Key::Back, PressKind::Long, Action::Exit),
    (Page::Listening, Key::Up, PressKind::Short, Action::ScrollOlder),
    (Page::Listening, Key::Left, PressKind::Short, Action::ScrollOlder),
    (Page::Listening, Key::Down, PressKind::Short, Action::ScrollNewer),
    (Page::Listening, Key::Right, PressKind::Short, Action::ScrollNewer),
];

fn lookup(page: Page, event: ButtonEvent) -> Option<Action> {
    TRANSITIONS
        .iter()
        .find(|(p, k, kind, _)| *p == page && *k == event.key && *kind == event.kind)
        .map(|(_, _, _, action)| *action)
}

/// Maps button events to screen transitions and watcher commands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InputRouter {
    visible_lines: usize,
    auto_start: bool,
}

impl InputRouter {
    /// `auto_start` issues `Start` when the Listening screen is entered
    /// while monitoring is off.  `visible_lines` is clamped to
    /// `1..=MAX_VISIBLE_LOG_LINES`, the rows the renderer can hold.
    pub const fn new(visible_lines: usize, auto_start: bool) -> Self {
        let visible_lines = if visible_lines == 0 {
            1
        } else if visible_lines > MAX_VISIBLE_LOG_LINES {
            MAX_VISIBLE_LOG_LINES
        } else {
            visible_lines
        };
        Self {
            visible_lines,
            auto_start,
        }
    }

    pub fn visible_lines(&self) -> usize {
        self.visible_lines
    }

    pub fn route(
        &self,
        screen: ScreenState,
        event: ButtonEvent,
        log_len: usize,
        monitoring: bool,
    ) -> Dispatch {
        let Some(action) = lookup(screen.page(), event) else {
            return Dispatch::Ignored;
        };

        let offset = screen.scroll_offset();
        let (screen, command) = match action {
            Action::Exit => return Dispatch::Exit,
            Action::Enter => {
                let command = if self.auto_start && !monitoring {
                    WatcherCommand::Start
                } else {
                    WatcherCommand::None
                };
                (ScreenState::listening(), command)
            }
            Action::Leave => (ScreenState::Splash, WatcherCommand::None),
            Action::Toggle => {
                let command = if monitoring {
                    WatcherCommand::Stop
                } else {
                    WatcherCommand::Start
                };
                (screen, command)
            }
            Action::ScrollOlder => (
                ScreenState::Listening {
                    scroll_offset: scroll_older(offset, log_len, self.visible_lines),
                },
                WatcherCommand::None,
            ),
            Action::ScrollNewer => (
                ScreenState::Listening {
                    scroll_offset: scroll_newer(offset),
                },
                WatcherCommand::None,
            ),
        };

        Dispatch::Consumed { screen, command }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn visible_lines_are_clamped_to_renderable_rows() {
        assert_eq!(InputRouter::new(0, true).visible_lines(), 1);
        assert_eq!(InputRouter::new(3, true).visible_lines(), 3);
        assert_eq!(
            InputRouter::new(MAX_VISIBLE_LOG_LINES + 1, true).visible_lines(),
            MAX_VISIBLE_LOG_LINES
        );
    }

    #[test]
    fn every_page_key_kind_has_at_most_one_action() {
        for (i, (p, k, kind, _)) in TRANSITIONS.iter().enumerate() {
            let dupes = TRANSITIONS[i + 1..]
                .iter()
                .filter(|(p2, k2, kind2, _)| p2 == p && k2 == k && kind2 == kind)
                .count();
            assert_eq!(dupes, 0);
        }
    }

    #[test]
    fn long_presses_other_than_back_are_not_mapped() {
        for key in [Key::Ok, Key::Up, Key::Down, Key::Left, Key::Right] {
            assert_eq!(lookup(Page::Listening, ButtonEvent::long(key)), None);
            assert_eq!(lookup(Page::Splash, ButtonEvent::long(key)), None);
        }
    }
}
