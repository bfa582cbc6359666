//! Single-threaded application core.
//!
//! `App` owns the watcher, the screen state and the tick schedule.  The
//! firmware loop feeds it two kinds of input and redraws when asked:
//!
//! - [`App::handle_button`] for each debounced button event
//! - [`App::poll`] on every loop iteration (input or poll timeout)
//!
//! Everything runs on one executor thread, so no locking is needed.

use crate::config;
use crate::monitor::{ActivitySource, ActivityWatcher, Edge, TickSchedule};
use crate::ui::input::ButtonEvent;
use crate::ui::router::{Dispatch, InputRouter, WatcherCommand};
use crate::ui::screen::{Page, ScreenState};
use crate::ui::view::{visible_window, RenderView};

/// Runtime knobs for the core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Settings {
    pub tick_period_ms: u64,
    pub visible_lines: usize,
    pub auto_start: bool,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_period_ms: config::TICK_PERIOD_MS,
            visible_lines: config::VISIBLE_LOG_LINES,
            auto_start: config::AUTO_START_ON_LISTEN,
        }
    }
}

/// What the loop should do after a button event.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Outcome {
    /// State changed; draw a new frame.
    Redraw,
    /// Event had no effect.
    Unchanged,
    /// Leave the application.
    Exit,
}

/// Result of one [`App::poll`] call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PollResult {
    /// A tick ran while the Listening screen is shown.
    pub redraw: bool,
    /// Edge recorded by this tick, if any.
    pub edge: Option<Edge>,
}

pub struct App<const N: usize> {
    watcher: ActivityWatcher<N>,
    screen: ScreenState,
    router: InputRouter,
    schedule: TickSchedule,
}

impl<const N: usize> App<N> {
    pub fn new(settings: Settings, now: u64) -> Self {
        let mut watcher = ActivityWatcher::new(now);
        watcher.note(config::APP_INITIALIZED_TEXT, now);
        watcher.note(config::PRESS_OK_TEXT, now);

        Self {
            watcher,
            screen: ScreenState::Splash,
            router: InputRouter::new(settings.visible_lines, settings.auto_start),
            schedule: TickSchedule::new(settings.tick_period_ms, now),
        }
    }

    pub fn handle_button(&mut self, event: ButtonEvent, now: u64) -> Outcome {
        let dispatch = self.router.route(
            self.screen,
            event,
            self.watcher.log().len(),
            self.watcher.is_monitoring(),
        );

        match dispatch {
            Dispatch::Exit => Outcome::Exit,
            Dispatch::Ignored => Outcome::Unchanged,
            Dispatch::Consumed { screen, command } => {
                self.screen = screen;
                self.apply(command, now);
                Outcome::Redraw
            }
        }
    }

    /// Run a tick if one is due.
    pub fn poll(&mut self, source: &impl ActivitySource, now: u64) -> PollResult {
        if !self.schedule.due(now) {
            return PollResult::default();
        }

        let mut result = PollResult {
            redraw: self.screen.page() == Page::Listening,
            edge: None,
        };

        if self.watcher.tick(source.is_active(), now).is_some() {
            result.edge = Some(if self.watcher.state().is_active {
                Edge::Rising
            } else {
                Edge::Falling
            });
            result.redraw = true;
        }
        result
    }

    fn apply(&mut self, command: WatcherCommand, now: u64) {
        match command {
            WatcherCommand::None => {}
            WatcherCommand::Start => {
                self.watcher.start(now);
                self.watcher.note(config::MONITORING_STARTED_TEXT, now);
                self.schedule.reset(now);
            }
            WatcherCommand::Stop => {
                if self.watcher.is_monitoring() {
                    self.watcher.stop();
                    self.watcher.note(config::MONITORING_PAUSED_TEXT, now);
                }
            }
        }
        self.screen = self
            .screen
            .clamped(self.watcher.log().len(), self.router.visible_lines());
    }

    /// Snapshot for the renderer.
    pub fn view(&self, now: u64) -> RenderView {
        let state = self.watcher.state();
        let log = self.watcher.log();
        RenderView {
            screen: self.screen,
            uptime_ms: self.watcher.uptime_ms(now),
            event_count: state.event_count,
            monitoring: state.monitoring,
            lines: visible_window(log, self.screen.scroll_offset(), self.router.visible_lines()),
            scrollable: log.len() > self.router.visible_lines(),
        }
    }

    pub fn screen(&self) -> ScreenState {
        self.screen
    }

    pub fn watcher(&self) -> &ActivityWatcher<N> {
        &self.watcher
    }

    /// Milliseconds the loop may sleep before the next tick is due.
    pub fn next_tick_in(&self, now: u64) -> u64 {
        self.schedule.remaining_ms(now)
    }
}
