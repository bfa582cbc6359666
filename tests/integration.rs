//! Integration tests for the bluear monitor core driven as the firmware
//! loop drives it: button events plus periodic polls.

use std::cell::Cell;

use bluear::app::{App, Outcome, Settings};
use bluear::config::{
    ACTIVITY_DETECTED_TEXT, ACTIVITY_ENDED_TEXT, APP_INITIALIZED_TEXT, MONITORING_PAUSED_TEXT,
    MONITORING_STARTED_TEXT, PRESS_OK_TEXT,
};
use bluear::monitor::Edge;
use bluear::ui::{ButtonEvent, Key, ScreenState};

const TICK: u64 = 500;

fn settings() -> Settings {
    Settings {
        tick_period_ms: TICK,
        visible_lines: 3,
        auto_start: true,
    }
}

fn log_texts<const N: usize>(app: &App<N>) -> Vec<String> {
    app.watcher()
        .log()
        .entries()
        .iter()
        .map(|e| e.text.as_str().to_owned())
        .collect()
}

/// Feed one sample per tick period, starting one period after `from`.
fn run_ticks<const N: usize>(app: &mut App<N>, from: u64, signals: &[bool]) -> u64 {
    let signal = Cell::new(false);
    let source = || signal.get();
    let mut now = from;
    for &s in signals {
        now += TICK;
        signal.set(s);
        app.poll(&source, now);
    }
    now
}

#[test]
fn boot_shows_splash_with_greeting() {
    let app: App<50> = App::new(settings(), 0);
    assert_eq!(app.screen(), ScreenState::Splash);
    assert!(!app.watcher().is_monitoring());
    assert_eq!(log_texts(&app), [APP_INITIALIZED_TEXT, PRESS_OK_TEXT]);

    let view = app.view(3_000);
    assert_eq!(view.screen, ScreenState::Splash);
    assert_eq!(view.uptime_secs(), 3);
    assert!(!view.scrollable);
}

#[test]
fn ok_on_splash_starts_a_session() {
    let mut app: App<50> = App::new(settings(), 0);
    let outcome = app.handle_button(ButtonEvent::short(Key::Ok), 1_000);

    assert_eq!(outcome, Outcome::Redraw);
    assert_eq!(app.screen(), ScreenState::listening());
    assert!(app.watcher().is_monitoring());
    assert_eq!(log_texts(&app), [MONITORING_STARTED_TEXT]);

    let view = app.view(1_000);
    assert!(view.monitoring);
    assert_eq!(view.event_count, 0);
    assert_eq!(view.uptime_ms, 0);
}

#[test]
fn signal_edges_are_logged_and_counted() {
    let mut app: App<50> = App::new(settings(), 0);
    app.handle_button(ButtonEvent::short(Key::Ok), 0);
    run_ticks(&mut app, 0, &[false, true, true, false, false, true]);

    assert_eq!(app.watcher().event_count(), 2);
    assert_eq!(
        log_texts(&app),
        [
            MONITORING_STARTED_TEXT,
            ACTIVITY_DETECTED_TEXT,
            ACTIVITY_ENDED_TEXT,
            ACTIVITY_DETECTED_TEXT
        ]
    );

    let stamps: Vec<u64> = app
        .watcher()
        .log()
        .entries()
        .iter()
        .map(|e| e.timestamp_ms)
        .collect();
    assert_eq!(stamps, [0, 1_000, 2_000, 3_000]);
}

#[test]
fn poll_reports_edges_and_redraws_only_when_due() {
    let mut app: App<50> = App::new(settings(), 0);
    app.handle_button(ButtonEvent::short(Key::Ok), 0);
    let active = || true;

    let early = app.poll(&active, 200);
    assert!(!early.redraw);
    assert_eq!(early.edge, None);

    let rising = app.poll(&active, 500);
    assert!(rising.redraw);
    assert_eq!(rising.edge, Some(Edge::Rising));

    let steady = app.poll(&active, 1_000);
    assert!(steady.redraw);
    assert_eq!(steady.edge, None);

    let idle = || false;
    assert_eq!(app.poll(&idle, 1_500).edge, Some(Edge::Falling));
}

#[test]
fn pause_stops_sampling_and_resume_starts_fresh() {
    let mut app: App<50> = App::new(settings(), 0);
    app.handle_button(ButtonEvent::short(Key::Ok), 0);
    let now = run_ticks(&mut app, 0, &[true, false, true]);
    assert_eq!(app.watcher().event_count(), 2);

    app.handle_button(ButtonEvent::short(Key::Ok), now);
    assert!(!app.watcher().is_monitoring());
    assert_eq!(log_texts(&app).last().map(String::as_str), Some(MONITORING_PAUSED_TEXT));
    let paused_len = app.watcher().log().len();

    let now = run_ticks(&mut app, now, &[false, true, false, true]);
    assert_eq!(app.watcher().event_count(), 2);
    assert_eq!(app.watcher().log().len(), paused_len);

    app.handle_button(ButtonEvent::short(Key::Ok), now);
    assert!(app.watcher().is_monitoring());
    assert_eq!(app.watcher().event_count(), 0);
    assert_eq!(log_texts(&app), [MONITORING_STARTED_TEXT]);
}

#[test]
fn scrolling_walks_back_through_history() {
    let mut app: App<50> = App::new(settings(), 0);
    app.handle_button(ButtonEvent::short(Key::Ok), 0);
    // Started line + 9 edges = 10 entries.
    let signals: Vec<bool> = (0..9).map(|i| i % 2 == 0).collect();
    let now = run_ticks(&mut app, 0, &signals);
    assert_eq!(app.watcher().log().len(), 10);

    let newest = app.view(now);
    assert_eq!(newest.lines.len(), 3);
    assert!(newest.scrollable);

    for _ in 0..3 {
        app.handle_button(ButtonEvent::short(Key::Up), now);
    }
    assert_eq!(app.screen(), ScreenState::Listening { scroll_offset: 3 });

    for _ in 0..10 {
        app.handle_button(ButtonEvent::short(Key::Left), now);
    }
    assert_eq!(app.screen(), ScreenState::Listening { scroll_offset: 7 });
    let oldest = app.view(now);
    assert_eq!(oldest.lines[0].text.as_str(), MONITORING_STARTED_TEXT);
    assert_eq!(oldest.lines[0].time.as_str(), "00:00");

    app.handle_button(ButtonEvent::short(Key::Down), now);
    assert_eq!(app.screen().scroll_offset(), 6);
}

#[test]
fn restart_clamps_stale_scroll_offset() {
    let mut app: App<50> = App::new(settings(), 0);
    app.handle_button(ButtonEvent::short(Key::Ok), 0);
    let signals: Vec<bool> = (0..9).map(|i| i % 2 == 0).collect();
    let now = run_ticks(&mut app, 0, &signals);
    for _ in 0..5 {
        app.handle_button(ButtonEvent::short(Key::Up), now);
    }
    assert_eq!(app.screen().scroll_offset(), 5);

    // Pause then resume: the log shrinks to a single line.
    app.handle_button(ButtonEvent::short(Key::Ok), now);
    app.handle_button(ButtonEvent::short(Key::Ok), now);
    assert_eq!(app.screen(), ScreenState::listening());
    assert_eq!(app.view(now).lines.len(), 1);
}

#[test]
fn back_returns_to_splash_and_monitoring_continues() {
    let mut app: App<50> = App::new(settings(), 0);
    app.handle_button(ButtonEvent::short(Key::Ok), 0);
    app.handle_button(ButtonEvent::short(Key::Up), 0);

    assert_eq!(
        app.handle_button(ButtonEvent::short(Key::Back), 100),
        Outcome::Redraw
    );
    assert_eq!(app.screen(), ScreenState::Splash);
    assert!(app.watcher().is_monitoring());

    run_ticks(&mut app, 100, &[true]);
    assert_eq!(app.watcher().event_count(), 1);

    // Re-entering while monitoring keeps the session.
    app.handle_button(ButtonEvent::short(Key::Ok), 1_000);
    assert_eq!(app.screen(), ScreenState::listening());
    assert_eq!(app.watcher().event_count(), 1);
}

#[test]
fn splash_ticks_do_not_request_redraw() {
    let mut app: App<50> = App::new(settings(), 0);
    let active = || true;
    let result = app.poll(&active, TICK);
    assert!(!result.redraw);
    assert_eq!(result.edge, None);
}

#[test]
fn long_back_exits_from_everywhere() {
    let mut app: App<50> = App::new(settings(), 0);
    assert_eq!(
        app.handle_button(ButtonEvent::long(Key::Back), 0),
        Outcome::Exit
    );

    app.handle_button(ButtonEvent::short(Key::Ok), 0);
    assert_eq!(
        app.handle_button(ButtonEvent::long(Key::Back), 10),
        Outcome::Exit
    );
}

#[test]
fn undefined_presses_leave_state_untouched() {
    let mut app: App<50> = App::new(settings(), 0);
    assert_eq!(
        app.handle_button(ButtonEvent::short(Key::Back), 0),
        Outcome::Unchanged
    );
    assert_eq!(
        app.handle_button(ButtonEvent::long(Key::Ok), 0),
        Outcome::Unchanged
    );
    assert_eq!(app.screen(), ScreenState::Splash);
    assert!(!app.watcher().is_monitoring());
}

#[test]
fn small_log_keeps_latest_entries() {
    let mut app: App<4> = App::new(settings(), 0);
    app.handle_button(ButtonEvent::short(Key::Ok), 0);
    run_ticks(&mut app, 0, &[true, false, true, false, true]);

    assert_eq!(app.watcher().log().len(), 4);
    assert_eq!(
        log_texts(&app),
        [
            ACTIVITY_ENDED_TEXT,
            ACTIVITY_DETECTED_TEXT,
            ACTIVITY_ENDED_TEXT,
            ACTIVITY_DETECTED_TEXT
        ]
    );
    assert_eq!(app.watcher().event_count(), 3);
}

fn ten_entry_session(visible_lines: usize) -> (App<50>, u64) {
    let mut app: App<50> = App::new(
        Settings {
            visible_lines,
            ..settings()
        },
        0,
    );
    app.handle_button(ButtonEvent::short(Key::Ok), 0);
    let signals: Vec<bool> = (0..9).map(|i| i % 2 == 0).collect();
    let now = run_ticks(&mut app, 0, &signals);
    assert_eq!(app.watcher().log().len(), 10);
    (app, now)
}

#[test]
fn oversized_visible_lines_still_reach_the_oldest_entry() {
    let (mut app, now) = ten_entry_session(5);
    for _ in 0..20 {
        app.handle_button(ButtonEvent::short(Key::Up), now);
    }

    let view = app.view(now);
    assert_eq!(app.screen().scroll_offset(), 6);
    assert_eq!(view.lines.len(), 4);
    assert_eq!(view.lines[0].text.as_str(), MONITORING_STARTED_TEXT);
}

#[test]
fn zero_visible_lines_still_shows_entries() {
    let (mut app, now) = ten_entry_session(0);

    let view = app.view(now);
    assert!(!view.is_empty());
    assert_eq!(view.lines.len(), 1);
    assert!(view.scrollable);

    for _ in 0..20 {
        app.handle_button(ButtonEvent::short(Key::Up), now);
    }
    assert_eq!(app.screen().scroll_offset(), 9);
    assert_eq!(app.view(now).lines[0].text.as_str(), MONITORING_STARTED_TEXT);
}
