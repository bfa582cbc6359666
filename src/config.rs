//! Application-wide constants and compile-time configuration.
//!
//! All hardware pin assignments, timing parameters, and log sizing
//! live here so they can be tuned in one place.

// Event log

/// Number of entries the event log retains before evicting the oldest.
pub const LOG_CAPACITY: usize = 50;

/// Maximum length of a single log line in bytes (longer text is truncated).
pub const LOG_TEXT_CAPACITY: usize = 63;

/// Log line written on a false→true activity edge.
pub const ACTIVITY_DETECTED_TEXT: &str = "BLE Activity Detected";

/// Log line written on a true→false activity edge.
pub const ACTIVITY_ENDED_TEXT: &str = "BLE Activity Ended";

/// Session annotations written by the application around the watcher.
pub const APP_INITIALIZED_TEXT: &str = "App initialized";
pub const PRESS_OK_TEXT: &str = "Press OK to start";
pub const MONITORING_STARTED_TEXT: &str = "Monitoring started";
pub const MONITORING_PAUSED_TEXT: &str = "Monitoring paused";

// Timing

/// Period of the activity signal sampling tick (ms).
pub const TICK_PERIOD_MS: u64 = 500;

/// Upper bound on how long the main loop waits for a button event (ms).
pub const INPUT_POLL_TIMEOUT_MS: u64 = 100;

/// A received advertisement keeps the radio "active" for this long (ms).
pub const ACTIVITY_HOLD_MS: u64 = 1000;

/// Delay before restarting a failed passive scan (ms).
pub const SCAN_RETRY_MS: u64 = 2000;

/// Duration of the status LED pulse on each new activity edge (ms).
pub const ACTIVITY_BLINK_MS: u64 = 10;

// Screen

/// Log lines shown at once on the Listening screen.
pub const VISIBLE_LOG_LINES: usize = 3;

/// Hard upper bound on visible log lines (sizes the render buffers).
pub const MAX_VISIBLE_LOG_LINES: usize = 4;

/// Start monitoring automatically when entering the Listening screen.
pub const AUTO_START_ON_LISTEN: bool = true;

/// Strings shown on the splash screen.
pub const APP_TITLE: &str = "BluEar";
pub const APP_VERSION: &str = "v0.1";

/// Placeholder shown instead of an empty log window.
pub const EMPTY_LOG_TEXT: &str = "No events logged yet...";

// GPIO pin assignments (custom nRF52840 dongle)
//
// These are logical names; actual `embassy_nrf::peripherals::*` types are
// selected in `main.rs`.  Adjust for your PCB.
//
//   Button OK      → P0.24
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button LEFT    → P0.25
//   Button RIGHT   → P1.08
//   Button BACK    → P1.07
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27
//   Status LED     → P0.06

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Hold time after which a press is reported as long (ms).
pub const LONG_PRESS_MS: u64 = 500;
