//! Bluetooth Low Energy subsystem.
//!
//! This module drives the Nordic SoftDevice S140 in **Central** role, but
//! only to listen:
//!
//! 1. **Scanner** - keeps a passive scan open and records when the last
//!    advertising packet was heard.
//! 2. **Activity logic** - turns "last heard" into the boolean activity
//!    signal sampled by the monitor.
//!
//! No connection is ever opened and advertising payloads are not decoded.

pub mod activity_logic;
pub mod scanner;

pub use scanner::RadioActivity;
