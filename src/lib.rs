//! Test-only library interface for bluear.
//!
//! This module re-exports the pure logic modules that can be tested
//! on the host (no embedded hardware required).
//!
//! Usage: `cargo test --lib`
//!
//! Note: The embedded binary uses main.rs with #![no_std] and #![no_main].
//! This lib.rs provides a separate entry point for host-based testing.

#![cfg_attr(not(test), no_std)]

pub mod app;
pub mod config;
pub mod monitor;

// Internal module paths for the pure halves of the hardware subsystems
#[path = "ble/activity_logic.rs"]
mod ble_activity_logic_impl;
#[path = "ui/input.rs"]
mod ui_input_impl;
#[path = "ui/router.rs"]
mod ui_router_impl;
#[path = "ui/screen.rs"]
mod ui_screen_impl;
#[path = "ui/view.rs"]
mod ui_view_impl;

pub mod ble {
    pub mod activity_logic {
        pub use crate::ble_activity_logic_impl::heard_recently;
    }
}

pub mod ui {
    pub mod input {
        pub use crate::ui_input_impl::*;
    }
    pub mod router {
        pub use crate::ui_router_impl::*;
    }
    pub mod screen {
        pub use crate::ui_screen_impl::*;
    }
    pub mod view {
        pub use crate::ui_view_impl::*;
    }

    pub use input::{ButtonEvent, Key, PressKind};
    pub use router::{Dispatch, InputRouter, WatcherCommand};
    pub use screen::ScreenState;
    pub use view::RenderView;
}

// ═══════════════════════════════════════════════════════════════════════════
// Unit Tests
// ═══════════════════════════════════════════════════════════════════════════
