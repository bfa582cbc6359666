//! User interface subsystem - OLED display + physical buttons.
//!
//! The main loop routes button events through [`router::InputRouter`] and
//! renders a [`view::RenderView`] on the SSD1306 OLED after every change.
//!
//! ## Components
//!
//! - **Display**: SSD1306 128×64 OLED via I²C
//! - **Buttons**: 6 tactile switches with debouncing and long-press
//!   detection (OK, UP, DOWN, LEFT, RIGHT, BACK)

pub mod buttons;
pub mod display;
pub mod input;
pub mod router;
pub mod screen;
pub mod view;

pub use input::{ButtonEvent, Key, PressKind};
pub use router::{Dispatch, InputRouter, WatcherCommand};
pub use screen::ScreenState;
pub use view::RenderView;
