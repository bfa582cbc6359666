//! GPIO button input with async debouncing and long-press detection.
//!
//! Six physical buttons (active-low with internal pull-up):
//!   - OK         - start / pause monitoring, leave the splash screen
//!   - UP / LEFT  - scroll towards older log entries
//!   - DOWN/RIGHT - scroll towards newer log entries
//!   - BACK       - short: back to splash, long: exit
//!
//! Each button is handled by an async task that waits for a GPIO edge,
//! debounces it, times the hold and sends a `ButtonEvent` to the UI channel.

use crate::config::{BUTTON_DEBOUNCE_MS, LONG_PRESS_MS};
use crate::ui::{ButtonEvent, Key};
use defmt::info;
use embassy_futures::select::{select, Either};
use embassy_nrf::gpio::{AnyPin, Input, Pull};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Sender;
use embassy_time::{Duration, Timer};

/// Depth of the button event queue.
pub const BUTTON_QUEUE_DEPTH: usize = 4;

/// Run a single button polling loop.
///
/// Waits for the pin to go low (pressed), debounces, then races the
/// release against `LONG_PRESS_MS`.  A release first yields a short press;
/// otherwise a long press is sent immediately and the task waits for the
/// release before repeating.
pub async fn button_task(
    pin: AnyPin,
    key: Key,
    tx: &Sender<'static, CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH>,
) -> ! {
    let mut btn = Input::new(pin, Pull::Up);

    loop {
        // Wait for falling edge (button press, active-low).
        btn.wait_for_falling_edge().await;

        // Debounce: wait and re-check.
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
        if !btn.is_low() {
            continue;
        }

        let hold = Timer::after(Duration::from_millis(
            LONG_PRESS_MS.saturating_sub(BUTTON_DEBOUNCE_MS),
        ));
        let event = match select(btn.wait_for_high(), hold).await {
            Either::First(()) => ButtonEvent::short(key),
            Either::Second(()) => ButtonEvent::long(key),
        };

        info!("Button: {}", event);
        tx.send(event).await;

        // Wait for release to avoid repeat triggers.
        btn.wait_for_high().await;
        Timer::after(Duration::from_millis(BUTTON_DEBOUNCE_MS)).await;
    }
}
