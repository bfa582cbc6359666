//! SSD1306 OLED display wrapper.
//!
//! Draws a [`RenderView`] in one of two layouts (128×64, 6×10 font, six
//! text rows):
//!
//! ```text
//! Splash                     Listening
//! BluEar             v0.1    BluEar
//! A passive                  Up:42s Ev:3
//! BLE listener               Monitoring
//!                            ---------------------
//! Hold BACK to exit.         [00:12] BLE Activity..
//! OK: Start                  [00:13] BLE Activity..
//! ```

use core::fmt::Write;

use crate::config::{APP_TITLE, APP_VERSION, EMPTY_LOG_TEXT};
use crate::error::Error;
use crate::ui::view::RenderView;
use crate::ui::ScreenState;
use embedded_graphics::mono_font::ascii::FONT_6X10;
use embedded_graphics::mono_font::MonoTextStyleBuilder;
use embedded_graphics::pixelcolor::BinaryColor;
use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Line, PrimitiveStyle};
use embedded_graphics::text::Text;
use ssd1306::mode::BufferedGraphicsMode;
use ssd1306::prelude::*;
use ssd1306::I2CDisplayInterface;
use ssd1306::Ssd1306;

/// Type alias for the concrete display driver.
///
/// Generic over the I²C implementation so callers pass in their HAL's
/// I²C peripheral.
pub type Display<I2C> =
    Ssd1306<I2CInterface<I2C>, DisplaySize128x64, BufferedGraphicsMode<DisplaySize128x64>>;

/// Baseline of the first log row; rows are 10 px apart.
const LOG_TOP: i32 = 42;

/// Initialise the SSD1306 display and clear the screen.
pub fn init<I2C>(i2c: I2C) -> Result<Display<I2C>, Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let interface = I2CDisplayInterface::new(i2c);
    let mut display = Ssd1306::new(interface, DisplaySize128x64, DisplayRotation::Rotate0)
        .into_buffered_graphics_mode();
    display.init().map_err(|_| Error::Display)?;
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    Ok(display)
}

fn text_style() -> embedded_graphics::mono_font::MonoTextStyle<'static, BinaryColor> {
    MonoTextStyleBuilder::new()
        .font(&FONT_6X10)
        .text_color(BinaryColor::On)
        .build()
}

/// Render the current view and push it to the panel.
pub fn draw<I2C>(display: &mut Display<I2C>, view: &RenderView) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    match view.screen {
        ScreenState::Splash => draw_splash(display),
        ScreenState::Listening { .. } => draw_listening(display, view),
    }
    display.flush().map_err(|_| Error::Display)
}

fn draw_splash<I2C>(display: &mut Display<I2C>)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new(APP_TITLE, Point::new(0, 10), text_style()).draw(display);
    let _ = Text::new(APP_VERSION, Point::new(104, 10), text_style()).draw(display);
    let _ = Text::new("A passive", Point::new(0, 22), text_style()).draw(display);
    let _ = Text::new("BLE listener", Point::new(0, 32), text_style()).draw(display);
    let _ = Text::new("Hold BACK to exit.", Point::new(0, 50), text_style()).draw(display);
    let _ = Text::new("OK: Start", Point::new(0, 62), text_style()).draw(display);
}

fn draw_listening<I2C>(display: &mut Display<I2C>, view: &RenderView)
where
    I2C: embedded_hal::i2c::I2c,
{
    let _ = Text::new(APP_TITLE, Point::new(0, 10), text_style()).draw(display);

    let mut status: heapless::String<32> = heapless::String::new();
    let _ = write!(status, "Up:{}s Ev:{}", view.uptime_secs(), view.event_count);
    let _ = Text::new(status.as_str(), Point::new(0, 20), text_style()).draw(display);

    let mode = if view.monitoring { "Monitoring" } else { "Paused" };
    let _ = Text::new(mode, Point::new(0, 30), text_style()).draw(display);

    // Right-aligned hints on the title row.
    let hint = match (view.monitoring, view.scrollable) {
        (true, true) => "<> OK:Pause",
        (true, false) => "OK:Pause",
        (false, true) => "<> OK:Start",
        (false, false) => "OK:Start",
    };
    let hint_x = 128 - (hint.len() as i32 * 6);
    let _ = Text::new(hint, Point::new(hint_x, 10), text_style()).draw(display);

    let _ = Line::new(Point::new(0, 32), Point::new(127, 32))
        .into_styled(PrimitiveStyle::with_stroke(BinaryColor::On, 1))
        .draw(display);

    if view.is_empty() {
        let _ = Text::new(EMPTY_LOG_TEXT, Point::new(0, LOG_TOP), text_style()).draw(display);
        return;
    }

    for (row, line) in view.lines.iter().enumerate() {
        let mut text: heapless::String<80> = heapless::String::new();
        let _ = write!(text, "[{}] {}", line.time.as_str(), line.text.as_str());
        let y = LOG_TOP + (row as i32 * 10);
        let _ = Text::new(text.as_str(), Point::new(0, y), text_style()).draw(display);
    }
}

/// Blank the panel and switch it off before the MCU powers down.
pub fn shut_down<I2C>(display: &mut Display<I2C>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    display.clear_buffer();
    display.flush().map_err(|_| Error::Display)?;
    display.set_display_on(false).map_err(|_| Error::Display)
}
