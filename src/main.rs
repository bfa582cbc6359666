//! bluear firmware entry point (nRF52840 + SoftDevice S140).
//!
//! Task layout:
//!
//! - `softdevice_task` - runs the SoftDevice event loop
//! - `scan_task`       - keeps a passive BLE scan open (activity signal)
//! - `button_task` ×6  - debounced buttons → `BUTTONS` channel
//! - `led_task`        - blinks the status LED on `ACTIVITY_BLINK`
//! - `main`            - the cooperative monitor loop: waits on `BUTTONS`
//!   with a bounded timeout, ticks the watcher and redraws the OLED
//!
//! Only `main` touches the monitor state, so it needs no locking.

#![no_std]
#![no_main]

mod app;
mod ble;
mod config;
mod error;
mod monitor;
mod ui;

use app::{App, Outcome, Settings};
use ble::RadioActivity;
use config::{ACTIVITY_BLINK_MS, INPUT_POLL_TIMEOUT_MS, LOG_CAPACITY};
use defmt::{debug, error, info, unwrap, warn};
use embassy_executor::Spawner;
use embassy_nrf::gpio::{AnyPin, Level, Output, OutputDrive, Pin};
use embassy_nrf::interrupt::{self, InterruptExt, Priority};
use embassy_nrf::{bind_interrupts, peripherals, twim};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::channel::Channel;
use embassy_sync::signal::Signal;
use embassy_time::{with_timeout, Duration, Instant, Timer};
use error::{BleError, Error};
use monitor::Edge;
use nrf_softdevice::{raw, Softdevice};
use ui::buttons::BUTTON_QUEUE_DEPTH;
use ui::display::{self, Display};
use ui::{ButtonEvent, Key};
use {defmt_rtt as _, panic_probe as _};

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

/// Debounced button events, consumed only by the main loop.
static BUTTONS: Channel<CriticalSectionRawMutex, ButtonEvent, BUTTON_QUEUE_DEPTH> =
    Channel::new();

/// Raised on every new activity edge to pulse the status LED.
static ACTIVITY_BLINK: Signal<CriticalSectionRawMutex, ()> = Signal::new();

#[embassy_executor::task]
async fn softdevice_task(sd: &'static Softdevice) -> ! {
    sd.run().await
}

#[embassy_executor::task]
async fn scan_task(sd: &'static Softdevice) -> ! {
    ble::scanner::scan_task(sd).await
}

#[embassy_executor::task(pool_size = 6)]
async fn button_task(pin: AnyPin, key: Key) -> ! {
    ui::buttons::button_task(pin, key, &BUTTONS.sender()).await
}

#[embassy_executor::task]
async fn led_task(pin: AnyPin) -> ! {
    let mut led = Output::new(pin, Level::Low, OutputDrive::Standard);
    loop {
        ACTIVITY_BLINK.wait().await;
        led.set_high();
        Timer::after(Duration::from_millis(ACTIVITY_BLINK_MS)).await;
        led.set_low();
    }
}

fn softdevice_config() -> nrf_softdevice::Config {
    nrf_softdevice::Config {
        clock: Some(raw::nrf_clock_lf_cfg_t {
            source: raw::NRF_CLOCK_LF_SRC_RC as u8,
            rc_ctiv: 16,
            rc_temp_ctiv: 2,
            accuracy: raw::NRF_CLOCK_LF_ACCURACY_500_PPM as u8,
        }),
        conn_gap: Some(raw::ble_gap_conn_cfg_t {
            conn_count: 1,
            event_length: 24,
        }),
        gap_role_count: Some(raw::ble_gap_cfg_role_count_t {
            adv_set_count: 0,
            periph_role_count: 0,
            central_role_count: 1,
            central_sec_count: 0,
            _bitfield_1: raw::ble_gap_cfg_role_count_t::new_bitfield_1(0),
        }),
        ..Default::default()
    }
}

#[embassy_executor::main]
async fn main(spawner: Spawner) {
    info!("bluear starting");

    // SoftDevice reserves priorities 0, 1 and 4.
    let mut nrf_config = embassy_nrf::config::Config::default();
    nrf_config.gpiote_interrupt_priority = Priority::P2;
    nrf_config.time_interrupt_priority = Priority::P2;
    let p = embassy_nrf::init(nrf_config);
    interrupt::SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0.set_priority(Priority::P3);

    let sd: &'static Softdevice = Softdevice::enable(&softdevice_config());
    info!("SoftDevice enabled");
    unwrap!(spawner.spawn(softdevice_task(sd)));
    unwrap!(spawner.spawn(scan_task(sd)));

    let buttons: [(AnyPin, Key); 6] = [
        (p.P0_24.degrade(), Key::Ok),
        (p.P0_11.degrade(), Key::Up),
        (p.P0_12.degrade(), Key::Down),
        (p.P0_25.degrade(), Key::Left),
        (p.P1_08.degrade(), Key::Right),
        (p.P1_07.degrade(), Key::Back),
    ];
    for (pin, key) in buttons {
        unwrap!(spawner.spawn(button_task(pin, key)));
    }
    unwrap!(spawner.spawn(led_task(p.P0_06.degrade())));

    let i2c = twim::Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim::Config::default());
    let mut oled = match display::init(i2c) {
        Ok(oled) => oled,
        Err(e) => {
            error!("Display init failed: {}", e);
            park();
        }
    };

    match run(&mut oled).await {
        Ok(()) => info!("Exit requested - powering down"),
        Err(e) => error!("Monitor loop stopped: {}", e),
    }

    if let Err(e) = display::shut_down(&mut oled) {
        warn!("Display shutdown failed: {}", e);
    }
    error!("System OFF failed: {}", system_off());
    park();
}

/// The cooperative monitor loop.  Returns `Ok(())` on an exit request.
async fn run<I2C>(oled: &mut Display<I2C>) -> Result<(), Error>
where
    I2C: embedded_hal::i2c::I2c,
{
    let source = RadioActivity;
    let mut app: App<LOG_CAPACITY> = App::new(Settings::default(), Instant::now().as_millis());
    display::draw(oled, &app.view(Instant::now().as_millis()))?;

    loop {
        let now = Instant::now().as_millis();
        let wait = app.next_tick_in(now).clamp(1, INPUT_POLL_TIMEOUT_MS);
        let mut redraw = false;

        if let Ok(event) = with_timeout(Duration::from_millis(wait), BUTTONS.receive()).await {
            let now = Instant::now().as_millis();
            let was_monitoring = app.watcher().is_monitoring();
            match app.handle_button(event, now) {
                Outcome::Exit => return Ok(()),
                Outcome::Unchanged => debug!("Ignored: {}", event),
                Outcome::Redraw => {
                    redraw = true;
                    info!("Screen: {}", app.screen());
                }
            }
            let monitoring = app.watcher().is_monitoring();
            if monitoring != was_monitoring {
                info!("Monitoring {}", if monitoring { "started" } else { "paused" });
            }
        }

        let now = Instant::now().as_millis();
        let polled = app.poll(&source, now);
        if let Some(edge) = polled.edge {
            info!(
                "Activity edge: {} (events: {})",
                edge,
                app.watcher().event_count()
            );
            if edge == Edge::Rising {
                ACTIVITY_BLINK.signal(());
            }
        }

        if redraw || polled.redraw {
            display::draw(oled, &app.view(now))?;
        }
    }
}

/// Enter System OFF; only returns if the SoftDevice refuses.
fn system_off() -> Error {
    // SAFETY: plain SVC call into the enabled SoftDevice.
    let code = unsafe { raw::sd_power_system_off() };
    BleError::Raw(code).into()
}

fn park() -> ! {
    loop {
        cortex_m::asm::wfe();
    }
}
