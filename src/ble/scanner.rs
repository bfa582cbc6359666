//! BLE GAP passive scanner - feeds the radio activity signal.
//!
//! Uses the SoftDevice Central-role scanning API with `active: false`, so
//! the dongle never transmits scan requests.  Every advertising report only
//! stamps the "last heard" instant; payloads are not inspected.

use core::cell::Cell;

use crate::ble::activity_logic::heard_recently;
use crate::config::{ACTIVITY_HOLD_MS, SCAN_RETRY_MS};
use crate::error::BleError;
use crate::monitor::ActivitySource;
use defmt::{info, warn};
use embassy_sync::blocking_mutex::raw::CriticalSectionRawMutex;
use embassy_sync::blocking_mutex::Mutex;
use embassy_time::{Duration, Instant, Timer};
use nrf_softdevice::ble::central;
use nrf_softdevice::Softdevice;

/// Instant (ms since boot) of the most recent advertising report.
static LAST_HEARD_MS: Mutex<CriticalSectionRawMutex, Cell<Option<u64>>> =
    Mutex::new(Cell::new(None));

fn mark_heard(now_ms: u64) {
    LAST_HEARD_MS.lock(|last| last.set(Some(now_ms)));
}

fn forget() {
    LAST_HEARD_MS.lock(|last| last.set(None));
}

/// Handle to the shared radio activity signal.
#[derive(Clone, Copy, Default)]
pub struct RadioActivity;

impl ActivitySource for RadioActivity {
    fn is_active(&self) -> bool {
        let last = LAST_HEARD_MS.lock(|last| last.get());
        heard_recently(last, Instant::now().as_millis(), ACTIVITY_HOLD_MS)
    }
}

/// Run one passive scan until the SoftDevice stops it.
///
/// The callback never asks the scan to stop, so this only returns on error
/// or when the SoftDevice times the scan out.
async fn scan_once(sd: &Softdevice) -> Result<(), BleError> {
    let config = central::ScanConfig {
        active: false,
        ..Default::default()
    };

    let result = central::scan(sd, &config, |_report| {
        mark_heard(Instant::now().as_millis());
        None::<()>
    })
    .await;

    result.map(|_| ()).map_err(|_| BleError::ScanFailed)
}

/// Keep a passive scan running forever, restarting it after failures.
///
/// While the scan is down the signal reads as inactive.
pub async fn scan_task(sd: &'static Softdevice) -> ! {
    loop {
        info!("Passive scan starting");
        match scan_once(sd).await {
            Ok(()) => info!("Passive scan ended, restarting"),
            Err(e) => {
                warn!("Passive scan failed: {}", e);
                forget();
                Timer::after(Duration::from_millis(SCAN_RETRY_MS)).await;
            }
        }
    }
}
