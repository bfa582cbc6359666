//! Unified error type for the firmware shell.
//!
//! The monitor core is infallible; only hardware bring-up and the radio
//! can fail.  All variants carry fixed-size data and implement
//! `defmt::Format` for on-target logging.

use defmt::Format;

/// Top-level error type used by `main` and the drivers.
#[derive(Debug, Format)]
pub enum Error {
    /// The SoftDevice returned a BLE-level error.
    Ble(BleError),

    /// I²C transaction to the display failed.
    Display,
}

/// Subset of BLE errors we propagate (keeps the enum `Copy`-friendly).
#[derive(Debug, Clone, Copy, Format)]
pub enum BleError {
    /// Raw error code from the SoftDevice.
    Raw(u32),
    /// Scan was cancelled or could not start.
    ScanFailed,
}

// Convenience conversions

impl From<BleError> for Error {
    fn from(e: BleError) -> Self {
        Error::Ble(e)
    }
}
