//! Temperature sensor conversion

/// Temperature sensitivity in LSB/°C
pub const TEMP_SENSITIVITY: f64 = 340.0;

/// Temperature in °C for a raw reading of zero
pub const TEMP_OFFSET_CELSIUS: f64 = 36.53;

/// Convert a raw temperature reading to degrees Celsius
///
/// Temperature in °C = `TEMP_OUT` / 340 + 36.53. Calibration offsets never
/// apply to temperature.
#[must_use]
pub fn temperature_to_celsius(raw: i16) -> f64 {
    f64::from(raw) / TEMP_SENSITIVITY + TEMP_OFFSET_CELSIUS
}
