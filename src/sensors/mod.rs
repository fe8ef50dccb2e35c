//! Sensor modules for the MPU-6050
//!
//! This module provides data types and conversion helpers for each sensor in
//! the MPU-6050:
//! - Accelerometer (3-axis, ±2 g)
//! - Gyroscope (3-axis, ±250 °/s)
//! - Temperature
//!
//! All bus operations are performed through methods on `Mpu6050Driver`.

pub mod accelerometer;
pub mod gyroscope;
pub mod temperature;

// Re-export main types
pub use accelerometer::{ACCEL_SENSITIVITY, AccelDataG};
pub use gyroscope::{GYRO_SENSITIVITY, GyroDataDps};
pub use temperature::{TEMP_OFFSET_CELSIUS, TEMP_SENSITIVITY, temperature_to_celsius};

/// Combine a big-endian register pair into a signed 16-bit value
///
/// `(hi << 8) | lo` reinterpreted as two's complement, so `0x8000..=0xFFFF`
/// map to `-32768..=-1`.
#[must_use]
pub const fn decode_word(hi: u8, lo: u8) -> i16 {
    i16::from_be_bytes([hi, lo])
}

/// Decode `N` consecutive big-endian words from `bytes`
///
/// `bytes` must hold at least `2 * N` bytes.
pub(crate) fn decode_words<const N: usize>(bytes: &[u8]) -> [i16; N] {
    core::array::from_fn(|i| decode_word(bytes[2 * i], bytes[2 * i + 1]))
}

/// One simultaneous accelerometer + temperature + gyroscope sample (raw)
///
/// Values are kept in register order: `[ax, ay, az, temp, gx, gy, gz]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct RawSample {
    values: [i16; 7],
}

impl RawSample {
    /// Number of words in a sample
    pub const LEN: usize = 7;
    /// Number of bytes in a burst read
    pub const SIZE: usize = 2 * Self::LEN;

    /// Index of the temperature word
    pub const TEMP_INDEX: usize = 3;

    /// Create from decoded words in register order
    #[must_use]
    pub const fn new(values: [i16; Self::LEN]) -> Self {
        Self { values }
    }

    /// All seven words in register order
    #[must_use]
    pub const fn values(&self) -> [i16; Self::LEN] {
        self.values
    }

    /// Accelerometer X, Y, Z
    #[must_use]
    pub const fn accel(&self) -> [i16; 3] {
        [self.values[0], self.values[1], self.values[2]]
    }

    /// Temperature word
    #[must_use]
    pub const fn temperature(&self) -> i16 {
        self.values[Self::TEMP_INDEX]
    }

    /// Gyroscope X, Y, Z
    #[must_use]
    pub const fn gyro(&self) -> [i16; 3] {
        [self.values[4], self.values[5], self.values[6]]
    }
}

impl From<[u8; RawSample::SIZE]> for RawSample {
    fn from(bytes: [u8; RawSample::SIZE]) -> Self {
        Self::new(decode_words(&bytes))
    }
}

impl From<RawSample> for [i16; RawSample::LEN] {
    fn from(sample: RawSample) -> Self {
        sample.values
    }
}
