//! Gyroscope data types
//!
//! The gyroscope runs at its power-on default range of ±250 °/s, giving a
//! fixed sensitivity of 131 LSB/(°/s).

/// Gyroscope sensitivity in LSB/(°/s) (±250 °/s range)
pub const GYRO_SENSITIVITY: f64 = 131.0;

/// Gyroscope data in degrees per second
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct GyroDataDps {
    /// X-axis rotation rate in °/s
    pub x: f64,
    /// Y-axis rotation rate in °/s
    pub y: f64,
    /// Z-axis rotation rate in °/s
    pub z: f64,
}

impl GyroDataDps {
    /// Create from raw sensor values
    ///
    /// Each axis is `(raw - offset) / 131.0`.
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw X, Y, Z values
    /// * `offsets` - Offsets in raw LSB, subtracted before scaling
    #[must_use]
    pub fn from_raw(raw: [i16; 3], offsets: [f64; 3]) -> Self {
        let [x, y, z] =
            core::array::from_fn(|i| (f64::from(raw[i]) - offsets[i]) / GYRO_SENSITIVITY);
        Self { x, y, z }
    }

    /// Get the magnitude of the rotation rate vector
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

impl From<GyroDataDps> for [f64; 3] {
    fn from(data: GyroDataDps) -> Self {
        [data.x, data.y, data.z]
    }
}
