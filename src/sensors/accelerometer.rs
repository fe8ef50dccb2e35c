//! Accelerometer data types
//!
//! The driver configures the accelerometer for its power-on default range of
//! ±2 g, giving a fixed sensitivity of 16384 LSB/g.

/// Accelerometer sensitivity in LSB/g (±2 g range)
pub const ACCEL_SENSITIVITY: f64 = 16384.0;

/// Accelerometer data in physical units (g-force)
#[derive(Debug, Clone, Copy, PartialEq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct AccelDataG {
    /// X-axis acceleration in g
    pub x: f64,
    /// Y-axis acceleration in g
    pub y: f64,
    /// Z-axis acceleration in g
    pub z: f64,
}

impl AccelDataG {
    /// Create from raw sensor values
    ///
    /// Each axis is `(raw - offset) / 16384.0`.
    ///
    /// # Arguments
    ///
    /// * `raw` - Raw X, Y, Z values
    /// * `offsets` - Offsets in raw LSB, subtracted before scaling
    #[must_use]
    pub fn from_raw(raw: [i16; 3], offsets: [f64; 3]) -> Self {
        let [x, y, z] =
            core::array::from_fn(|i| (f64::from(raw[i]) - offsets[i]) / ACCEL_SENSITIVITY);
        Self { x, y, z }
    }

    /// Get the magnitude of the acceleration vector
    #[must_use]
    pub fn magnitude(&self) -> f64 {
        libm::sqrt(self.x * self.x + self.y * self.y + self.z * self.z)
    }
}

impl From<AccelDataG> for [f64; 3] {
    fn from(data: AccelDataG) -> Self {
        [data.x, data.y, data.z]
    }
}
