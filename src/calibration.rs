//! Offset calibration
//!
//! Calibration averages a batch of raw samples taken while the sensor is
//! stationary and level (Z axis up). The per-column means become the new
//! [`Offsets`], except that one g (16384 LSB) is removed from the Z
//! accelerometer offset so a level sensor keeps reading +1 g on Z.

use crate::sensors::RawSample;

/// Default number of samples averaged by a calibration run
pub const DEFAULT_CALIBRATION_SAMPLES: u16 = 2000;

/// Default number of samples between two progress reports
pub const DEFAULT_PROGRESS_INTERVAL: u16 = 100;

/// One g in raw accelerometer LSB (±2 g range)
///
/// Subtracted from the averaged Z accelerometer offset to account for gravity.
pub const GRAVITY_LSB: f64 = 16384.0;

/// Per-word offsets, in raw LSB, subtracted before scaling
///
/// The seven slots are aligned with [`RawSample`]:
/// `[ax, ay, az, temp, gx, gy, gz]`. The temperature slot is recorded by
/// calibration but never applied.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct Offsets {
    values: [f64; 7],
}

impl Offsets {
    /// Offsets that leave readings unchanged
    pub const ZERO: Self = Self::new([0.0; 7]);

    /// Offsets measured on a reference board, used until calibration runs
    pub const FACTORY: Self = Self::new([
        656.676,
        -134.984,
        -758.424_000_000_000_9,
        -4670.28,
        -310.733,
        134.869,
        9.955,
    ]);

    /// Create from values in register order
    #[must_use]
    pub const fn new(values: [f64; 7]) -> Self {
        Self { values }
    }

    /// All seven offsets in register order
    #[must_use]
    pub const fn values(&self) -> [f64; 7] {
        self.values
    }

    /// Accelerometer X, Y, Z offsets (indices 0-2)
    #[must_use]
    pub const fn accel(&self) -> [f64; 3] {
        [self.values[0], self.values[1], self.values[2]]
    }

    /// Temperature slot (index 3), informational only
    #[must_use]
    pub const fn temperature(&self) -> f64 {
        self.values[RawSample::TEMP_INDEX]
    }

    /// Gyroscope X, Y, Z offsets (indices 4-6)
    #[must_use]
    pub const fn gyro(&self) -> [f64; 3] {
        [self.values[4], self.values[5], self.values[6]]
    }
}

impl Default for Offsets {
    fn default() -> Self {
        Self::FACTORY
    }
}

impl From<[f64; 7]> for Offsets {
    fn from(values: [f64; 7]) -> Self {
        Self::new(values)
    }
}

/// Calibration run parameters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct CalibrationConfig {
    /// Number of raw samples to average (must be non-zero)
    pub samples: u16,
    /// Samples between two progress reports (must be non-zero)
    pub progress_interval: u16,
}

impl Default for CalibrationConfig {
    fn default() -> Self {
        Self {
            samples: DEFAULT_CALIBRATION_SAMPLES,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

impl CalibrationConfig {
    /// Check that the configuration can run
    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.samples > 0 && self.progress_interval > 0
    }
}

/// Receives calibration progress
///
/// Purely informational: the observer cannot influence the result. Any
/// `FnMut(f32)` closure is an observer.
pub trait CalibrationObserver {
    /// Called with the completed fraction, from 0.0 up to 1.0
    fn on_progress(&mut self, fraction: f32);
}

impl<F: FnMut(f32)> CalibrationObserver for F {
    fn on_progress(&mut self, fraction: f32) {
        self(fraction);
    }
}

/// Observer that ignores progress
#[derive(Debug, Clone, Copy, Default)]
pub struct NoProgress;

impl CalibrationObserver for NoProgress {
    fn on_progress(&mut self, _fraction: f32) {}
}

/// Running column sums of raw samples
///
/// Integer sums are exact for any realistic batch (65535 samples of ±32768
/// fit comfortably in `i64`), so the mean equals that of the stored batch.
#[derive(Debug, Clone, Copy, Default)]
pub struct CalibrationAccumulator {
    sums: [i64; 7],
    count: u32,
}

impl CalibrationAccumulator {
    /// Create an empty accumulator
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sums: [0; 7],
            count: 0,
        }
    }

    /// Add one sample
    pub fn add(&mut self, sample: &RawSample) {
        for (sum, value) in self.sums.iter_mut().zip(sample.values()) {
            *sum += i64::from(value);
        }
        self.count += 1;
    }

    /// Number of samples added so far
    #[must_use]
    pub const fn count(&self) -> u32 {
        self.count
    }

    /// Whether no samples have been added
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Column means with the gravity correction applied to Z
    ///
    /// An empty accumulator has measured nothing and yields [`Offsets::ZERO`].
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn offsets(&self) -> Offsets {
        if self.is_empty() {
            return Offsets::ZERO;
        }

        let count = f64::from(self.count);
        let mut values: [f64; 7] = core::array::from_fn(|i| self.sums[i] as f64 / count);
        values[2] -= GRAVITY_LSB;

        Offsets::new(values)
    }
}

/// Whether a progress report is due once sample `index` has been taken
pub(crate) const fn progress_due(index: u16, interval: u16) -> bool {
    index % interval == 0
}

/// Fraction reported once sample `index` has been taken
///
/// Sample 0 reports `0.0`; the final `1.0` is sent separately when the run
/// completes.
pub(crate) fn progress_fraction(index: u16, samples: u16) -> f32 {
    f32::from(index) / f32::from(samples)
}
