//! High-level driver API for the MPU-6050
//!
//! This module provides the [`Mpu6050Driver`], which configures the device on
//! construction, reads and scales sensor data, and runs offset calibration.
//!
//! Every method is a blocking bus transaction on the calling thread. The
//! driver holds no buffers and never polls in the background.

use crate::calibration::{
    CalibrationAccumulator, CalibrationConfig, CalibrationObserver, NoProgress, Offsets,
    progress_due, progress_fraction,
};
use crate::interface::BusTransport;
use crate::registers::INIT_SEQUENCE;
use crate::sensors::{AccelDataG, GyroDataDps, RawSample, decode_words, temperature_to_celsius};
use crate::{Error, ReadFault, ReadKind};

/// All three sensors converted from one burst read
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ImuReading {
    /// Acceleration in g
    pub accel: AccelDataG,
    /// Rotation rate in °/s
    pub gyro: GyroDataDps,
    /// Temperature in °C
    pub temperature: f64,
}

/// Main driver for the MPU-6050
pub struct Mpu6050Driver<I> {
    interface: I,
    address: u8,
    offsets: Offsets,
}

impl<I> Mpu6050Driver<I>
where
    I: BusTransport,
{
    /// Create a new MPU-6050 driver instance with the factory offsets
    ///
    /// The device is woken up and configured before this returns:
    /// 1. `PWR_MGMT_1` = 1: PLL with X-axis gyroscope reference
    /// 2. `CONFIG` = 3: 44 Hz (accel) / 42 Hz (gyro) low pass filter
    /// 3. `SMPRT_DIV` = 4: 200 Hz output rate
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] naming the register whose write failed. The
    /// remaining writes are not attempted.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let interface = I2cInterface::new(i2c);
    /// let mut imu = Mpu6050Driver::new(interface, I2C_ADDRESS_AD0_LOW)?;
    /// ```
    pub fn new(interface: I, address: u8) -> Result<Self, Error<I::Error>> {
        Self::with_offsets(interface, address, Offsets::default())
    }

    /// Create a new driver instance with explicit offsets
    ///
    /// Use this to restore offsets saved from an earlier calibration, or
    /// [`Offsets::ZERO`] for uncorrected readings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Init`] if a startup register write fails.
    pub fn with_offsets(
        interface: I,
        address: u8,
        offsets: Offsets,
    ) -> Result<Self, Error<I::Error>> {
        let mut driver = Self {
            interface,
            address,
            offsets,
        };
        driver.init()?;
        Ok(driver)
    }

    fn init(&mut self) -> Result<(), Error<I::Error>> {
        for (register, value) in INIT_SEQUENCE {
            self.interface
                .write_register(self.address, register.addr(), value)
                .map_err(|error| Error::Init { register, error })?;

            #[cfg(feature = "defmt")]
            defmt::debug!("MPU-6050 0x{:02x}: {} <- {}", self.address, register, value);
        }

        Ok(())
    }

    /// Device address used on the bus
    #[must_use]
    pub const fn address(&self) -> u8 {
        self.address
    }

    /// Current offsets
    #[must_use]
    pub const fn offsets(&self) -> &Offsets {
        &self.offsets
    }

    /// Replace the offsets
    ///
    /// The new offsets apply to all subsequent accelerometer and gyroscope
    /// readings.
    pub const fn set_offsets(&mut self, offsets: Offsets) {
        self.offsets = offsets;
    }

    /// Consume the driver and return the bus interface
    pub fn release(self) -> I {
        self.interface
    }

    /// Read `N` words starting at the register of `kind` in one transaction
    fn read_words<const N: usize>(
        &mut self,
        kind: ReadKind,
    ) -> Result<[i16; N], ReadFault<I::Error>> {
        let mut buffer = [0u8; RawSample::SIZE];
        let buffer = &mut buffer[..2 * N];

        let actual = self
            .interface
            .read_block(self.address, kind.register().addr(), buffer)
            .map_err(ReadFault::Bus)?;

        if actual != buffer.len() {
            #[cfg(feature = "defmt")]
            defmt::warn!(
                "MPU-6050 {} read: expected {} bytes, got {}",
                kind,
                buffer.len(),
                actual
            );

            return Err(ReadFault::Length {
                expected: buffer.len(),
                actual,
            });
        }

        Ok(decode_words(buffer))
    }

    fn read_sample(&mut self, kind: ReadKind) -> Result<RawSample, ReadFault<I::Error>> {
        self.read_words::<{ RawSample::LEN }>(kind)
            .map(RawSample::new)
    }

    /// Read all data registers at once
    ///
    /// Returns the raw accelerometer, temperature and gyroscope words from a
    /// single 14-byte burst starting at `ACCEL_XOUT_H`. No offsets or scaling
    /// are applied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] with [`ReadKind::Raw`] if the transaction fails.
    pub fn read_raw(&mut self) -> Result<RawSample, Error<I::Error>> {
        self.read_sample(ReadKind::Raw).map_err(|fault| Error::Read {
            kind: ReadKind::Raw,
            fault,
        })
    }

    /// Read raw accelerometer data (16-bit signed values)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] with [`ReadKind::Accel`] if the transaction fails.
    pub fn read_accel_raw(&mut self) -> Result<[i16; 3], Error<I::Error>> {
        self.read_words(ReadKind::Accel).map_err(|fault| Error::Read {
            kind: ReadKind::Accel,
            fault,
        })
    }

    /// Read raw gyroscope data (16-bit signed values)
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] with [`ReadKind::Gyro`] if the transaction fails.
    pub fn read_gyro_raw(&mut self) -> Result<[i16; 3], Error<I::Error>> {
        self.read_words(ReadKind::Gyro).map_err(|fault| Error::Read {
            kind: ReadKind::Gyro,
            fault,
        })
    }

    /// Read accelerometer data in g-force units
    ///
    /// Each axis is `(raw - offset) / 16384.0` using offset slots 0-2.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let accel = imu.read_accel()?;
    /// println!("X: {}g, Y: {}g, Z: {}g", accel.x, accel.y, accel.z);
    /// ```
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] with [`ReadKind::Accel`] if the transaction fails.
    pub fn read_accel(&mut self) -> Result<AccelDataG, Error<I::Error>> {
        let raw = self.read_accel_raw()?;
        Ok(AccelDataG::from_raw(raw, self.offsets.accel()))
    }

    /// Read gyroscope data in degrees per second
    ///
    /// Each axis is `(raw - offset) / 131.0` using offset slots 4-6.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] with [`ReadKind::Gyro`] if the transaction fails.
    pub fn read_gyro(&mut self) -> Result<GyroDataDps, Error<I::Error>> {
        let raw = self.read_gyro_raw()?;
        Ok(GyroDataDps::from_raw(raw, self.offsets.gyro()))
    }

    /// Read the temperature in degrees Celsius
    ///
    /// Offsets are not applied to temperature.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] with [`ReadKind::Temperature`] if the
    /// transaction fails.
    pub fn read_temperature(&mut self) -> Result<f64, Error<I::Error>> {
        let [raw] = self
            .read_words::<1>(ReadKind::Temperature)
            .map_err(|fault| Error::Read {
                kind: ReadKind::Temperature,
                fault,
            })?;
        Ok(temperature_to_celsius(raw))
    }

    /// Read and convert all sensors from a single burst read
    ///
    /// Unlike calling [`read_accel`](Self::read_accel),
    /// [`read_gyro`](Self::read_gyro) and
    /// [`read_temperature`](Self::read_temperature) in turn, all values come
    /// from the same sample.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Read`] with [`ReadKind::Raw`] if the transaction fails.
    pub fn read_all(&mut self) -> Result<ImuReading, Error<I::Error>> {
        let raw = self.read_raw()?;
        Ok(ImuReading {
            accel: AccelDataG::from_raw(raw.accel(), self.offsets.accel()),
            gyro: GyroDataDps::from_raw(raw.gyro(), self.offsets.gyro()),
            temperature: temperature_to_celsius(raw.temperature()),
        })
    }

    /// Calibrate with the default settings (2000 samples, no progress output)
    ///
    /// See [`calibrate_with`](Self::calibrate_with).
    ///
    /// # Errors
    ///
    /// Returns [`Error::Calibration`] if a read fails; offsets are unchanged.
    pub fn calibrate(&mut self) -> Result<Offsets, Error<I::Error>> {
        self.calibrate_with(CalibrationConfig::default(), NoProgress)
    }

    /// Calibrate the offsets by averaging raw samples
    ///
    /// The sensor must be stationary and level with the Z axis pointing up.
    /// `config.samples` raw samples are read back to back, the mean of each of
    /// the seven words becomes its offset, and one g (16384 LSB) is removed
    /// from the Z accelerometer offset. The new offsets replace the current
    /// ones and are returned.
    ///
    /// This blocks the calling thread for `config.samples` bus transactions.
    ///
    /// `observer` is told `i / samples` after every
    /// `config.progress_interval`-th sample `i` has been read (starting with
    /// sample 0) and once more with `1.0` at the end. A failed read is never
    /// reported.
    ///
    /// # Arguments
    ///
    /// * `config` - Number of samples and progress interval
    /// * `observer` - Progress receiver, e.g. a `|fraction: f32| ...` closure
    ///
    /// # Errors
    ///
    /// Returns [`Error::InvalidConfig`] if `config` has a zero field, or
    /// [`Error::Calibration`] with the failing sample index if a read fails.
    /// On error the offsets are left unchanged.
    ///
    /// # Example
    ///
    /// ```ignore
    /// let offsets = imu.calibrate_with(CalibrationConfig::default(), |fraction: f32| {
    ///     println!("{:.0}%", fraction * 100.0);
    /// })?;
    /// ```
    pub fn calibrate_with<O>(
        &mut self,
        config: CalibrationConfig,
        mut observer: O,
    ) -> Result<Offsets, Error<I::Error>>
    where
        O: CalibrationObserver,
    {
        if !config.is_valid() {
            return Err(Error::InvalidConfig);
        }

        #[cfg(feature = "defmt")]
        defmt::info!("Calibrating MPU-6050 ({} samples), do not disturb", config.samples);

        let mut accumulator = CalibrationAccumulator::new();
        for sample in 0..config.samples {
            let raw = self
                .read_sample(ReadKind::Raw)
                .map_err(|fault| Error::Calibration { sample, fault })?;
            accumulator.add(&raw);

            if progress_due(sample, config.progress_interval) {
                observer.on_progress(progress_fraction(sample, config.samples));
            }
        }
        observer.on_progress(1.0);

        // `samples > 0` was checked above, so the mean covers at least one sample
        let offsets = accumulator.offsets();
        self.offsets = offsets;

        #[cfg(feature = "defmt")]
        defmt::info!("Calibration complete: {}", offsets);

        Ok(offsets)
    }
}
