#![no_std]
#![doc = include_str!("../README.md")]
#![warn(missing_docs)]

pub mod calibration;
pub mod device;
pub mod interface;
pub mod registers;
pub mod sensors;

// Re-export main types
pub use calibration::{CalibrationConfig, CalibrationObserver, NoProgress, Offsets};
pub use device::{ImuReading, Mpu6050Driver};
pub use interface::{BusTransport, I2cInterface};
pub use registers::Register;
pub use sensors::{AccelDataG, GyroDataDps, RawSample};

use core::fmt;

/// MPU-6050 I2C address when AD0 pin is low (default: 0x68)
///
/// Most breakout boards pull AD0 low, so this is the address to try first.
pub const I2C_ADDRESS_AD0_LOW: u8 = 0x68;

/// MPU-6050 I2C address when AD0 pin is high (alternative: 0x69)
pub const I2C_ADDRESS_AD0_HIGH: u8 = 0x69;

/// Logical read operation, used to identify which read failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadKind {
    /// Combined 14-byte accelerometer + temperature + gyroscope read
    Raw,
    /// 6-byte accelerometer read
    Accel,
    /// 6-byte gyroscope read
    Gyro,
    /// 2-byte temperature read
    Temperature,
}

impl ReadKind {
    /// First register of the block read
    #[must_use]
    pub const fn register(self) -> Register {
        match self {
            Self::Raw | Self::Accel => Register::AccelXoutH,
            Self::Gyro => Register::GyroXoutH,
            Self::Temperature => Register::TempOutH,
        }
    }

    /// Number of bytes transferred by the block read
    #[must_use]
    pub const fn byte_count(self) -> usize {
        match self {
            Self::Raw => 14,
            Self::Accel | Self::Gyro => 6,
            Self::Temperature => 2,
        }
    }
}

/// Why a block read was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum ReadFault<E> {
    /// The transport reported an error
    Bus(E),
    /// The transport transferred a different number of bytes than requested
    Length {
        /// Bytes requested
        expected: usize,
        /// Bytes reported by the transport
        actual: usize,
    },
}

/// Driver errors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error<E> {
    /// A startup register write failed; the device was left unconfigured
    Init {
        /// Register whose write failed
        register: Register,
        /// Transport error
        error: E,
    },
    /// A register read failed
    Read {
        /// Logical read that failed
        kind: ReadKind,
        /// Underlying cause
        fault: ReadFault<E>,
    },
    /// A raw read failed during calibration; offsets were left unchanged
    Calibration {
        /// Zero-based index of the sample that failed
        sample: u16,
        /// Underlying cause
        fault: ReadFault<E>,
    },
    /// Invalid calibration parameter
    InvalidConfig,
}

impl<E: fmt::Debug> fmt::Display for ReadFault<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bus(e) => write!(f, "bus error: {e:?}"),
            Self::Length { expected, actual } => {
                write!(f, "expected {expected} bytes, transport returned {actual}")
            }
        }
    }
}

impl<E: fmt::Debug> fmt::Display for Error<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Init { register, error } => write!(
                f,
                "failed to write {register:?} (0x{:02X}) during init: {error:?}",
                register.addr()
            ),
            Self::Read { kind, fault } => write!(f, "{kind:?} read failed: {fault}"),
            Self::Calibration { sample, fault } => {
                write!(f, "calibration aborted at sample {sample}: {fault}")
            }
            Self::InvalidConfig => f.write_str("invalid configuration"),
        }
    }
}

impl<E: fmt::Debug> core::error::Error for Error<E> {}
