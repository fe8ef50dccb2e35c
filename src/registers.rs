//! Register definitions for the MPU-6050
//!
//! Only the registers the driver touches are listed. Addresses are part of the
//! wire contract with the device and must not change.
//!
//! ## Data registers
//! The measurement registers are laid out contiguously, big-endian, starting at
//! `ACCEL_XOUT_H`:
//!
//! | Offset | Content |
//! |---|---|
//! | 0..6 | accelerometer X, Y, Z |
//! | 6..8 | temperature |
//! | 8..14 | gyroscope X, Y, Z |

/// MPU-6050 register addresses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[repr(u8)]
pub enum Register {
    /// `SMPRT_DIV` - Sample rate divider (0x19)
    ///
    /// Output rate = gyroscope output rate / (1 + value). With the DLPF enabled
    /// the gyroscope output rate is 1 kHz.
    SmprtDiv = 0x19,
    /// `CONFIG` - FSYNC and digital low pass filter configuration (0x1A)
    Config = 0x1A,
    /// `ACCEL_XOUT_H` - Accelerometer X high byte (0x3B), start of the burst read
    AccelXoutH = 0x3B,
    /// `TEMP_OUT_H` - Temperature high byte (0x41)
    TempOutH = 0x41,
    /// `GYRO_XOUT_H` - Gyroscope X high byte (0x43)
    GyroXoutH = 0x43,
    /// `PWR_MGMT_1` - Power management 1 (0x6B)
    PwrMgmt1 = 0x6B,
}

impl Register {
    /// Register address on the bus
    #[must_use]
    pub const fn addr(self) -> u8 {
        self as u8
    }
}

/// `PWR_MGMT_1`: clear `SLEEP`, `CLKSEL` = 1 (PLL with X-axis gyroscope reference)
pub const PWR_MGMT_1_PLL_X_GYRO: u8 = 1;

/// `CONFIG`: `DLPF_CFG` = 3 (accel 44 Hz / gyro 42 Hz bandwidth)
pub const CONFIG_DLPF_44HZ: u8 = 3;

/// `SMPRT_DIV`: 1 kHz / (1 + 4) = 200 Hz
pub const SMPRT_DIV_200HZ: u8 = 4;

/// Startup register writes, issued in order by the driver constructor
pub const INIT_SEQUENCE: [(Register, u8); 3] = [
    (Register::PwrMgmt1, PWR_MGMT_1_PLL_X_GYRO),
    (Register::Config, CONFIG_DLPF_44HZ),
    (Register::SmprtDiv, SMPRT_DIV_200HZ),
];
