//! Integration tests for basic workflow scenarios

use crate::common::mock_interface::MockInterface;
use crate::common::{Operation, assert_float_eq};
use mpu6050::{CalibrationConfig, I2C_ADDRESS_AD0_LOW, Mpu6050Driver, Offsets};

#[test]
fn test_complete_workflow() {
    let interface = MockInterface::new();
    let mut driver = Mpu6050Driver::new(interface.clone(), I2C_ADDRESS_AD0_LOW).unwrap();

    // Uncalibrated reads use the factory offsets
    interface.set_raw_data([657, -135, 15626, -3920, -311, 135, 10]);
    let accel = driver.read_accel().unwrap();
    assert_float_eq(accel.z, (15626.0 + 758.424) / 16384.0, 1e-9);

    // Sensor at rest with small biases
    interface.set_raw_sequence(vec![[40, -25, 16484, -3920, 7, -3, 11]; 2000]);
    let mut last_progress = 0.0;
    let offsets = driver
        .calibrate_with(CalibrationConfig::default(), |fraction: f32| {
            last_progress = fraction
        })
        .unwrap();
    assert_eq!(last_progress, 1.0);
    assert_eq!(offsets.values(), [40.0, -25.0, 100.0, -3920.0, 7.0, -3.0, 11.0]);

    // Level and still: 0 g, 0 g, 1 g and no rotation
    let reading = driver.read_all().unwrap();
    assert_eq!(<[f64; 3]>::from(reading.accel), [0.0, 0.0, 1.0]);
    assert_eq!(<[f64; 3]>::from(reading.gyro), [0.0, 0.0, 0.0]);
    assert!((reading.temperature - 25.0).abs() < 0.01);

    // Tilted 90° about Y: gravity on X
    interface.set_raw_data([16424, -25, 100, -3920, 7, -3, 11]);
    let accel = driver.read_accel().unwrap();
    assert_eq!([accel.x, accel.y, accel.z], [1.0, 0.0, 0.0]);
}

#[test]
fn test_restore_saved_offsets() {
    // Offsets saved after a previous calibration
    let saved = Offsets::new([40.0, -25.0, 100.0, -3920.0, 7.0, -3.0, 11.0]);

    let interface = MockInterface::new();
    let mut driver =
        Mpu6050Driver::with_offsets(interface.clone(), I2C_ADDRESS_AD0_LOW, saved).unwrap();

    interface.set_gyro_data(138, -3, 11);
    let gyro = driver.read_gyro().unwrap();
    assert_eq!([gyro.x, gyro.y, gyro.z], [1.0, 0.0, 0.0]);
}

#[test]
fn test_error_recovery() {
    let interface = MockInterface::new();
    let mut driver = Mpu6050Driver::new(interface.clone(), I2C_ADDRESS_AD0_LOW).unwrap();

    // Inject a read failure
    interface.fail_next_read();

    // This read should fail
    let result = driver.read_raw();
    assert!(result.is_err());

    // But subsequent reads should work (error was only for one operation)
    interface.set_raw_data([1, 2, 3, 4, 5, 6, 7]);
    let result = driver.read_raw();
    assert_eq!(result.unwrap().values(), [1, 2, 3, 4, 5, 6, 7]);
}

#[test]
fn test_operation_log_for_session() {
    let interface = MockInterface::new();
    let mut driver = Mpu6050Driver::new(interface.clone(), I2C_ADDRESS_AD0_LOW).unwrap();

    driver.read_accel().unwrap();
    driver.read_gyro().unwrap();
    driver.read_temperature().unwrap();

    let reads: Vec<(u8, usize)> = interface
        .operations()
        .into_iter()
        .filter_map(|op| match op {
            Operation::ReadBlock { register, len, .. } => Some((register, len)),
            Operation::WriteRegister { .. } => None,
        })
        .collect();

    assert_eq!(reads, vec![(0x3B, 6), (0x43, 6), (0x41, 2)]);
    // Reads never write to the device
    assert_eq!(interface.writes().len(), 3);
}
