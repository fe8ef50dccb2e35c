//! Unit tests for temperature sensor functionality

use crate::common::{
    Operation, assert_float_eq, create_mock_driver, create_mock_driver_with_offsets,
};
use mpu6050::Offsets;

#[test]
fn test_temperature_read_basic() {
    let (mut driver, interface) = create_mock_driver();

    // Formula: Temp_degC = TEMP_OUT / 340 + 36.53
    // For 25°C: TEMP_OUT = (25 - 36.53) * 340 = -3920.2 ≈ -3920
    interface.set_temperature_data(-3920);

    let temp = driver.read_temperature().unwrap();
    assert!((temp - 25.0).abs() < 0.01, "Expected ~25°C, got {}", temp);
}

#[test]
fn test_temperature_conversion() {
    let (mut driver, interface) = create_mock_driver();

    // Raw 0 is the offset temperature
    interface.set_temperature_data(0);
    assert_float_eq(driver.read_temperature().unwrap(), 36.53, 1e-9);

    interface.set_temperature_data(3400);
    assert_float_eq(driver.read_temperature().unwrap(), 46.53, 1e-9);

    interface.set_temperature_data(-3400);
    assert_float_eq(driver.read_temperature().unwrap(), 26.53, 1e-9);
}

#[test]
fn test_temperature_negative_raw_decoded_as_signed() {
    let (mut driver, interface) = create_mock_driver();

    // 0xFFFF must decode as -1, not 65535
    interface.set_register(0x41, 0xFF);
    interface.set_register(0x42, 0xFF);

    let temp = driver.read_temperature().unwrap();
    assert_float_eq(temp, -1.0 / 340.0 + 36.53, 1e-12);
}

#[test]
fn test_temperature_independent_of_offsets() {
    let (mut plain, plain_interface) = create_mock_driver();
    let (mut seeded, seeded_interface) = create_mock_driver_with_offsets(Offsets::FACTORY);
    plain_interface.set_temperature_data(1234);
    seeded_interface.set_temperature_data(1234);

    let reference = plain.read_temperature().unwrap();
    assert_eq!(seeded.read_temperature().unwrap(), reference);

    // Changing offsets, including the temperature slot, has no effect
    seeded.set_offsets(Offsets::new([9.0, 9.0, 9.0, 5000.0, 9.0, 9.0, 9.0]));
    assert_eq!(seeded.read_temperature().unwrap(), reference);
}

#[test]
fn test_temperature_reads_two_bytes() {
    let (mut driver, interface) = create_mock_driver();
    interface.clear_operations();

    driver.read_temperature().unwrap();

    assert_eq!(
        interface.operations(),
        vec![Operation::ReadBlock {
            address: 0x68,
            register: 0x41,
            len: 2,
        }]
    );
}

#[test]
fn test_temperature_stable_over_reads() {
    let (mut driver, interface) = create_mock_driver();
    interface.set_temperature_data(-521);

    let mut readings = Vec::new();
    for _ in 0..10 {
        readings.push(driver.read_temperature().unwrap());
    }

    let first = readings[0];
    for temp in readings {
        assert_eq!(temp, first);
    }
}
