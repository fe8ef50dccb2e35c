//! Common test utilities and mock implementations


pub use mock_interface::{MockError, Operation};
pub use test_utils::{assert_float_eq, create_mock_driver, create_mock_driver_with_offsets};
