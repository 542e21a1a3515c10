// helpers.rs — logger setup and mock-backed devices

use librc522::device::{Device, DriverConfig, Initialized};
use librc522::transport::mock::MockTransport;

pub fn init_logger() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Initialized device on a fresh simulated chip plus a handle to inspect it.
pub fn mock_device() -> (Device<Initialized>, MockTransport) {
    mock_device_with(DriverConfig::default())
}

pub fn mock_device_with(config: DriverConfig) -> (Device<Initialized>, MockTransport) {
    init_logger();
    librc522::test_support::initialized_mock_device(config).unwrap()
}
