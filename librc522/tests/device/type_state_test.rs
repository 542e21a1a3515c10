#[path = "../common/mod.rs"]
mod common;

use librc522::chip::Register;
use librc522::device::{Device, DeviceBuilder, DriverConfig};
use librc522::transport::mock::MockTransport;
use librc522::transport::Transport;

#[test]
fn initialize_transitions_and_programs_chip() {
    common::init_logger();
    let mock = MockTransport::new();
    let boxed: Box<dyn Transport> = Box::new(mock.clone());
    let mut device = Device::new_with_transport(boxed).unwrap();

    // register access works before initialization
    device.write_register(Register::Mode, 0x00).unwrap();
    assert_eq!(mock.resets(), 0);

    let initialized = device.initialize().unwrap();
    assert_eq!(mock.resets(), 1);
    assert_eq!(mock.register(Register::Mode), 0x3D);
    assert_eq!(mock.register(Register::TxControl) & 0x03, 0x03);
    assert_eq!(initialized.config(), &DriverConfig::default());
}

#[test]
fn init_issues_a_single_reset() {
    let mock = MockTransport::new();
    DeviceBuilder::new()
        .with_transport(Box::new(mock.clone()))
        .build()
        .unwrap();
    // the reset is the only command written during init
    assert_eq!(mock.writes_to(Register::Command), vec![0x0F]);
    assert_eq!(mock.writes_to(Register::TMode), vec![0x8D]);
}

#[test]
fn version_register_is_readable() {
    let mock = MockTransport::new();
    mock.set_register(Register::Version, 0x92);
    let mut device = DeviceBuilder::new()
        .with_transport(Box::new(mock))
        .build_uninitialized()
        .unwrap();
    assert_eq!(device.version().unwrap(), 0x92);
}
