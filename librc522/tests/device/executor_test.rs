#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use librc522::chip::{PcdCommand, Register};
use librc522::device::DriverConfig;
use librc522::transport::mock::CardReply;
use librc522::utils::PollLimit;
use librc522::{Error, Outcome};

#[test]
fn never_completing_command_uses_whole_budget() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::Silent);

    let r = dev.execute(PcdCommand::Transceive, &[0x26]);
    assert!(matches!(r, Err(Error::Timeout)));
    assert_eq!(Outcome::of(&r), Outcome::Error);
    assert_eq!(mock.irq_polls(), 2000);
    // nothing was read back out of the FIFO
    assert_eq!(mock.register(Register::BitFraming) & 0x80, 0);
}

#[test]
fn deadline_budget_also_times_out() {
    let config = DriverConfig {
        command_poll: PollLimit::Deadline(Duration::from_millis(5)),
        ..DriverConfig::default()
    };
    let (mut dev, mock) = common::mock_device_with(config);
    mock.push_reply(CardReply::Silent);

    assert!(matches!(
        dev.execute(PcdCommand::Transceive, &[0x26]),
        Err(Error::Timeout)
    ));
    assert!(mock.irq_polls() >= 1);
}

#[test]
fn outbound_bytes_are_staged_in_order() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::bytes(&[0x01]));
    dev.execute(PcdCommand::Transceive, &[1, 2, 3, 4, 5]).unwrap();
    assert_eq!(mock.transceived(), vec![vec![1, 2, 3, 4, 5]]);
    assert_eq!(mock.writes_to(Register::ComIEn).last(), Some(&0xF7));
}

#[test]
fn fifo_level_above_capacity_is_clamped() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::bytes(&[0xAB; 4]));
    mock.set_fifo_level(Some(40));

    let ex = dev.execute(PcdCommand::Transceive, &[0x30, 0x00]).unwrap();
    assert_eq!(ex.data.len(), 16);
    assert_eq!(ex.bit_len, 320);
    assert_eq!(&ex.data.as_slice()[..4], &[0xAB; 4]);
}

#[test]
fn buffer_overflow_flag_is_an_error() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::ChipError { flags: 0x10 });
    let r = dev.execute(PcdCommand::Transceive, &[0x93, 0x20]);
    assert!(matches!(r, Err(Error::Chip { flags: 0x10 })));
}

#[test]
fn transport_failure_is_an_error() {
    let (mut dev, mock) = common::mock_device();
    mock.set_fail_transfers(true);
    let r = dev.execute(PcdCommand::Transceive, &[0x26]);
    assert!(matches!(r, Err(Error::Transport(_))));
    assert_eq!(Outcome::of(&r), Outcome::Error);
}
