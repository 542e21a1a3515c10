#[path = "../common/mod.rs"]
mod common;

use librc522::device::DriverConfig;
use librc522::test_support::block_reply;
use librc522::transport::mock::CardReply;
use librc522::{Error, Outcome, read_block};

#[test]
fn read_block_returns_sixteen_bytes() {
    let (mut dev, mock) = common::mock_device();
    let block = common::sample_block();
    mock.push_reply(block_reply(block.as_bytes()));

    let data = read_block(&mut dev, 4).unwrap();
    assert_eq!(data, block);
    assert_eq!(mock.transceived(), vec![vec![0x30, 0x04, 0x26, 0xEE]]);
}

#[test]
fn short_answer_is_rejected() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::bytes(&[0u8; 16]));
    let r = read_block(&mut dev, 4);
    assert!(matches!(
        r,
        Err(Error::BitLength {
            expected: 144,
            actual: 128
        })
    ));
}

#[test]
fn silent_card_is_an_error() {
    let (mut dev, _mock) = common::mock_device();
    let r = read_block(&mut dev, 4);
    assert!(matches!(r, Err(Error::NoAnswer)));
    assert_eq!(Outcome::of(&r), Outcome::Error);
}

#[test]
fn trailer_is_not_checked_by_default() {
    let (mut dev, mock) = common::mock_device();
    let mut reply = common::sample_block().as_bytes().to_vec();
    reply.extend_from_slice(&[0x00, 0x00]);
    mock.push_reply(CardReply::bytes(&reply));

    assert_eq!(read_block(&mut dev, 4).unwrap(), common::sample_block());
}

#[test]
fn strict_mode_verifies_trailer() {
    let (mut dev, mock) = common::mock_device_with(DriverConfig::strict());
    let block = common::sample_block();
    mock.push_reply(block_reply(block.as_bytes()));
    assert_eq!(read_block(&mut dev, 4).unwrap(), block);

    let mut reply = block.as_bytes().to_vec();
    reply.extend_from_slice(&[0x00, 0x00]);
    mock.push_reply(CardReply::bytes(&reply));
    let r = read_block(&mut dev, 4);
    assert!(matches!(
        r,
        Err(Error::CrcMismatch {
            actual: [0x00, 0x00],
            ..
        })
    ));
}

#[test]
fn strict_mode_rejects_stalled_crc_unit() {
    let (mut dev, mock) = common::mock_device_with(DriverConfig::strict());
    mock.set_crc_stall(true);
    let r = read_block(&mut dev, 4);
    assert!(matches!(r, Err(Error::CrcUnconfirmed)));
    // nothing reached the card
    assert!(mock.transceived().is_empty());
}
