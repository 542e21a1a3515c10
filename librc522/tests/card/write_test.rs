#[path = "../common/mod.rs"]
mod common;

use librc522::test_support::block_reply;
use librc522::transport::mock::CardReply;
use librc522::{Error, write_block};
use proptest::prelude::*;

fn data_frame() -> Vec<u8> {
    let block = common::sample_block();
    let mut frame = block.as_bytes().to_vec();
    frame.extend_from_slice(&librc522::protocol::crc_a(block.as_bytes()));
    frame
}

#[test]
fn acknowledged_write_sends_both_phases() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::ack());
    mock.push_reply(CardReply::ack());

    write_block(&mut dev, 4, &common::sample_block()).unwrap();
    let frames = mock.transceived();
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0], vec![0xA0, 0x04, 0x7B, 0xF7]);
    assert_eq!(frames[1], data_frame());
}

#[test]
fn command_nack_never_sends_data() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::nack(0x04));

    let r = write_block(&mut dev, 4, &common::sample_block());
    assert!(matches!(r, Err(Error::Nack { ack: 0x04 })));
    assert_eq!(mock.transceived().len(), 1);
    // CRC input + the 4-byte command frame only
    assert_eq!(mock.fifo_writes().len(), 6);
}

#[test]
fn data_nack_after_command_ack() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::bits(&[0x2A], 4));
    mock.push_reply(CardReply::bits(&[0x2B], 4));

    let r = write_block(&mut dev, 4, &common::sample_block());
    assert!(matches!(r, Err(Error::Nack { ack: 0x2B })));

    let sent = mock.transceived();
    assert_eq!(sent.len(), 2);
    assert_eq!(sent.iter().filter(|f| **f == data_frame()).count(), 1);
}

#[test]
fn silent_card_fails_either_phase() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::NoTag);
    let r = write_block(&mut dev, 4, &common::sample_block());
    assert!(matches!(r, Err(Error::NoAnswer)));
    assert_eq!(mock.transceived().len(), 1);

    mock.push_reply(CardReply::ack());
    mock.push_reply(CardReply::NoTag);
    let r = write_block(&mut dev, 4, &common::sample_block());
    assert!(matches!(r, Err(Error::NoAnswer)));
    assert_eq!(librc522::Outcome::of(&r), librc522::Outcome::Error);
    assert_eq!(mock.transceived().len(), 3);
}

#[test]
fn full_byte_answer_is_not_an_ack() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::bytes(&[0x0A]));
    let r = write_block(&mut dev, 4, &common::sample_block());
    assert!(matches!(r, Err(Error::BitLength { expected: 4, actual: 8 })));
    assert_eq!(mock.transceived().len(), 1);
}

#[test]
fn write_then_read_back() {
    let (mut dev, mock) = common::mock_device();
    let block = common::sample_block();
    mock.push_reply(CardReply::ack());
    mock.push_reply(CardReply::ack());
    mock.push_reply(block_reply(block.as_bytes()));

    write_block(&mut dev, 8, &block).unwrap();
    assert_eq!(librc522::read_block(&mut dev, 8).unwrap(), block);
}

proptest! {
    #[test]
    fn data_only_follows_an_ack(nibble in 0u8..16) {
        let (mut dev, mock) = common::mock_device();
        mock.push_reply(CardReply::bits(&[nibble], 4));
        mock.push_reply(CardReply::ack());

        let r = write_block(&mut dev, 4, &common::sample_block());
        let data_sent = mock.transceived().iter().any(|f| *f == data_frame());
        prop_assert_eq!(data_sent, nibble == 0x0A);
        prop_assert_eq!(r.is_ok(), nibble == 0x0A);
    }
}
