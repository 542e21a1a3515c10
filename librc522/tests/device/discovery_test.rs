#[path = "../common/mod.rs"]
mod common;

use librc522::transport::mock::CardReply;
use librc522::types::{RequestMode, Uid};
use librc522::{Error, Outcome};
use proptest::prelude::*;

#[test]
fn select_card_reports_type() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::bytes(&common::sak_1k_frame()));

    let card = dev.select_card(&common::sample_uid()).unwrap();
    assert_eq!(card.sak(), 0x08);
    assert!(card.card_type().is_mifare_classic());
}

#[test]
fn wake_up_all_uses_wupa() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::bytes(&common::atqa_1k()));
    let atqa = dev.request(RequestMode::All).unwrap();
    assert_eq!(atqa.as_u16(), 0x0004);
    assert_eq!(mock.transceived(), vec![vec![0x52]]);
}

#[test]
fn empty_field_fails_request() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::NoTag);
    let r = dev.request(RequestMode::Idle);
    assert!(matches!(r, Err(Error::NoAnswer)));
    assert_eq!(Outcome::of(&r), Outcome::Error);
}

#[test]
fn empty_field_during_anticollision_is_no_tag() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::NoTag);
    let r = dev.anticollision();
    assert!(matches!(r, Err(Error::NoTag)));
    assert_eq!(Outcome::of(&r), Outcome::NoTagError);
}

#[test]
fn silent_card_fails_select() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::NoTag);
    let r = dev.select(&common::sample_uid());
    assert!(matches!(r, Err(Error::NoAnswer)));
}

#[test]
fn anticollision_requires_five_bytes() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::bytes(&[0x11, 0x22, 0x33, 0x44]));
    assert!(matches!(
        dev.anticollision(),
        Err(Error::BitLength { expected: 40, actual: 32 })
    ));
}

proptest! {
    #[test]
    fn anticollision_ok_iff_bcc_matches(serial in any::<[u8; 4]>(), bit in 0u8..8) {
        let (mut dev, mock) = common::mock_device();
        let good = Uid::from_serial(serial);
        let mut bad = *good.as_bytes();
        bad[4] ^= 1 << bit;

        mock.push_reply(CardReply::bytes(good.as_bytes()));
        mock.push_reply(CardReply::bytes(&bad));

        prop_assert_eq!(dev.anticollision().unwrap(), good);
        let is_checksum_error = matches!(dev.anticollision(), Err(Error::UidChecksum { .. }));
        prop_assert!(is_checksum_error);
    }

    #[test]
    fn request_needs_exactly_sixteen_bits(len in 0usize..8, last_bits in 0u8..8) {
        let (mut dev, mock) = common::mock_device();
        let reply = vec![0x04; len];
        mock.push_reply(CardReply::bits(&reply, last_bits));

        let bits = if last_bits != 0 {
            len.saturating_sub(1) * 8 + last_bits as usize
        } else {
            len * 8
        };
        let r = dev.request(RequestMode::Idle);
        prop_assert_eq!(r.is_ok(), bits == 16);
        if bits != 16 {
            prop_assert_eq!(Outcome::of(&r), Outcome::Error);
        }
    }

    #[test]
    fn select_size_is_first_byte_or_zero(reply in prop::collection::vec(any::<u8>(), 1..6)) {
        let (mut dev, mock) = common::mock_device();
        mock.push_reply(CardReply::bytes(&reply));

        let size = dev.select_tag(&common::sample_uid());
        if reply.len() == 3 {
            prop_assert_eq!(size, reply[0]);
        } else {
            prop_assert_eq!(size, 0);
        }
    }
}

#[test]
fn select_tag_zero_when_executor_fails() {
    let (mut dev, mock) = common::mock_device();
    mock.push_reply(CardReply::ChipError { flags: 0x02 });
    assert_eq!(dev.select_tag(&common::sample_uid()), 0);
}
