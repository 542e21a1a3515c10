#[path = "../common/mod.rs"]
mod common;

use librc522::protocol::{
    PiccCommand, encode_auth, encode_halt, encode_read, encode_select, encode_write, with_crc,
};
use librc522::types::{AuthMode, MifareKey};

#[test]
fn select_frame_is_nine_bytes_with_crc() {
    let uid = common::sample_uid();
    let cmd = encode_select(&uid);
    let frame = with_crc(&cmd, librc522::protocol::crc_a(&cmd));
    assert_eq!(frame, hex::decode("9370112233444451 9c".replace(' ', "")).unwrap());
}

#[test]
fn auth_payload_uses_serial_only() {
    let p = encode_auth(AuthMode::KeyA, 0x3F, &MifareKey::DEFAULT, &common::sample_uid());
    assert_eq!(p.len(), 12);
    assert_eq!(p[0], 0x60);
    assert_eq!(p[1], 0x3F);
    assert_eq!(&p[2..8], &[0xFF; 6]);
    assert_eq!(&p[8..], &common::sample_serial());
}

#[test]
fn card_command_bytes() {
    assert_eq!(encode_read(0x3F)[0], PiccCommand::MfRead.code());
    assert_eq!(encode_write(0x3F)[0], PiccCommand::MfWrite.code());
    assert_eq!(encode_halt(), [PiccCommand::HltA.code(), 0x00]);
    assert_eq!(PiccCommand::ReqA.code(), 0x26);
    assert_eq!(PiccCommand::WupA.code(), 0x52);
}
