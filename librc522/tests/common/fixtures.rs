// fixtures.rs — commonly used UIDs, keys and card replies

use librc522::types::{BlockData, MifareKey, Uid};

pub fn sample_serial() -> [u8; 4] {
    [0x11, 0x22, 0x33, 0x44]
}

/// 0x11 ^ 0x22 ^ 0x33 ^ 0x44 = 0x44
pub fn sample_uid() -> Uid {
    Uid::from_bytes([0x11, 0x22, 0x33, 0x44, 0x44])
}

pub fn sample_key() -> MifareKey {
    MifareKey::new(hex_array("a0a1a2a3a4a5"))
}

pub fn sample_block() -> BlockData {
    BlockData::from_bytes(hex_array("000102030405060708090a0b0c0d0e0f"))
}

/// ATQA of a MIFARE Classic 1K
pub fn atqa_1k() -> [u8; 2] {
    [0x04, 0x00]
}

/// SAK 0x08 followed by its CRC_A
pub fn sak_1k_frame() -> Vec<u8> {
    hex::decode("08b6dd").unwrap()
}

pub fn hex_array<const N: usize>(s: &str) -> [u8; N] {
    let v = hex::decode(s).unwrap();
    let mut out = [0u8; N];
    out.copy_from_slice(&v);
    out
}
