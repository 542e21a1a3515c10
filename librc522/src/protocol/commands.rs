// librc522/src/protocol/commands.rs
//! Command bytes and frame builders for the card.

use crate::types::{AuthMode, MifareKey, RequestMode, Uid};

/// ISO14443A / MIFARE Classic command bytes, passed to the card unmodified.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PiccCommand {
    /// REQuest type A: wakes IDLE cards. 7-bit short frame.
    ReqA = 0x26,
    /// Wake-UP type A: wakes IDLE and HALT cards. 7-bit short frame.
    WupA = 0x52,
    /// Anticollision / select, cascade level 1.
    SelCl1 = 0x93,
    /// HaLT type A.
    HltA = 0x50,
    /// MIFARE Classic READ: one 16-byte block.
    MfRead = 0x30,
    /// MIFARE Classic WRITE: block address first, data after the ACK.
    MfWrite = 0xA0,
}

impl PiccCommand {
    /// Byte on the wire.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// NVB for an anticollision frame: SEL + NVB only, no UID bits known.
pub const NVB_ANTICOLLISION: u8 = 0x20;

/// NVB for a select frame: seven whole bytes (SEL, NVB, 4 UID, BCC).
pub const NVB_SELECT: u8 = 0x70;

/// Encode the single request byte (sent as a 7-bit short frame).
pub fn encode_request(mode: RequestMode) -> [u8; 1] {
    [mode.code()]
}

/// Encode the cascade-level-1 anticollision frame.
pub fn encode_anticollision() -> [u8; 2] {
    [PiccCommand::SelCl1.code(), NVB_ANTICOLLISION]
}

/// Encode a select frame without its trailing CRC (7 bytes).
pub fn encode_select(uid: &Uid) -> [u8; 7] {
    let mut buf = [0u8; 7];
    buf[0] = PiccCommand::SelCl1.code();
    buf[1] = NVB_SELECT;
    buf[2..].copy_from_slice(uid.as_bytes());
    buf
}

/// Encode the MFAuthent FIFO payload: mode, block, key (6), UID serial (4).
pub fn encode_auth(mode: AuthMode, block: u8, key: &MifareKey, uid: &Uid) -> [u8; 12] {
    let mut buf = [0u8; 12];
    buf[0] = mode.code();
    buf[1] = block;
    buf[2..8].copy_from_slice(key.as_bytes());
    buf[8..].copy_from_slice(uid.serial());
    buf
}

/// Encode a MIFARE READ command without its trailing CRC.
pub fn encode_read(block: u8) -> [u8; 2] {
    [PiccCommand::MfRead.code(), block]
}

/// Encode the first phase of a MIFARE WRITE without its trailing CRC.
pub fn encode_write(block: u8) -> [u8; 2] {
    [PiccCommand::MfWrite.code(), block]
}

/// Encode HLTA without its trailing CRC.
pub fn encode_halt() -> [u8; 2] {
    [PiccCommand::HltA.code(), 0x00]
}

/// Append a two-byte CRC to a frame.
pub fn with_crc(frame: &[u8], crc: [u8; 2]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(frame.len() + 2);
    buf.extend_from_slice(frame);
    buf.extend_from_slice(&crc);
    buf
}
