// librc522/src/protocol/responses.rs
//! Shape checks for card replies.

use crate::{Error, Result};

/// ATQA length in bits.
pub const ATQA_BITS: u16 = 16;
/// Anticollision reply: four UID bytes plus BCC.
pub const UID_BITS: u16 = 40;
/// SELECT reply: SAK plus CRC_A.
pub const SAK_BITS: u16 = 24;
/// 16 data bytes + CRC_A
pub const READ_BITS: u16 = 144;
/// MIFARE ACK/NAK is a 4-bit frame.
pub const ACK_BITS: u16 = 4;

/// Low nibble of a MIFARE acknowledge.
pub const MIFARE_ACK: u8 = 0x0A;

/// Require an exact response length.
pub fn expect_bits(expected: u16, actual: u16) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::BitLength { expected, actual })
    }
}

/// A card-level command that nobody answered is a failed exchange, not an
/// empty field: only anticollision reports `NoTag` to the caller.
pub fn expect_answer<T>(result: Result<T>) -> Result<T> {
    match result {
        Err(Error::NoTag) => Err(Error::NoAnswer),
        other => other,
    }
}

/// Check a 4-bit MIFARE acknowledge frame.
pub fn expect_ack(bit_len: u16, first: u8) -> Result<()> {
    expect_bits(ACK_BITS, bit_len)?;
    if first & 0x0F != MIFARE_ACK {
        return Err(Error::Nack { ack: first });
    }
    Ok(())
}
