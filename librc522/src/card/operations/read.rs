// librc522/src/card/operations/read.rs
//! MIFARE READ.

use log::debug;

use crate::chip::{PcdCommand, Register};
use crate::device::{Device, Exchange, Initialized};
use crate::protocol::checksum::crc_a;
use crate::protocol::commands::{encode_read, with_crc};
use crate::protocol::responses::{expect_answer, expect_bits, READ_BITS};
use crate::types::BlockData;
use crate::{Error, Result};

/// Read one 16-byte block.
///
/// The card answers 16 data bytes plus CRC_A. Only the data fits the
/// receive window; the trailer is checked in strict CRC mode and left in
/// the FIFO otherwise.
pub fn read_block(device: &mut Device<Initialized>, block: u8) -> Result<BlockData> {
    let cmd = encode_read(block);
    let crc = device.frame_crc(&cmd)?;
    let ex = expect_answer(device.execute(PcdCommand::Transceive, &with_crc(&cmd, crc)))?;
    expect_bits(READ_BITS, ex.bit_len)?;

    let data = BlockData::from_bytes(ex.array()?);
    if device.config().strict_crc {
        verify_trailer(device, &ex, &data)?;
    }
    Ok(data)
}

fn verify_trailer(device: &mut Device<Initialized>, ex: &Exchange, data: &BlockData) -> Result<()> {
    if ex.unread < 2 {
        return Err(Error::InvalidLength {
            expected: 2,
            actual: ex.unread,
        });
    }
    let actual = [
        device.read_register(Register::FifoData)?,
        device.read_register(Register::FifoData)?,
    ];
    let expected = crc_a(data.as_bytes());
    if actual != expected {
        debug!("block crc {:02x?} != {:02x?}", actual, expected);
        return Err(Error::CrcMismatch { expected, actual });
    }
    Ok(())
}
