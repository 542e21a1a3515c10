// librc522/src/card/operations/write.rs
//! Two-phase MIFARE WRITE.

use crate::chip::PcdCommand;
use crate::device::{Device, Initialized};
use crate::protocol::commands::{encode_write, with_crc};
use crate::protocol::responses::{expect_ack, expect_answer};
use crate::types::BlockData;
use crate::Result;

/// Two-phase MIFARE write: the command must be acknowledged before the
/// 16 data bytes go out, and the data must be acknowledged too.
pub fn write_block(device: &mut Device<Initialized>, block: u8, data: &BlockData) -> Result<()> {
    let cmd = encode_write(block);
    let crc = device.frame_crc(&cmd)?;
    let ex = expect_answer(device.execute(PcdCommand::Transceive, &with_crc(&cmd, crc)))?;
    expect_ack(ex.bit_len, ex.data.first().unwrap_or_default())?;

    let crc = device.frame_crc(data.as_bytes())?;
    let ex = expect_answer(device.execute(
        PcdCommand::Transceive,
        &with_crc(data.as_bytes(), crc),
    ))?;
    expect_ack(ex.bit_len, ex.data.first().unwrap_or_default())?;
    Ok(())
}
