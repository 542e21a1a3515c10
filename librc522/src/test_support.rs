//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::device::{Device, DriverConfig, Initialized};
use crate::transport::mock::{CardReply, MockTransport};
use crate::types::Uid;
use crate::Result;

/// Create and initialize a Device<Initialized> on a fresh simulated chip.
/// The returned MockTransport shares state with the one inside the device.
#[doc(hidden)]
pub fn initialized_mock_device(
    config: DriverConfig,
) -> Result<(Device<Initialized>, MockTransport)> {
    let mock = MockTransport::new();
    let device = Device::new_with_transport(Box::new(mock.clone()))?
        .with_config(config)
        .initialize()?;
    Ok((device, mock))
}

/// Queue the replies of a single card going through REQA and
/// anticollision: ATQA 0x0004 then the UID with its BCC.
#[doc(hidden)]
pub fn seed_card_present(mock: &MockTransport, uid: &Uid) {
    mock.push_reply(CardReply::bytes(&[0x04, 0x00]));
    mock.push_reply(CardReply::bytes(uid.as_bytes()));
}

/// 16 data bytes followed by their CRC_A, as a card answers READ.
#[doc(hidden)]
pub fn block_reply(data: &[u8; 16]) -> CardReply {
    let crc = crate::protocol::checksum::crc_a(data);
    let mut bytes = data.to_vec();
    bytes.extend_from_slice(&crc);
    CardReply::bytes(&bytes)
}
