// librc522/src/card/operations/auth.rs
//! Crypto1 authentication and teardown.

use log::debug;

use crate::chip::flags::status2;
use crate::chip::{PcdCommand, Register};
use crate::device::{Device, Initialized};
use crate::protocol::commands::encode_auth;
use crate::protocol::responses::expect_answer;
use crate::types::{AuthMode, MifareKey, Uid};
use crate::{Error, Result};

/// MFAuthent against `block`. Success needs a clean command and the
/// Crypto1 unit reported active in Status2.
pub fn authenticate(
    device: &mut Device<Initialized>,
    mode: AuthMode,
    block: u8,
    key: &MifareKey,
    uid: &Uid,
) -> Result<()> {
    let frame = encode_auth(mode, block, key, uid);
    expect_answer(device.execute(PcdCommand::MfAuthent, &frame))?;

    let s2 = device.read_register(Register::Status2)?;
    if s2 & status2::CRYPTO1_ON == 0 {
        debug!("auth {:?} block {}: crypto1 not on (status2 {:#04x})", mode, block, s2);
        return Err(Error::AuthFailed);
    }
    Ok(())
}

/// Leave the authenticated state so a new card can be talked to.
pub fn stop_crypto(device: &mut Device<Initialized>) -> Result<()> {
    device.clear_bit_mask(Register::Status2, status2::CRYPTO1_ON)
}
