// librc522/src/card/mod.rs

use crate::device::{Device, Initialized};
use crate::types::{AuthMode, BlockData, MifareKey, Uid};
use crate::Result;

mod info;
pub use info::CardType;

/// Free functions behind the [`Card`] convenience methods.
pub mod operations;

/// A selected card: its UID and the SAK it answered SELECT with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Card {
    uid: Uid,
    sak: u8,
}

impl Card {
    /// Pair a UID with its SAK.
    pub fn new(uid: Uid, sak: u8) -> Self {
        Self { uid, sak }
    }

    /// UID from anticollision.
    pub fn uid(&self) -> &Uid {
        &self.uid
    }

    /// Select acknowledge byte.
    pub fn sak(&self) -> u8 {
        self.sak
    }

    /// Card family guessed from the SAK.
    pub fn card_type(&self) -> CardType {
        CardType::from_sak(self.sak)
    }

    /// Authenticate `block` with this card's UID.
    pub fn authenticate(
        &self,
        device: &mut Device<Initialized>,
        mode: AuthMode,
        block: u8,
        key: &MifareKey,
    ) -> Result<()> {
        operations::authenticate(device, mode, block, key, &self.uid)
    }

    /// See [`operations::read_block`].
    pub fn read_block(&self, device: &mut Device<Initialized>, block: u8) -> Result<BlockData> {
        operations::read_block(device, block)
    }

    /// See [`operations::write_block`].
    pub fn write_block(
        &self,
        device: &mut Device<Initialized>,
        block: u8,
        data: &BlockData,
    ) -> Result<()> {
        operations::write_block(device, block, data)
    }
}
