// librc522/src/device/discovery.rs

use log::debug;

use crate::card::Card;
use crate::chip::flags::bit_framing;
use crate::chip::{PcdCommand, Register};
use crate::device::handle::{Device, Initialized};
use crate::protocol::commands::{
    encode_anticollision, encode_halt, encode_request, encode_select, with_crc,
};
use crate::protocol::responses::{expect_answer, expect_bits, ATQA_BITS, SAK_BITS, UID_BITS};
use crate::types::{Atqa, RequestMode, Uid};
use crate::Result;

impl Device<Initialized> {
    /// REQA / WUPA. Only an exact 16-bit answer counts.
    pub fn request(&mut self, mode: RequestMode) -> Result<Atqa> {
        self.write_register(Register::BitFraming, bit_framing::SHORT_FRAME)?;
        let ex = expect_answer(self.execute(PcdCommand::Transceive, &encode_request(mode)))?;
        expect_bits(ATQA_BITS, ex.bit_len)?;
        Ok(Atqa::from_bytes(ex.array()?))
    }

    /// Cascade level 1 anticollision: read the UID of the single card in
    /// the field and check its BCC.
    pub fn anticollision(&mut self) -> Result<Uid> {
        self.write_register(Register::BitFraming, bit_framing::FULL_BYTES)?;
        let ex = self.execute(PcdCommand::Transceive, &encode_anticollision())?;
        expect_bits(UID_BITS, ex.bit_len)?;
        let uid = Uid::from_bytes(ex.array()?);
        uid.verify()?;
        Ok(uid)
    }

    /// SELECT the card with `uid`; returns its SAK (size code).
    pub fn select(&mut self, uid: &Uid) -> Result<u8> {
        let cmd = encode_select(uid);
        let crc = self.frame_crc(&cmd)?;
        let ex = expect_answer(self.execute(PcdCommand::Transceive, &with_crc(&cmd, crc)))?;
        expect_bits(SAK_BITS, ex.bit_len)?;
        Ok(ex.array::<1>()?[0])
    }

    /// Like [`Device::select`], collapsed to a size code: 0 on any failure.
    pub fn select_tag(&mut self, uid: &Uid) -> u8 {
        self.select(uid).unwrap_or_else(|e| {
            debug!("select {} failed: {}", uid, e);
            0
        })
    }

    /// Select `uid` and wrap the answer as a [`Card`].
    pub fn select_card(&mut self, uid: &Uid) -> Result<Card> {
        let sak = self.select(uid)?;
        Ok(Card::new(*uid, sak))
    }

    /// HLTA. Best effort: the card sends no answer and any failure is
    /// only logged.
    pub fn halt(&mut self) {
        let cmd = encode_halt();
        let result = self
            .frame_crc(&cmd)
            .and_then(|crc| self.execute(PcdCommand::Transceive, &with_crc(&cmd, crc)));
        if let Err(e) = result {
            debug!("halt: {} (ignored)", e);
        }
    }

    /// Request, then anticollision on success. The card is always sent a
    /// halt afterwards, whatever the outcome. An empty field fails the
    /// request, so it is reported as an error.
    pub fn check_for_card(&mut self) -> Result<Uid> {
        let result = self
            .request(RequestMode::Idle)
            .and_then(|_| self.anticollision());
        self.halt();
        result
    }
}
