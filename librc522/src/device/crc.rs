// librc522/src/device/crc.rs

use log::warn;

use crate::chip::flags::{div_irq, fifo_level};
use crate::chip::{PcdCommand, Register};
use crate::device::handle::{Device, Initialized};
use crate::{Error, Result};

/// Output of the chip's CRC coprocessor (CRC_A, low byte first).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrcResult {
    /// CRCResultRegL then CRCResultRegM.
    pub bytes: [u8; 2],
    /// `false` when the poll budget ran out before CRCIRq was raised; the
    /// result registers were read anyway and may be stale.
    pub confirmed: bool,
}

impl Device<Initialized> {
    /// Run `data` through the CRC coprocessor.
    pub fn calculate_crc(&mut self, data: &[u8]) -> Result<CrcResult> {
        // Set2 low: writing a 1 clears CRCIRq
        self.write_register(Register::DivIrq, div_irq::CRC)?;
        self.set_bit_mask(Register::FifoLevel, fifo_level::FLUSH)?;
        for &b in data {
            self.write_register(Register::FifoData, b)?;
        }
        self.write_register(Register::Command, PcdCommand::CalcCrc.code())?;

        let mut countdown = self.config().crc_poll.start();
        let mut confirmed = false;
        while countdown.tick() {
            if self.read_register(Register::DivIrq)? & div_irq::CRC != 0 {
                confirmed = true;
                break;
            }
        }

        let lo = self.read_register(Register::CrcResultL)?;
        let hi = self.read_register(Register::CrcResultM)?;
        if !confirmed {
            warn!(
                "crc coprocessor did not confirm completion; using {:02x} {:02x} unverified",
                lo, hi
            );
        }
        Ok(CrcResult {
            bytes: [lo, hi],
            confirmed,
        })
    }

    /// CRC to append to an outbound frame. Unconfirmed results are an
    /// error in strict mode.
    pub(crate) fn frame_crc(&mut self, data: &[u8]) -> Result<[u8; 2]> {
        let crc = self.calculate_crc(data)?;
        if !crc.confirmed && self.config().strict_crc {
            return Err(Error::CrcUnconfirmed);
        }
        Ok(crc.bytes)
    }
}
