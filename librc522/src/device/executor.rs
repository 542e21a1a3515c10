// librc522/src/device/executor.rs

use log::{debug, warn};

use crate::chip::flags::{bit_framing, com_irq, control, error, fifo_level};
use crate::chip::{PcdCommand, Register};
use crate::constants::FIFO_CAPACITY;
use crate::device::handle::{Device, Initialized};
use crate::types::FifoBuffer;
use crate::{Error, Result};

/// What came back from one executor round trip.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Exchange {
    /// Bytes read out of the FIFO (at most [`FIFO_CAPACITY`]).
    pub data: FifoBuffer,
    /// Received length in bits as reported by the chip, before clamping.
    pub bit_len: u16,
    /// Bytes the chip reported beyond the receive window, still in the FIFO.
    pub unread: usize,
}

impl Exchange {
    /// First `N` received bytes as an array.
    pub fn array<const N: usize>(&self) -> Result<[u8; N]> {
        let data = self.data.as_slice();
        if data.len() < N {
            return Err(Error::InvalidLength {
                expected: N,
                actual: data.len(),
            });
        }
        let mut out = [0u8; N];
        out.copy_from_slice(&data[..N]);
        Ok(out)
    }
}

impl Device<Initialized> {
    /// Run one chip command: stage `outbound` in the FIFO, start the
    /// command, poll ComIrq until it finishes, and collect the reply.
    ///
    /// Returns `Err(Timeout)` when no completion flag shows up within the
    /// budget, `Err(Chip)` on fatal error flags and `Err(NoTag)` when the
    /// chip timer expired with nobody answering.
    pub fn execute(&mut self, command: PcdCommand, outbound: &[u8]) -> Result<Exchange> {
        let irq = command.irq_config();

        self.write_register(Register::ComIEn, irq.enable_register())?;
        self.clear_bit_mask(Register::ComIrq, com_irq::SET1)?;
        self.set_bit_mask(Register::FifoLevel, fifo_level::FLUSH)?;
        self.write_register(Register::Command, PcdCommand::Idle.code())?;

        for &b in outbound {
            self.write_register(Register::FifoData, b)?;
        }

        self.write_register(Register::Command, command.code())?;
        if command == PcdCommand::Transceive {
            self.set_bit_mask(Register::BitFraming, bit_framing::START_SEND)?;
        }

        let mut countdown = self.config().command_poll.start();
        let mut flags = None;
        while countdown.tick() {
            let n = self.read_register(Register::ComIrq)?;
            if irq.is_done(n) {
                flags = Some(n);
                break;
            }
        }

        self.clear_bit_mask(Register::BitFraming, bit_framing::START_SEND)?;

        let Some(flags) = flags else {
            debug!("{:?}: no completion flag within budget", command);
            return Err(Error::Timeout);
        };

        let errors = self.read_register(Register::Error)?;
        if errors & error::FATAL != 0 {
            debug!("{:?}: chip error flags {:#04x}", command, errors);
            return Err(Error::Chip { flags: errors });
        }
        if irq.is_no_tag(flags) {
            debug!("{:?}: no tag", command);
            return Err(Error::NoTag);
        }

        let mut exchange = Exchange::default();
        if command == PcdCommand::Transceive {
            self.collect(&mut exchange)?;
        }
        debug!(
            "{:?}: ok, {} bits {:02x?}",
            command,
            exchange.bit_len,
            exchange.data.as_slice()
        );
        Ok(exchange)
    }

    fn collect(&mut self, exchange: &mut Exchange) -> Result<()> {
        let reported = (self.read_register(Register::FifoLevel)? & fifo_level::LEVEL_MASK) as usize;
        let last_bits = (self.read_register(Register::Control)? & control::RX_LAST_BITS) as usize;

        let bits = if last_bits != 0 {
            reported.saturating_sub(1) * 8 + last_bits
        } else {
            reported * 8
        };
        exchange.bit_len = bits as u16;

        let n = reported.clamp(1, FIFO_CAPACITY);
        if n != reported {
            warn!("fifo level {} clamped to {}", reported, n);
        }
        for _ in 0..n {
            let b = self.read_register(Register::FifoData)?;
            exchange.data.push(b)?;
        }
        exchange.unread = reported.saturating_sub(n);
        Ok(())
    }
}
