// librc522/src/transport/mock.rs
//! A simulated chip for tests: register file, FIFO and a scripted card.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use crate::chip::flags::{com_irq, control, div_irq, fifo_level, status2};
use crate::chip::register::parse_frame;
use crate::chip::{PcdCommand, Register};
use crate::protocol::checksum::crc_a;
use crate::transport::traits::Transport;
use crate::{Error, Result};

/// What the simulated card/chip does when the driver starts a
/// Transceive or MFAuthent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CardReply {
    /// The card answers with `data`; the last byte carries `last_bits`
    /// valid bits (0 means all eight).
    Data {
        /// Bytes placed in the FIFO.
        data: Vec<u8>,
        /// RxLastBits reported in ControlReg.
        last_bits: u8,
    },
    /// Reception completes with these ErrorReg flags set.
    ChipError {
        /// ErrorReg value.
        flags: u8,
    },
    /// The chip timer expires: nobody answered.
    NoTag,
    /// No completion flag is ever raised.
    Silent,
    /// MFAuthent completes; `crypto` decides whether Crypto1 comes up.
    Auth {
        /// Status2Reg MFCrypto1On after the command.
        crypto: bool,
    },
}

impl CardReply {
    /// Whole-byte answer.
    pub fn bytes(data: &[u8]) -> Self {
        CardReply::Data {
            data: data.to_vec(),
            last_bits: 0,
        }
    }

    /// Answer whose final byte is only partially valid.
    pub fn bits(data: &[u8], last_bits: u8) -> Self {
        CardReply::Data {
            data: data.to_vec(),
            last_bits,
        }
    }

    /// 4-bit MIFARE acknowledge.
    pub fn ack() -> Self {
        Self::bits(&[0x0A], 4)
    }

    /// 4-bit frame that is not an acknowledge.
    pub fn nack(code: u8) -> Self {
        Self::bits(&[code & 0x0F], 4)
    }
}

/// One command the simulated chip executed against the card.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentFrame {
    /// Transceive or MFAuthent.
    pub command: PcdCommand,
    /// FIFO contents when the command started.
    pub bytes: Vec<u8>,
    /// TxLastBits at the moment the frame went out (7 for REQA/WUPA).
    pub tx_last_bits: u8,
}

#[derive(Debug)]
struct SimChip {
    regs: [u8; 64],
    /// Plain register file: no chip side effects at all.
    passthrough: bool,
    selected: bool,
    pending: Option<(bool, u8)>,
    fifo: VecDeque<u8>,
    rx: VecDeque<u8>,
    replies: VecDeque<CardReply>,
    crc_stall: bool,
    fifo_level_override: Option<u8>,
    fail_transfers: bool,
    frames: Vec<SentFrame>,
    fifo_writes: Vec<u8>,
    writes: Vec<(u8, u8)>,
    irq_polls: usize,
    crc_polls: usize,
    resets: usize,
}

impl SimChip {
    fn new(passthrough: bool) -> Self {
        Self {
            regs: [0; 64],
            passthrough,
            selected: false,
            pending: None,
            fifo: VecDeque::new(),
            rx: VecDeque::new(),
            replies: VecDeque::new(),
            crc_stall: false,
            fifo_level_override: None,
            fail_transfers: false,
            frames: Vec::new(),
            fifo_writes: Vec::new(),
            writes: Vec::new(),
            irq_polls: 0,
            crc_polls: 0,
            resets: 0,
        }
    }

    fn reg(&self, r: Register) -> u8 {
        self.regs[r.addr() as usize]
    }

    fn reg_mut(&mut self, r: Register) -> &mut u8 {
        &mut self.regs[r.addr() as usize]
    }

    fn current_command(&self) -> Option<PcdCommand> {
        PcdCommand::from_code(self.reg(Register::Command))
    }

    fn read(&mut self, addr: u8) -> u8 {
        if self.passthrough {
            return self.regs[addr as usize];
        }
        match addr {
            a if a == Register::ComIrq.addr() => {
                self.irq_polls += 1;
                self.reg(Register::ComIrq)
            }
            a if a == Register::DivIrq.addr() => {
                self.crc_polls += 1;
                self.reg(Register::DivIrq)
            }
            a if a == Register::FifoLevel.addr() => self
                .fifo_level_override
                .unwrap_or(self.rx.len().min(fifo_level::LEVEL_MASK as usize) as u8),
            a if a == Register::FifoData.addr() => self.rx.pop_front().unwrap_or(0),
            a => self.regs[a as usize],
        }
    }

    fn write(&mut self, addr: u8, value: u8) {
        self.writes.push((addr, value));
        if self.passthrough {
            self.regs[addr as usize] = value;
            return;
        }
        match addr {
            a if a == Register::Command.addr() => {
                *self.reg_mut(Register::Command) = value;
                self.irq_polls = 0;
                self.crc_polls = 0;
                match PcdCommand::from_code(value) {
                    Some(PcdCommand::CalcCrc) => self.calc_crc(),
                    Some(PcdCommand::MfAuthent) => self.run(PcdCommand::MfAuthent),
                    Some(PcdCommand::SoftReset) => self.resets += 1,
                    _ => {}
                }
            }
            a if a == Register::BitFraming.addr() => {
                *self.reg_mut(Register::BitFraming) = value;
                if value & 0x80 != 0 && self.current_command() == Some(PcdCommand::Transceive) {
                    self.run(PcdCommand::Transceive);
                }
            }
            a if a == Register::ComIrq.addr() || a == Register::DivIrq.addr() => {
                // Set1/Set2: bit 7 picks set or clear for the marked bits
                let bits = value & 0x7F;
                let reg = &mut self.regs[a as usize];
                if value & 0x80 != 0 {
                    *reg |= bits;
                } else {
                    *reg &= !bits;
                }
            }
            a if a == Register::FifoLevel.addr() => {
                if value & fifo_level::FLUSH != 0 {
                    self.fifo.clear();
                    self.rx.clear();
                }
            }
            a if a == Register::FifoData.addr() => {
                self.fifo.push_back(value);
                self.fifo_writes.push(value);
            }
            a => self.regs[a as usize] = value,
        }
    }

    fn calc_crc(&mut self) {
        let data: Vec<u8> = self.fifo.drain(..).collect();
        if self.crc_stall {
            return;
        }
        let crc = crc_a(&data);
        *self.reg_mut(Register::CrcResultL) = crc[0];
        *self.reg_mut(Register::CrcResultM) = crc[1];
        *self.reg_mut(Register::DivIrq) |= div_irq::CRC;
    }

    fn run(&mut self, command: PcdCommand) {
        let bytes: Vec<u8> = self.fifo.drain(..).collect();
        let tx_last_bits = self.reg(Register::BitFraming) & 0x07;
        self.frames.push(SentFrame {
            command,
            bytes,
            tx_last_bits,
        });
        *self.reg_mut(Register::Error) = 0;

        match self.replies.pop_front().unwrap_or(CardReply::NoTag) {
            CardReply::Data { data, last_bits } => {
                self.rx = data.into();
                let ctrl = self.reg_mut(Register::Control);
                *ctrl = (*ctrl & !control::RX_LAST_BITS) | (last_bits & control::RX_LAST_BITS);
                *self.reg_mut(Register::ComIrq) |= com_irq::RX | com_irq::IDLE;
            }
            CardReply::ChipError { flags } => {
                *self.reg_mut(Register::Error) = flags;
                *self.reg_mut(Register::ComIrq) |= com_irq::RX | com_irq::IDLE | com_irq::ERR;
            }
            CardReply::NoTag => {
                *self.reg_mut(Register::ComIrq) |= com_irq::TIMER;
            }
            CardReply::Silent => {}
            CardReply::Auth { crypto } => {
                *self.reg_mut(Register::ComIrq) |= com_irq::IDLE;
                let s2 = self.reg_mut(Register::Status2);
                if crypto {
                    *s2 |= status2::CRYPTO1_ON;
                } else {
                    *s2 &= !status2::CRYPTO1_ON;
                }
            }
        }
    }

    fn transfer(&mut self, byte: u8) -> Result<u8> {
        if self.fail_transfers {
            return Err(Error::Transport("mock bus fault".into()));
        }
        if !self.selected {
            return Err(Error::Transport("transfer without chip select".into()));
        }
        match self.pending {
            None => {
                self.pending = Some(parse_frame(byte));
                Ok(0)
            }
            Some((true, addr)) => {
                self.pending = None;
                Ok(self.read(addr))
            }
            Some((false, addr)) => {
                // burst writes keep targeting the same address
                self.write(addr, byte);
                Ok(0)
            }
        }
    }
}

/// Mock transport for unit tests: a register-level simulation of the
/// reader chip with a scripted card behind it.
///
/// Cloning yields another handle to the same simulated chip, so a test can
/// keep one handle for assertions after boxing the other into a `Device`.
#[derive(Debug, Clone)]
pub struct MockTransport {
    chip: Rc<RefCell<SimChip>>,
}

impl MockTransport {
    /// Simulated chip with command side effects (FIFO, IRQs, CRC unit).
    pub fn new() -> Self {
        Self {
            chip: Rc::new(RefCell::new(SimChip::new(false))),
        }
    }

    /// Plain 64-entry register file: every address reads back what was
    /// last written to it.
    pub fn register_file() -> Self {
        Self {
            chip: Rc::new(RefCell::new(SimChip::new(true))),
        }
    }

    /// Queue what the card does on the next Transceive/MFAuthent.
    pub fn push_reply(&self, reply: CardReply) {
        self.chip.borrow_mut().replies.push_back(reply);
    }

    /// Queued replies not yet consumed.
    pub fn pending_replies(&self) -> usize {
        self.chip.borrow().replies.len()
    }

    /// Preset a register without going through the bus.
    pub fn set_register(&self, reg: Register, value: u8) {
        self.chip.borrow_mut().regs[reg.addr() as usize] = value;
    }

    /// Current register value, read without side effects.
    pub fn register(&self, reg: Register) -> u8 {
        self.chip.borrow().regs[reg.addr() as usize]
    }

    /// Make CalcCRC never raise its completion flag.
    pub fn set_crc_stall(&self, stall: bool) {
        self.chip.borrow_mut().crc_stall = stall;
    }

    /// Report this FIFOLevel regardless of the bytes actually buffered.
    pub fn set_fifo_level(&self, level: Option<u8>) {
        self.chip.borrow_mut().fifo_level_override = level;
    }

    /// Testing hook: fail every subsequent transfer.
    pub fn set_fail_transfers(&self, fail: bool) {
        self.chip.borrow_mut().fail_transfers = fail;
    }

    /// Every Transceive/MFAuthent the chip executed, oldest first.
    pub fn frames(&self) -> Vec<SentFrame> {
        self.chip.borrow().frames.clone()
    }

    /// Payloads of Transceive commands only.
    pub fn transceived(&self) -> Vec<Vec<u8>> {
        self.chip
            .borrow()
            .frames
            .iter()
            .filter(|f| f.command == PcdCommand::Transceive)
            .map(|f| f.bytes.clone())
            .collect()
    }

    /// Every byte written to FIFODataReg, including CRC input.
    pub fn fifo_writes(&self) -> Vec<u8> {
        self.chip.borrow().fifo_writes.clone()
    }

    /// Values written to `reg`, oldest first.
    pub fn writes_to(&self, reg: Register) -> Vec<u8> {
        self.chip
            .borrow()
            .writes
            .iter()
            .filter(|(a, _)| *a == reg.addr())
            .map(|(_, v)| *v)
            .collect()
    }

    /// ComIrqReg reads since the last CommandReg write.
    pub fn irq_polls(&self) -> usize {
        self.chip.borrow().irq_polls
    }

    /// DivIrqReg reads since the last CommandReg write.
    pub fn crc_polls(&self) -> usize {
        self.chip.borrow().crc_polls
    }

    /// SoftReset commands seen.
    pub fn resets(&self) -> usize {
        self.chip.borrow().resets
    }

    /// Number of HLTA frames sent to the card.
    pub fn halts(&self) -> usize {
        self.transceived()
            .iter()
            .filter(|f| f.first() == Some(&0x50))
            .count()
    }

    /// Chip select currently asserted.
    pub fn is_selected(&self) -> bool {
        self.chip.borrow().selected
    }
}

impl Default for MockTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for MockTransport {
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        self.chip.borrow_mut().transfer(byte)
    }

    fn select(&mut self) -> Result<()> {
        let mut chip = self.chip.borrow_mut();
        chip.selected = true;
        chip.pending = None;
        Ok(())
    }

    fn deselect(&mut self) -> Result<()> {
        let mut chip = self.chip.borrow_mut();
        chip.selected = false;
        chip.pending = None;
        Ok(())
    }
}
