// librc522/src/chip/command.rs
//! Chip commands and their interrupt masks.

use crate::chip::flags::{com_irq, command::COMMAND_MASK};

/// Commands the reader chip executes when written to CommandReg.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PcdCommand {
    /// No action; cancels the running command.
    Idle = 0x00,
    /// Stores 25 bytes into the internal buffer.
    Mem = 0x01,
    /// Generates a 10-byte random ID.
    GenerateRandomId = 0x02,
    /// Runs the CRC coprocessor over the FIFO.
    CalcCrc = 0x03,
    /// Transmits the FIFO.
    Transmit = 0x04,
    /// Modifies CommandReg bits without changing the command.
    NoCmdChange = 0x07,
    /// Activates the receiver.
    Receive = 0x08,
    /// Transmits the FIFO then receives the answer.
    Transceive = 0x0C,
    /// MIFARE Classic Crypto1 authentication.
    MfAuthent = 0x0E,
    /// Resets the chip.
    SoftReset = 0x0F,
}

impl PcdCommand {
    /// Value written to CommandReg.
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Decode CommandReg, ignoring the power bits.
    pub fn from_code(code: u8) -> Option<Self> {
        match code & COMMAND_MASK {
            0x00 => Some(Self::Idle),
            0x01 => Some(Self::Mem),
            0x02 => Some(Self::GenerateRandomId),
            0x03 => Some(Self::CalcCrc),
            0x04 => Some(Self::Transmit),
            0x07 => Some(Self::NoCmdChange),
            0x08 => Some(Self::Receive),
            0x0C => Some(Self::Transceive),
            0x0E => Some(Self::MfAuthent),
            0x0F => Some(Self::SoftReset),
            _ => None,
        }
    }

    /// IRQ-enable / IRQ-wait pair the executor uses for this command.
    pub fn irq_config(self) -> IrqConfig {
        match self {
            Self::MfAuthent => IrqConfig {
                enable: com_irq::IDLE | com_irq::ERR,
                wait: com_irq::IDLE,
            },
            Self::Transceive => IrqConfig {
                enable: com_irq::TX
                    | com_irq::RX
                    | com_irq::IDLE
                    | com_irq::LO_ALERT
                    | com_irq::ERR
                    | com_irq::TIMER,
                wait: com_irq::RX | com_irq::IDLE,
            },
            _ => IrqConfig::NONE,
        }
    }
}

/// Interrupt masks selected per command.
///
/// `wait` holds the bits that end the poll loop besides the timer bit; a
/// zero mask means only the timer can end it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IrqConfig {
    /// ComIEnReg bits, without IRqInv.
    pub enable: u8,
    /// ComIrqReg bits that end the wait.
    pub wait: u8,
}

impl IrqConfig {
    /// No interrupts enabled, no wait bits.
    pub const NONE: Self = Self { enable: 0, wait: 0 };

    /// Value programmed into ComIEnReg (IRqInv set, interrupt pin inverted).
    pub fn enable_register(&self) -> u8 {
        self.enable | 0x80
    }

    /// True when the timer fired and the timer IRQ is enabled for this command.
    pub fn is_no_tag(&self, irq: u8) -> bool {
        irq & self.enable & com_irq::TIMER != 0
    }

    /// True when the poll loop should stop on this IRQ snapshot.
    pub fn is_done(&self, irq: u8) -> bool {
        irq & com_irq::TIMER != 0 || irq & self.wait != 0
    }
}
