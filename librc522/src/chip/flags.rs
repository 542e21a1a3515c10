// librc522/src/chip/flags.rs
//! Bit layout of the registers the driver reads back.

/// ComIrqReg: Set1 TxIRq RxIRq IdleIRq HiAlertIRq LoAlertIRq ErrIRq TimerIRq
///
/// HiAlertIRq (0x08) is never enabled by the driver.
pub mod com_irq {
    /// Write-only: 1 sets the marked bits, 0 clears them.
    pub const SET1: u8 = 0x80;
    /// Last bit of the transmitted data was sent.
    pub const TX: u8 = 0x40;
    /// Receiver detected the end of a valid data stream.
    pub const RX: u8 = 0x20;
    /// Command terminated by itself.
    pub const IDLE: u8 = 0x10;
    /// FIFO almost empty.
    pub const LO_ALERT: u8 = 0x04;
    /// Any ErrorReg bit set.
    pub const ERR: u8 = 0x02;
    /// Chip timer underflow: the card did not answer within the timer window.
    pub const TIMER: u8 = 0x01;
}

/// DivIrqReg
pub mod div_irq {
    /// CalcCRC finished and all FIFO data was processed.
    pub const CRC: u8 = 0x04;
}

/// ErrorReg (low bits): BufferOvfl CollErr CRCErr ParityErr ProtocolErr
pub mod error {
    /// FIFO written while full.
    pub const BUFFER_OVERFLOW: u8 = 0x10;
    /// Bit collision detected.
    pub const COLLISION: u8 = 0x08;
    /// RxCRCEn set and the CRC check failed.
    pub const CRC: u8 = 0x04;
    /// Parity check failed.
    pub const PARITY: u8 = 0x02;
    /// SOF error or wrong byte count during MFAuthent.
    pub const PROTOCOL: u8 = 0x01;

    /// Flags that fail a command outright.
    pub const FATAL: u8 = BUFFER_OVERFLOW | COLLISION | PARITY | PROTOCOL;
}

/// Status2Reg
pub mod status2 {
    /// MFCrypto1On: set after a successful MFAuthent.
    pub const CRYPTO1_ON: u8 = 0x08;
}

/// FIFOLevelReg
pub mod fifo_level {
    /// FlushBuffer: empties the FIFO.
    pub const FLUSH: u8 = 0x80;
    /// Number of bytes stored in the FIFO.
    pub const LEVEL_MASK: u8 = 0x7F;
}

/// ControlReg
pub mod control {
    /// RxLastBits: valid bits in the last received byte (0 = all 8).
    pub const RX_LAST_BITS: u8 = 0x07;
}

/// BitFramingReg
pub mod bit_framing {
    /// StartSend: starts transmission of a Transceive.
    pub const START_SEND: u8 = 0x80;
    /// TxLastBits = 7: short frame used by REQA/WUPA.
    pub const SHORT_FRAME: u8 = 0x07;
    /// TxLastBits = 0: every byte is sent whole.
    pub const FULL_BYTES: u8 = 0x00;
}

/// TxControlReg
pub mod tx_control {
    /// Tx1RFEn | Tx2RFEn
    pub const ANTENNA: u8 = 0x03;
}

/// CommandReg
pub mod command {
    /// Command[3:0]
    pub const COMMAND_MASK: u8 = 0x0F;
}
