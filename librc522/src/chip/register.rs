// librc522/src/chip/register.rs
//! Register addresses and the SPI address-byte framing.

/// Chip-internal register addresses (6-bit, MFRC522 datasheet §9).
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Register {
    /// Starts and stops command execution.
    Command = 0x01,
    /// Interrupt request enables.
    ComIEn = 0x02,
    /// Interrupt request enables (CRC, MfinAct).
    DivIEn = 0x03,
    /// Interrupt request bits.
    ComIrq = 0x04,
    /// Interrupt request bits (CRC, MfinAct).
    DivIrq = 0x05,
    /// Error bits of the last command.
    Error = 0x06,
    /// Communication status.
    Status1 = 0x07,
    /// Receiver and transmitter status, MFCrypto1On.
    Status2 = 0x08,
    /// FIFO input and output.
    FifoData = 0x09,
    /// Bytes stored in the FIFO.
    FifoLevel = 0x0A,
    /// FIFO alert thresholds.
    WaterLevel = 0x0B,
    /// Miscellaneous control, RxLastBits.
    Control = 0x0C,
    /// Bit-oriented frame adjustments.
    BitFraming = 0x0D,
    /// First bit collision position.
    Coll = 0x0E,
    /// Transmit and receive modes, CRC preset.
    Mode = 0x11,
    /// Transmission data rate and framing.
    TxMode = 0x12,
    /// Reception data rate and framing.
    RxMode = 0x13,
    /// Antenna driver pins TX1 and TX2.
    TxControl = 0x14,
    /// Transmit modulation settings.
    TxAuto = 0x15,
    /// Analog part driver selection.
    TxSel = 0x16,
    /// Internal receiver settings.
    RxSel = 0x17,
    /// Bit decoder thresholds.
    RxThreshold = 0x18,
    /// Demodulator settings.
    Demod = 0x19,
    /// MIFARE transmit parameters.
    MfTx = 0x1C,
    /// MIFARE receive parameters.
    MfRx = 0x1D,
    /// UART speed.
    SerialSpeed = 0x1F,
    /// CRC result, high byte.
    CrcResultM = 0x21,
    /// CRC result, low byte.
    CrcResultL = 0x22,
    /// Modulation width.
    ModWidth = 0x24,
    /// Receiver gain.
    RfCfg = 0x26,
    /// N-driver conductance.
    GsN = 0x27,
    /// P-driver conductance.
    CwGsP = 0x28,
    /// P-driver conductance during modulation.
    ModGsP = 0x29,
    /// Timer settings.
    TMode = 0x2A,
    /// Timer prescaler, low byte.
    TPrescaler = 0x2B,
    /// Timer reload, high byte.
    TReloadH = 0x2C,
    /// Timer reload, low byte.
    TReloadL = 0x2D,
    /// Timer counter, high byte.
    TCounterValH = 0x2E,
    /// Timer counter, low byte.
    TCounterValL = 0x2F,
    /// Chip version (0x91 or 0x92 for MFRC522).
    Version = 0x37,
}

impl Register {
    /// 6-bit register address.
    pub fn addr(self) -> u8 {
        self as u8
    }

    /// Every register the driver knows about, in address order.
    pub const ALL: [Register; 40] = [
        Register::Command,
        Register::ComIEn,
        Register::DivIEn,
        Register::ComIrq,
        Register::DivIrq,
        Register::Error,
        Register::Status1,
        Register::Status2,
        Register::FifoData,
        Register::FifoLevel,
        Register::WaterLevel,
        Register::Control,
        Register::BitFraming,
        Register::Coll,
        Register::Mode,
        Register::TxMode,
        Register::RxMode,
        Register::TxControl,
        Register::TxAuto,
        Register::TxSel,
        Register::RxSel,
        Register::RxThreshold,
        Register::Demod,
        Register::MfTx,
        Register::MfRx,
        Register::SerialSpeed,
        Register::CrcResultM,
        Register::CrcResultL,
        Register::ModWidth,
        Register::RfCfg,
        Register::GsN,
        Register::CwGsP,
        Register::ModGsP,
        Register::TMode,
        Register::TPrescaler,
        Register::TReloadH,
        Register::TReloadL,
        Register::TCounterValH,
        Register::TCounterValL,
        Register::Version,
    ];
}

/// Address byte that opens a register write on the bus.
pub fn write_frame(addr: u8) -> u8 {
    (addr << 1) & 0x7E
}

/// Address byte that opens a register read on the bus (MSB set).
pub fn read_frame(addr: u8) -> u8 {
    write_frame(addr) | 0x80
}

/// Inverse of the framing: recover `(is_read, addr)` from an address byte.
pub fn parse_frame(byte: u8) -> (bool, u8) {
    (byte & 0x80 != 0, (byte >> 1) & 0x3F)
}
