// librc522/src/constants.rs
//! Common protocol constants used across the crate

/// Bytes the driver accepts from the FIFO in one transceive cycle
pub const FIFO_CAPACITY: usize = 16;

/// Filler byte clocked out while reading a register
pub const DUMMY_BYTE: u8 = 0x00;

/// Default executor poll budget (IRQ register reads)
pub const COMMAND_POLL_BUDGET: u32 = 2000;

/// Default CRC coprocessor poll budget (DivIrq register reads)
pub const CRC_POLL_BUDGET: u32 = 0xFF;

/// MIFARE Classic data block size in bytes
pub const BLOCK_SIZE: usize = 16;
