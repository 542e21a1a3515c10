// librc522/src/device/config.rs

//! Chip defaults programmed by `initialize` and the driver tunables.

use crate::constants::{COMMAND_POLL_BUDGET, CRC_POLL_BUDGET};
use crate::utils::PollLimit;

/// TAuto=1, timer starts after every transmission; prescaler high nibble 0xD
pub const TIMER_MODE: u8 = 0x8D;

/// Prescaler low byte (TPrescaler = 0xD3E, ~2 kHz timer clock)
pub const TIMER_PRESCALER: u8 = 0x3E;

/// Timer reload value: 30 ticks, roughly 15 ms of no-card window
pub const TIMER_RELOAD_L: u8 = 30;
/// Timer reload high byte
pub const TIMER_RELOAD_H: u8 = 0;

/// RxGain = 48 dB
pub const RF_GAIN: u8 = 0x70;

/// Force100ASK: 100% ASK modulation
pub const TX_ASK: u8 = 0x40;

/// CRC preset 0x6363 (ISO14443A), MSB first
pub const MODE: u8 = 0x3D;

/// Driver tunables.
///
/// The defaults reproduce the fixed spin-count budgets and the
/// trust-the-chip CRC handling.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DriverConfig {
    /// Budget for the executor's IRQ poll loop.
    pub command_poll: PollLimit,
    /// Budget for the CRC coprocessor poll loop.
    pub crc_poll: PollLimit,
    /// Fail on unconfirmed CRC results and verify the CRC trailer of
    /// block reads.
    pub strict_crc: bool,
}

impl DriverConfig {
    /// Defaults with `strict_crc` on.
    pub fn strict() -> Self {
        Self {
            strict_crc: true,
            ..Self::default()
        }
    }
}

impl Default for DriverConfig {
    fn default() -> Self {
        Self {
            command_poll: PollLimit::Iterations(COMMAND_POLL_BUDGET),
            crc_poll: PollLimit::Iterations(CRC_POLL_BUDGET),
            strict_crc: false,
        }
    }
}
