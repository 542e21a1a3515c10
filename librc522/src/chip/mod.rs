// librc522/src/chip/mod.rs
//! Reader-chip (PCD) definitions: register map, bus framing, commands and
//! the bit layout of the status registers the driver polls.

pub mod command;
pub mod flags;
pub mod register;

pub use command::{IrqConfig, PcdCommand};
pub use register::Register;
