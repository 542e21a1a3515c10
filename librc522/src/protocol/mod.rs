// librc522/src/protocol/mod.rs
//! Card-facing (PICC) protocol: ISO14443A / MIFARE command bytes, frame
//! builders and the response shape checks layered on top of the executor.

pub mod checksum;
pub mod commands;
pub mod responses;

pub use checksum::{bcc, crc_a};
pub use commands::*;
pub use responses::*;
