//! MIFARE Classic commands run against the selected card.

pub mod auth;
pub mod read;
pub mod write;

pub use auth::{authenticate, stop_crypto};
pub use read::read_block;
pub use write::write_block;
