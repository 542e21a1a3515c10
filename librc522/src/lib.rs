// librc522/src/lib.rs

//! librc522
//!
//! Pure Rust driver for MFRC522 contactless reader chips: register access,
//! the chip's command executor, ISO14443A card discovery and MIFARE Classic
//! authentication and block I/O.
#![warn(missing_docs)]

/// Card handle and MIFARE Classic operations.
pub mod card;
/// Register map, chip commands and register bit layout.
pub mod chip;
pub mod constants;
/// Driver handle, configuration and the chip command executor.
pub mod device;
/// Crate error type and outcome classification.
pub mod error;
/// Common imports for driver users.
pub mod prelude;
/// ISO14443A framing: command encoding, checksums and reply checks.
pub mod protocol;
/// Helpers for exercising the driver against [`transport::mock::MockTransport`].
pub mod test_support;
/// Byte transports the driver talks through.
pub mod transport;
/// Newtypes shared across the crate.
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
