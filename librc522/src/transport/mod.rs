// librc522/src/transport/mod.rs
//! The byte-level link to the chip and its implementations.

pub mod mock;
#[cfg(feature = "hal")]
pub mod spi;
pub mod traits;

pub use mock::{CardReply, MockTransport, SentFrame};
#[cfg(feature = "hal")]
pub use spi::SpiTransport;
pub use traits::Transport;
