// librc522/src/prelude.rs

pub use crate::card::operations::{authenticate, read_block, stop_crypto, write_block};
pub use crate::card::{Card, CardType};
pub use crate::device::{Device, DeviceBuilder, DriverConfig};
pub use crate::device::{Initialized, Uninitialized};
pub use crate::transport::Transport;
pub use crate::{
    compare_ids, Atqa, AuthMode, BlockData, Error, MifareKey, Outcome, RequestMode, Result, Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, ms, PollLimit};
