// librc522/src/error.rs

use derive_more::Display;
use thiserror::Error;

/// 共通エラー型
#[derive(Error, Debug)]
pub enum Error {
    /// No transport was supplied to the builder.
    #[error("device not found")]
    DeviceNotFound,

    /// The bus transfer itself failed.
    #[error("transport error: {0}")]
    Transport(String),

    /// Poll budget exhausted before the chip finished.
    #[error("command timed out: no completion flag within the poll budget")]
    Timeout,

    /// Fatal ErrorReg bits after a command.
    #[error("chip reported error flags {flags:#04x}")]
    Chip {
        /// ErrorReg masked to the fatal bits.
        flags: u8,
    },

    /// Anticollision ran out the chip timer: the field is empty.
    #[error("no tag answered")]
    NoTag,

    /// A card command ran out the chip timer.
    #[error("card did not answer the command")]
    NoAnswer,

    /// BCC does not match the UID bytes.
    #[error("uid checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    UidChecksum {
        /// XOR of the four UID bytes.
        expected: u8,
        /// BCC byte the card sent.
        actual: u8,
    },

    /// Reply has the wrong number of bits.
    #[error("unexpected response length: expected {expected} bits, got {actual}")]
    BitLength {
        /// Bits the command should return.
        expected: u16,
        /// Bits received.
        actual: u16,
    },

    /// MFAuthent finished without switching Crypto1 on.
    #[error("authentication failed: crypto unit not active")]
    AuthFailed,

    /// Card answered with something other than ACK.
    #[error("card did not acknowledge: got {ack:#04x}")]
    Nack {
        /// Low nibble of the answer.
        ack: u8,
    },

    /// The CRC coprocessor did not finish within its budget.
    #[error("crc coprocessor did not signal completion")]
    CrcUnconfirmed,

    /// CRC_A trailer of a reply is wrong.
    #[error("crc mismatch: expected {expected:02x?}, got {actual:02x?}")]
    CrcMismatch {
        /// CRC_A computed over the payload.
        expected: [u8; 2],
        /// Trailer bytes received.
        actual: [u8; 2],
    },

    /// Input slice has the wrong length.
    #[error("invalid length: expected {expected}, got {actual}")]
    InvalidLength {
        /// Required length.
        expected: usize,
        /// Length supplied.
        actual: usize,
    },

    /// More bytes than the FIFO buffer holds.
    #[error("fifo overflow: capacity {capacity}")]
    FifoOverflow {
        /// Buffer size.
        capacity: usize,
    },
}

impl Error {
    /// Classify this error into the tri-state outcome.
    pub fn outcome(&self) -> Outcome {
        match self {
            Error::NoTag => Outcome::NoTagError,
            _ => Outcome::Error,
        }
    }
}

/// Result alias for this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Three-valued result of every card-facing operation.
///
/// `NoTagError` means the exchange finished cleanly but no card answered,
/// which callers usually treat as "try again later" rather than a fault.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Operation succeeded.
    #[display(fmt = "ok")]
    Ok,
    /// Operation failed.
    #[display(fmt = "error")]
    Error,
    /// No card in the field.
    #[display(fmt = "no tag")]
    NoTagError,
}

impl Outcome {
    /// Classify a result.
    pub fn of<T>(result: &Result<T>) -> Self {
        match result {
            Ok(_) => Outcome::Ok,
            Err(e) => e.outcome(),
        }
    }

    /// True for [`Outcome::Ok`].
    pub fn is_ok(&self) -> bool {
        *self == Outcome::Ok
    }
}

impl<T> From<&Result<T>> for Outcome {
    fn from(result: &Result<T>) -> Self {
        Outcome::of(result)
    }
}
