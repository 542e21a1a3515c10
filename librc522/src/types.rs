// librc522/src/types.rs

use std::fmt;

use crate::constants::{BLOCK_SIZE, FIFO_CAPACITY};
use crate::protocol::checksum::bcc;
use crate::{Error, Result};

/// UID - Newtype Pattern (4 バイト + BCC)
///
/// Single-size UID as returned by cascade-level-1 anticollision: four
/// identity bytes followed by their XOR checksum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Uid([u8; 5]);

impl Uid {
    /// Wrap raw bytes without checking the checksum.
    pub fn from_bytes(bytes: [u8; 5]) -> Self {
        Self(bytes)
    }

    /// Build a UID from its four identity bytes, computing the checksum.
    pub fn from_serial(serial: [u8; 4]) -> Self {
        let mut bytes = [0u8; 5];
        bytes[..4].copy_from_slice(&serial);
        bytes[4] = bcc(&serial);
        Self(bytes)
    }

    /// Identity bytes followed by BCC.
    pub fn as_bytes(&self) -> &[u8; 5] {
        &self.0
    }

    /// The four identity bytes (without checksum).
    pub fn serial(&self) -> &[u8] {
        &self.0[..4]
    }

    /// BCC byte as received.
    pub fn checksum(&self) -> u8 {
        self.0[4]
    }

    /// Verify the checksum byte equals the XOR of the identity bytes.
    pub fn verify(&self) -> Result<()> {
        let expected = bcc(self.serial());
        if expected != self.checksum() {
            return Err(Error::UidChecksum {
                expected,
                actual: self.checksum(),
            });
        }
        Ok(())
    }

    /// Lowercase hex of all five bytes.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        if bytes.len() != 5 {
            return Err(Error::InvalidLength {
                expected: 5,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; 5];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

impl fmt::Display for Uid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for b in &self.0 {
            write!(f, "{:02X}", b)?;
        }
        Ok(())
    }
}

/// Byte-wise equality over the full 5-byte UID representation.
pub fn compare_ids(a: &Uid, b: &Uid) -> bool {
    a.as_bytes() == b.as_bytes()
}

/// ATQA - answer to request (2 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Atqa([u8; 2]);

impl Atqa {
    /// Wrap the two ATQA bytes as received.
    pub fn from_bytes(bytes: [u8; 2]) -> Self {
        Self(bytes)
    }

    /// Raw bytes, LSB first.
    pub fn as_bytes(&self) -> &[u8; 2] {
        &self.0
    }

    /// ATQA as a little-endian word.
    pub fn as_u16(&self) -> u16 {
        u16::from_le_bytes(self.0)
    }
}

/// BlockData (16 バイト)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BlockData([u8; BLOCK_SIZE]);

impl BlockData {
    /// Wrap one block's worth of bytes.
    pub fn from_bytes(bytes: [u8; BLOCK_SIZE]) -> Self {
        Self(bytes)
    }

    /// Block contents.
    pub fn as_bytes(&self) -> &[u8; BLOCK_SIZE] {
        &self.0
    }

    /// Space-separated hex.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Printable ASCII with `.` standing in for everything else.
    pub fn to_ascii_safe(&self) -> String {
        self.0
            .iter()
            .map(|&b| {
                if b.is_ascii_graphic() || b == b' ' {
                    b as char
                } else {
                    '.'
                }
            })
            .collect()
    }
}

impl TryFrom<&[u8]> for BlockData {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> std::result::Result<Self, Self::Error> {
        if bytes.len() != BLOCK_SIZE {
            return Err(Error::InvalidLength {
                expected: BLOCK_SIZE,
                actual: bytes.len(),
            });
        }
        let mut arr = [0u8; BLOCK_SIZE];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// MIFARE Classic sector key (6 バイト)
#[derive(Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Factory transport key.
    pub const DEFAULT: Self = Self([0xFF; 6]);

    /// Wrap six key bytes.
    pub const fn new(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// Key bytes as sent in MFAuthent.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

// keys stay out of logs
impl fmt::Debug for MifareKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("MifareKey(..)")
    }
}

/// Which sector key MFAuthent checks.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthMode {
    /// MF_AUTH_KEY_A
    KeyA = 0x60,
    /// MF_AUTH_KEY_B
    KeyB = 0x61,
}

impl AuthMode {
    /// Command byte sent to the card.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Wake-up flavor for `request`.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RequestMode {
    /// REQA: only cards in IDLE answer.
    #[default]
    Idle = 0x26,
    /// WUPA: cards in IDLE or HALT answer.
    All = 0x52,
}

impl RequestMode {
    /// REQA or WUPA command byte.
    pub fn code(self) -> u8 {
        self as u8
    }
}

/// Bounded receive buffer for one transceive cycle.
///
/// Holds at most [`FIFO_CAPACITY`] bytes; pushes beyond that are rejected
/// instead of overrunning storage.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct FifoBuffer {
    buf: [u8; FIFO_CAPACITY],
    len: usize,
}

impl FifoBuffer {
    /// Empty buffer.
    pub const fn new() -> Self {
        Self {
            buf: [0; FIFO_CAPACITY],
            len: 0,
        }
    }

    /// Append one byte, failing with `FifoOverflow` when full.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        if self.len >= FIFO_CAPACITY {
            return Err(Error::FifoOverflow {
                capacity: FIFO_CAPACITY,
            });
        }
        self.buf[self.len] = byte;
        self.len += 1;
        Ok(())
    }

    /// Bytes received so far.
    pub fn as_slice(&self) -> &[u8] {
        &self.buf[..self.len]
    }

    /// Number of bytes held.
    pub fn len(&self) -> usize {
        self.len
    }

    /// True when nothing was received.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// First byte, if any.
    pub fn first(&self) -> Option<u8> {
        self.as_slice().first().copied()
    }

    /// Always [`FIFO_CAPACITY`].
    pub fn capacity(&self) -> usize {
        FIFO_CAPACITY
    }
}

impl Default for FifoBuffer {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for FifoBuffer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FifoBuffer({:02x?})", self.as_slice())
    }
}
