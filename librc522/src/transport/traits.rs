// librc522/src/transport/traits.rs
//! The transport abstraction.

use crate::Result;

/// Transport trait abstracts the serial bus away from register/protocol logic.
///
/// Implementations provide a full-duplex single-byte exchange and the
/// chip-select line. Every register transaction is bracketed by
/// `select`/`deselect`.
pub trait Transport {
    /// Clock one byte out and return the byte clocked in at the same time
    fn transfer(&mut self, byte: u8) -> Result<u8>;

    /// Assert chip-select
    fn select(&mut self) -> Result<()>;

    /// Deassert chip-select
    fn deselect(&mut self) -> Result<()>;

    /// Exchange `bytes` inside one chip-select bracket. Chip-select is
    /// released even when a transfer fails; the first error wins.
    fn exchange(&mut self, bytes: &[u8]) -> Result<Vec<u8>> {
        self.select()?;
        let mut rx = Vec::with_capacity(bytes.len());
        let mut result = Ok(());
        for &b in bytes {
            match self.transfer(b) {
                Ok(r) => rx.push(r),
                Err(e) => {
                    result = Err(e);
                    break;
                }
            }
        }
        let released = self.deselect();
        result?;
        released?;
        Ok(rx)
    }
}

impl<T: Transport + ?Sized> Transport for Box<T> {
    fn transfer(&mut self, byte: u8) -> Result<u8> {
        (**self).transfer(byte)
    }

    fn select(&mut self) -> Result<()> {
        (**self).select()
    }

    fn deselect(&mut self) -> Result<()> {
        (**self).deselect()
    }

    fn exchange(&mut self, bytes: &[u8]) -> Result<Vec<u8>> {
        (**self).exchange(bytes)
    }
}
