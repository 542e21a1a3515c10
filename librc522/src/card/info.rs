// librc522/src/card/info.rs

use derive_more::Display;

/// PICC family guessed from the SAK byte returned by SELECT.
#[derive(Debug, Display, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CardType {
    /// SAK 0x09
    #[display(fmt = "MIFARE Mini (320 bytes)")]
    MifareMini,
    /// SAK 0x08
    #[display(fmt = "MIFARE 1KB")]
    Mifare1K,
    /// SAK 0x18
    #[display(fmt = "MIFARE 4KB")]
    Mifare4K,
    /// SAK 0x00
    #[display(fmt = "MIFARE Ultralight or Ultralight C")]
    MifareUltralight,
    /// SAK 0x10 or 0x11
    #[display(fmt = "MIFARE Plus")]
    MifarePlus,
    /// SAK 0x01
    #[display(fmt = "MIFARE TNP3XXX")]
    Tnp3xxx,
    /// SAK 0x20
    #[display(fmt = "PICC compliant with ISO/IEC 14443-4")]
    Iso14443_4,
    /// SAK 0x40
    #[display(fmt = "PICC compliant with ISO/IEC 18092 (NFC)")]
    Iso18092,
    /// Cascade bit set: the UID has more levels than were read.
    #[display(fmt = "SAK indicates UID is not complete")]
    NotComplete,
    /// Anything else.
    #[display(fmt = "Unknown type")]
    Unknown,
}

impl CardType {
    /// Classify a SAK byte. Bit 7 is ignored.
    pub fn from_sak(sak: u8) -> Self {
        // bit 7 is RFU
        let sak = sak & 0x7F;
        if sak & 0x04 != 0 {
            return CardType::NotComplete;
        }
        match sak {
            0x09 => CardType::MifareMini,
            0x08 => CardType::Mifare1K,
            0x18 => CardType::Mifare4K,
            0x00 => CardType::MifareUltralight,
            0x10 | 0x11 => CardType::MifarePlus,
            0x01 => CardType::Tnp3xxx,
            0x20 => CardType::Iso14443_4,
            0x40 => CardType::Iso18092,
            _ => CardType::Unknown,
        }
    }

    /// MIFARE Classic layouts that use sector-key authentication.
    pub fn is_mifare_classic(&self) -> bool {
        matches!(
            self,
            CardType::MifareMini | CardType::Mifare1K | CardType::Mifare4K
        )
    }
}
