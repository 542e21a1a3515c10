// librc522/src/protocol/checksum.rs
//! BCC and CRC_A, computed on the host.

/// Block Check Character over UID bytes: XOR of all bytes.
pub fn bcc(bytes: &[u8]) -> u8 {
    bytes.iter().fold(0u8, |acc, &b| acc ^ b)
}

/// CRC_A (ISO/IEC 14443-3 Annex B), returned in transmission order (LSB first).
///
/// The chip's coprocessor computes the same value when ModeReg selects the
/// 0x6363 preset; this software version is used to verify frames the chip
/// did not check itself.
pub fn crc_a(data: &[u8]) -> [u8; 2] {
    let crc = data.iter().fold(0x6363u16, |crc, &b| {
        let mut ch = b ^ (crc & 0x00ff) as u8;
        ch ^= ch << 4;
        let ch = ch as u16;
        (crc >> 8) ^ (ch << 8) ^ (ch << 3) ^ (ch >> 4)
    });
    crc.to_le_bytes()
}
