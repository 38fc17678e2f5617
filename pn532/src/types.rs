// pn532/src/types.rs

use crate::Error;
use std::convert::TryFrom;

/// Uid of a discovered passive target - Newtype Pattern (4 to 7 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Uid {
    bytes: [u8; 7],
    len: usize,
}

impl Uid {
    /// The UID bytes, trimmed to the actual length.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes[..self.len]
    }

    /// Number of UID bytes (4 to 7).
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always false for a validated UID; provided for clippy's len/is_empty pair.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Lowercase hex rendering without separators.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex(self.as_bytes())
    }
}

impl TryFrom<&[u8]> for Uid {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() < 4 || bytes.len() > 7 {
            return Err(Error::InvalidArgument {
                name: "uid",
                reason: format!("length must be 4 to 7 bytes, got {}", bytes.len()),
            });
        }
        let mut arr = [0u8; 7];
        arr[..bytes.len()].copy_from_slice(bytes);
        Ok(Self {
            bytes: arr,
            len: bytes.len(),
        })
    }
}

/// Mifare Classic key - Newtype Pattern (6 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct MifareKey([u8; 6]);

impl MifareKey {
    /// Factory default key shipped on blank Mifare Classic cards.
    pub const DEFAULT: Self = Self([0xFF; 6]);

    /// Wrap a fixed 6-byte key.
    pub const fn from_bytes(bytes: [u8; 6]) -> Self {
        Self(bytes)
    }

    /// The raw key bytes.
    pub fn as_bytes(&self) -> &[u8; 6] {
        &self.0
    }
}

impl TryFrom<&[u8]> for MifareKey {
    type Error = Error;

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 6 {
            return Err(Error::InvalidArgument {
                name: "key",
                reason: format!("length must be 6 bytes, got {}", bytes.len()),
            });
        }
        let mut arr = [0u8; 6];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Mifare Classic authentication key slot.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyType {
    /// Authenticate with key A (sub-command 0x60).
    AuthA = crate::constants::MIFARE_CMD_AUTH_A,
    /// Authenticate with key B (sub-command 0x61).
    AuthB = crate::constants::MIFARE_CMD_AUTH_B,
}

/// One 16-byte Mifare Classic block - Newtype Pattern
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockData([u8; 16]);

impl BlockData {
    /// Wrap a fixed 16-byte block.
    pub const fn from_bytes(bytes: [u8; 16]) -> Self {
        Self(bytes)
    }

    /// The raw block bytes.
    pub fn as_bytes(&self) -> &[u8; 16] {
        &self.0
    }

    /// Spaced lowercase hex rendering of the block.
    pub fn to_hex(&self) -> String {
        crate::utils::bytes_to_hex_spaced(self.as_bytes())
    }

    /// Printable-ASCII rendering with non-graphic bytes replaced by dots.
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

    fn try_from(bytes: &[u8]) -> Result<Self, Self::Error> {
        if bytes.len() != 16 {
            return Err(Error::InvalidArgument {
                name: "data",
                reason: format!("length must be 16 bytes, got {}", bytes.len()),
            });
        }
        let mut arr = [0u8; 16];
        arr.copy_from_slice(bytes);
        Ok(Self(arr))
    }
}

/// Baud rate / modulation selector for InListPassiveTarget.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardBaud {
    /// 106 kbps ISO/IEC14443 type A (the common Mifare case).
    Iso14443a = 0x00,
    /// 212 kbps FeliCa.
    Felica212 = 0x01,
    /// 424 kbps FeliCa.
    Felica424 = 0x02,
    /// 106 kbps ISO/IEC14443-3 type B.
    Iso14443b = 0x03,
    /// 106 kbps Innovision Jewel.
    Jewel = 0x04,
}

impl Default for CardBaud {
    fn default() -> Self {
        CardBaud::Iso14443a
    }
}

/// How the Security Access Module is exposed by the chip.
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SamMode {
    /// The SAM is not used; the default mode.
    Normal = 0x01,
    /// PN532 + SAM appear as a single contactless SAM card.
    VirtualCard = 0x02,
    /// The host accesses the SAM with standard PCD commands.
    WiredCard = 0x03,
    /// PN532 and SAM are visible as two separate targets.
    DualCard = 0x04,
}

/// Flag set for the SetParameters command. Bit 3 is reserved by the chip
/// and always left clear.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Parameters {
    /// Use NAD information in DEP exchanges (bit 0).
    pub nad_used: bool,
    /// Use DID information in DEP exchanges (bit 1).
    pub did_used: bool,
    /// Automatically send ATR_RES as a target (bit 2).
    pub automatic_atr_res: bool,
    /// Automatically handle RATS as an ISO14443-4 PICC (bit 4).
    pub automatic_rats: bool,
    /// Emulate an ISO14443-4 PICC (bit 5).
    pub iso14443_4_picc: bool,
    /// Strip preamble and postamble from exchanged frames (bit 6).
    pub remove_pre_post_amble: bool,
}

impl Parameters {
    /// Pack the flags into the wire bitmask.
    pub fn bits(&self) -> u8 {
        let mut bits = 0u8;
        if self.nad_used {
            bits |= 1 << 0;
        }
        if self.did_used {
            bits |= 1 << 1;
        }
        if self.automatic_atr_res {
            bits |= 1 << 2;
        }
        if self.automatic_rats {
            bits |= 1 << 4;
        }
        if self.iso14443_4_picc {
            bits |= 1 << 5;
        }
        if self.remove_pre_post_amble {
            bits |= 1 << 6;
        }
        bits
    }
}

/// Reply of the GetFirmwareVersion command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FirmwareVersion {
    /// IC identifier, 0x32 for a PN532.
    pub ic: u8,
    /// Firmware version number.
    pub ver: u8,
    /// Firmware revision number.
    pub rev: u8,
    /// Supported-protocol bitmask.
    pub support: u8,
}

impl FirmwareVersion {
    /// True when the firmware supports ISO/IEC 14443 type A.
    pub fn supports_iso14443a(&self) -> bool {
        self.support & 0x01 != 0
    }

    /// True when the firmware supports ISO/IEC 14443 type B.
    pub fn supports_iso14443b(&self) -> bool {
        self.support & 0x02 != 0
    }

    /// True when the firmware supports ISO/IEC 18092 (NFC).
    pub fn supports_iso18092(&self) -> bool {
        self.support & 0x04 != 0
    }
}

impl std::fmt::Display for FirmwareVersion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "IC 0x{:02x} v{}.{}", self.ic, self.ver, self.rev)
    }
}
