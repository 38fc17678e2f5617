// pn532/src/protocol/frame.rs

use crate::constants::{
    MIN_NORMAL_FRAME_LEN, POSTAMBLE, PREAMBLE, START_SEQUENCE, TFI_HOST_TO_DEVICE,
};
use crate::protocol::checksum::{dcs, lcs};
use crate::{Error, Result};

/// Classification of a reassembled frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FrameType {
    /// Not yet classified.
    Unknown,
    /// Normal information frame carrying a reply payload.
    Normal,
    /// Extended information frame (three-byte length).
    Extended,
    /// Positive acknowledge of the previous command frame.
    Ack,
    /// Negative acknowledge of the previous command frame.
    Nack,
    /// Application-level error frame emitted by the chip.
    Error,
}

/// One reassembled frame: its classification plus the exact raw bytes that
/// made it up. Produced by the reassembler, consumed exactly once by the
/// caller waiting on the session's frame queue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RespFrame {
    /// What the frame was classified as.
    pub frame_type: FrameType,
    /// The exact bytes the frame was reassembled from.
    pub raw: Vec<u8>,
}

impl RespFrame {
    /// Pair a classification with the raw bytes it covers.
    pub fn new(frame_type: FrameType, raw: Vec<u8>) -> Self {
        Self { frame_type, raw }
    }
}

/// A decoded normal information frame.
///
/// Wire layout: `PREAMBLE | 00 FF | LEN | LCS | TFI | PD0..PDn | DCS | POSTAMBLE`
/// where LEN counts TFI plus the n+1 data bytes, the lower byte of
/// [LEN + LCS] is 0x00, and the lower byte of [TFI + PD0 + .. + PDn + DCS]
/// is 0x00.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InfoFrame {
    /// Leading 0x00.
    pub preamble: u8,
    /// The 0x00 0xFF start code.
    pub start_code: [u8; 2],
    /// Byte count of TFI plus data.
    pub len: u8,
    /// Length checksum over LEN.
    pub lcs: u8,
    /// Frame identifier: 0xD4 host to device, 0xD5 device to host.
    pub tfi: u8,
    /// Packet data bytes (PD0..PDn).
    pub data: Vec<u8>,
    /// Data checksum over TFI and the packet data.
    pub dcs: u8,
    /// Trailing 0x00.
    pub postamble: u8,
}

impl InfoFrame {
    /// Build a fresh host->device frame around `payload`, computing both
    /// checksums. `payload` excludes the TFI; at most 254 bytes fit.
    pub fn new(payload: &[u8]) -> Result<Self> {
        if payload.len() > 254 {
            return Err(Error::InvalidLength {
                expected: 254,
                actual: payload.len(),
            });
        }
        let len = payload.len() as u8 + 1;
        Ok(Self {
            preamble: PREAMBLE,
            start_code: [START_SEQUENCE[1], START_SEQUENCE[2]],
            len,
            lcs: lcs(len),
            tfi: TFI_HOST_TO_DEVICE,
            data: payload.to_vec(),
            dcs: dcs(TFI_HOST_TO_DEVICE, payload),
            postamble: POSTAMBLE,
        })
    }

    /// Serialize back into the wire layout.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.data.len() + 8);
        out.push(self.preamble);
        out.extend_from_slice(&self.start_code);
        out.push(self.len);
        out.push(self.lcs);
        out.push(self.tfi);
        out.extend_from_slice(&self.data);
        out.push(self.dcs);
        out.push(self.postamble);
        out
    }

    /// Decode a raw normal frame, re-verifying both checksums.
    pub fn decode(raw: &[u8]) -> Result<Self> {
        if raw.len() < MIN_NORMAL_FRAME_LEN {
            return Err(Error::InvalidLength {
                expected: MIN_NORMAL_FRAME_LEN,
                actual: raw.len(),
            });
        }

        let len = raw[3];
        let lcs_actual = raw[4];
        let lcs_expected = lcs(len);
        if lcs_actual != lcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: lcs_expected,
                actual: lcs_actual,
            });
        }
        if len == 0 {
            return Err(Error::FrameFormat("zero length field".into()));
        }

        // LEN counts TFI + data, so the full frame is LEN + 7 bytes.
        let required = len as usize + 7;
        if raw.len() < required {
            return Err(Error::InvalidLength {
                expected: required,
                actual: raw.len(),
            });
        }

        let tfi = raw[5];
        let data = &raw[6..6 + len as usize - 1];
        let dcs_actual = raw[6 + len as usize - 1];
        let dcs_expected = dcs(tfi, data);
        if dcs_actual != dcs_expected {
            return Err(Error::ChecksumMismatch {
                expected: dcs_expected,
                actual: dcs_actual,
            });
        }

        Ok(Self {
            preamble: raw[0],
            start_code: [raw[1], raw[2]],
            len,
            lcs: lcs_actual,
            tfi,
            data: data.to_vec(),
            dcs: dcs_actual,
            postamble: raw[6 + len as usize],
        })
    }
}
