// pn532/src/protocol/reassembler.rs

//! Byte-at-a-time frame reassembly.
//!
//! The serial link delivers an unframed byte stream: partial frames, frames
//! split across reads, and line noise between them. `Reassembler` consumes
//! that stream one byte at a time and emits complete, classified frames,
//! resynchronizing forward-only whenever the input turns out to be garbage.
//!
//! Classification happens right after the two header bytes (LEN, LCS) so the
//! type-specific length counting can start immediately; nothing unbounded is
//! buffered while the frame type is still unknown.

use log::{debug, warn};

use crate::constants::START_SEQUENCE;
use crate::protocol::frame::{FrameType, InfoFrame, RespFrame};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// Matching the 3-byte start sequence 00 00 FF.
    Seek { matched: usize },
    /// Start sequence found, waiting for the candidate LEN byte.
    Len,
    /// Waiting for the candidate LCS byte.
    Lcs { len: u8 },
    /// Extended frame: waiting for the high length byte.
    ExtLenHigh,
    /// Extended frame: waiting for the low length byte.
    ExtLenLow { len_m: u8 },
    /// Collecting bytes until the frame's total length is reached.
    Accumulate { kind: FrameType, total: usize },
}

/// Frame reassembly state machine. Feed it raw bytes with [`push`]; every
/// completed, validated frame comes back as a [`RespFrame`]. Malformed
/// input is dropped and the machine reseeks the next start sequence.
///
/// [`push`]: Reassembler::push
#[derive(Debug)]
pub struct Reassembler {
    state: State,
    buf: Vec<u8>,
}

impl Default for Reassembler {
    fn default() -> Self {
        Self::new()
    }
}

impl Reassembler {
    /// Fresh machine, seeking the first start sequence.
    pub fn new() -> Self {
        Self {
            state: State::Seek { matched: 0 },
            buf: Vec::new(),
        }
    }

    /// Consume one byte. Returns a frame when this byte completed one.
    pub fn push(&mut self, byte: u8) -> Option<RespFrame> {
        match self.state {
            State::Seek { matched } => {
                if byte == START_SEQUENCE[matched] {
                    if matched + 1 == START_SEQUENCE.len() {
                        self.buf.clear();
                        self.buf.extend_from_slice(&START_SEQUENCE);
                        self.state = State::Len;
                    } else {
                        self.state = State::Seek {
                            matched: matched + 1,
                        };
                    }
                } else if matched == 2 && byte == 0x00 {
                    // 00 00 00...: the last two zeros still form a valid
                    // prefix, so keep that progress instead of restarting.
                } else {
                    self.state = State::Seek { matched: 0 };
                }
                None
            }
            State::Len => {
                self.buf.push(byte);
                self.state = State::Lcs { len: byte };
                None
            }
            State::Lcs { len } => {
                self.buf.push(byte);
                self.classify(len, byte);
                None
            }
            State::ExtLenHigh => {
                self.buf.push(byte);
                self.state = State::ExtLenLow { len_m: byte };
                None
            }
            State::ExtLenLow { len_m } => {
                self.buf.push(byte);
                let ext_len = (len_m as usize) << 8 | byte as usize;
                self.state = State::Accumulate {
                    kind: FrameType::Extended,
                    total: 9 + ext_len,
                };
                None
            }
            State::Accumulate { kind, total } => {
                self.buf.push(byte);
                if self.buf.len() < total {
                    return None;
                }
                self.state = State::Seek { matched: 0 };
                let raw = std::mem::take(&mut self.buf);
                self.complete(kind, raw)
            }
        }
    }

    /// Convenience wrapper over [`push`] for a whole chunk of bytes.
    ///
    /// [`push`]: Reassembler::push
    pub fn feed(&mut self, bytes: &[u8]) -> Vec<RespFrame> {
        bytes.iter().filter_map(|&b| self.push(b)).collect()
    }

    /// Decide the frame type from the two header bytes. The rows are
    /// checked in order; the fixed-byte rows must win over the generic
    /// LEN+LCS==0 row (the error frame header 01 FF also sums to zero).
    fn classify(&mut self, len: u8, lcs: u8) {
        let (kind, total) = match (len, lcs) {
            (0xFF, 0xFF) => {
                self.state = State::ExtLenHigh;
                return;
            }
            (0x00, 0xFF) => (FrameType::Ack, 6),
            (0xFF, 0x00) => (FrameType::Nack, 6),
            (0x01, 0xFF) => (FrameType::Error, 8),
            _ if len.wrapping_add(lcs) == 0 => (FrameType::Normal, 7 + len as usize),
            _ => {
                debug!(
                    "dropping frame with invalid length header: len={:#04x} lcs={:#04x}",
                    len, lcs
                );
                self.buf.clear();
                self.state = State::Seek { matched: 0 };
                return;
            }
        };
        self.state = State::Accumulate { kind, total };
    }

    /// A frame reached its total length. Normal frames get their checksums
    /// re-verified; a failure drops the frame and reseeks.
    fn complete(&mut self, kind: FrameType, raw: Vec<u8>) -> Option<RespFrame> {
        if kind == FrameType::Normal {
            if let Err(err) = InfoFrame::decode(&raw) {
                warn!(
                    "dropping malformed frame ({}): {}",
                    err,
                    crate::utils::bytes_to_hex(&raw)
                );
                return None;
            }
        }
        Some(RespFrame::new(kind, raw))
    }
}
