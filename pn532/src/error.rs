// pn532/src/error.rs

use thiserror::Error;

use crate::protocol::frame::FrameType;

/// Common error type for every fallible operation in the crate.
#[derive(Error, Debug)]
pub enum Error {
    #[error("checksum mismatch: expected {expected:#04x}, got {actual:#04x}")]
    ChecksumMismatch { expected: u8, actual: u8 },

    #[error("frame format error: {0}")]
    FrameFormat(String),

    #[error("invalid packet length: expected {expected}, got {actual}")]
    InvalidLength { expected: usize, actual: usize },

    #[error("expected ACK or NACK, got {0:?} frame")]
    UnexpectedFrame(FrameType),

    #[error("unexpected response code: expected {expected:#04x}, got {actual:#04x}")]
    UnexpectedResponse { expected: u8, actual: u8 },

    #[error("command rejected by device (NACK)")]
    CommandRejected,

    #[error("mifare exchange failed: status={status:#04x}")]
    MifareStatus { status: u8 },

    #[error("expected a single passive target, device reported {count}")]
    MultipleTargets { count: u8 },

    #[error("passive target uid too long: {len} bytes")]
    UidTooLong { len: u8 },

    #[error("invalid argument {name}: {reason}")]
    InvalidArgument { name: &'static str, reason: String },

    #[error("transport error: {0}")]
    Io(#[from] std::io::Error),

    #[error("session closed: reader task exited")]
    SessionClosed,

    #[error("operation timed out")]
    Timeout,
}

/// Crate-wide result alias over [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
