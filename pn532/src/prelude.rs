// pn532/src/prelude.rs

pub use crate::device::Device;
pub use crate::protocol::{Command, FrameType, InfoFrame, Reassembler, RespFrame, Response};
pub use crate::transport::{MockTransport, Transport};
pub use crate::{
    BlockData, CardBaud, Error, FirmwareVersion, KeyType, MifareKey, Parameters, Result, SamMode,
    Uid,
};

// Re-export small utilities for convenience
pub use crate::utils::{bytes_to_hex, bytes_to_hex_spaced, default_response_timeout, ms, parse_hex};
