// pn532/src/protocol/responses/firmware.rs

use crate::protocol::parser;
use crate::types::FirmwareVersion;
use crate::Result;

/// Decode a GetFirmwareVersion reply: `[0x03, IC, Ver, Rev, Support]`.
pub fn decode_firmware_version(data: &[u8]) -> Result<FirmwareVersion> {
    parser::ensure_len(data, 5)?;
    Ok(FirmwareVersion {
        ic: data[1],
        ver: data[2],
        rev: data[3],
        support: data[4],
    })
}
