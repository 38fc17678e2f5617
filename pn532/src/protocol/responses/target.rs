// pn532/src/protocol/responses/target.rs

use crate::protocol::parser;
use crate::types::Uid;
use crate::{Error, Result};

/// Decode an InListPassiveTarget reply into the single target's UID.
///
/// Layout: `[0x4B, NbTg, Tg, SENS_RES(2), SEL_RES, NFCIDLen, NFCID1...]`.
/// We always request exactly one target, so any other count is an error.
pub fn decode_list_passive_target(data: &[u8]) -> Result<Uid> {
    let count = parser::byte_at(data, 1)?;
    if count != 0x01 {
        return Err(Error::MultipleTargets { count });
    }
    let uid_len = parser::byte_at(data, 6)?;
    if uid_len > 0x07 {
        return Err(Error::UidTooLong { len: uid_len });
    }
    let uid = parser::slice_at(data, 7, uid_len as usize)?;
    Uid::try_from(uid)
}

/// Decode an InAutoPoll reply into the raw found-target bytes
/// (`data[9 .. 9+data[8]]`).
pub fn decode_auto_poll(data: &[u8]) -> Result<Vec<u8>> {
    let len = parser::byte_at(data, 8)?;
    let targets = parser::slice_at(data, 9, len as usize)?;
    Ok(targets.to_vec())
}
