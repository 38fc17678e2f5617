// pn532/src/protocol/responses/mifare.rs

use crate::protocol::parser;
use crate::types::BlockData;
use crate::{Error, Result};

/// Decode an InDataExchange reply: `[0x41, status, payload...]`. A non-zero
/// status is the chip reporting a failed exchange (bad key, missing card).
pub fn decode_data_exchange(data: &[u8]) -> Result<(u8, Vec<u8>)> {
    let status = parser::byte_at(data, 1)?;
    Ok((status, data[2..].to_vec()))
}

/// Extract the 16 block bytes from a successful read exchange.
pub fn block_from_exchange(status: u8, payload: &[u8]) -> Result<BlockData> {
    if status != 0x00 {
        return Err(Error::MifareStatus { status });
    }
    BlockData::try_from(parser::slice_at(payload, 0, 16)?)
}
