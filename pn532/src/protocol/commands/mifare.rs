// pn532/src/protocol/commands/mifare.rs

use crate::constants::{CMD_IN_DATA_EXCHANGE, MIFARE_CMD_READ, MIFARE_CMD_WRITE};
use crate::types::{BlockData, KeyType, MifareKey, Uid};

/// Encode a Mifare Classic block authentication as an InDataExchange
/// payload. Layout: `40 01 keyType blockNum key[6] uid[4..7]`.
pub fn encode_authenticate_block(
    uid: Uid,
    block_number: u8,
    key_type: KeyType,
    key: MifareKey,
) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + 6 + uid.len());
    buf.push(CMD_IN_DATA_EXCHANGE);
    buf.push(0x01); // logical target number
    buf.push(key_type as u8);
    buf.push(block_number);
    buf.extend_from_slice(key.as_bytes());
    buf.extend_from_slice(uid.as_bytes());
    buf
}

/// Encode a 16-byte block read as an InDataExchange payload.
pub fn encode_read_block(block_number: u8) -> Vec<u8> {
    vec![CMD_IN_DATA_EXCHANGE, 0x01, MIFARE_CMD_READ, block_number]
}

/// Encode a 16-byte block write as an InDataExchange payload.
pub fn encode_write_block(block_number: u8, data: BlockData) -> Vec<u8> {
    let mut buf = Vec::with_capacity(4 + 16);
    buf.push(CMD_IN_DATA_EXCHANGE);
    buf.push(0x01);
    buf.push(MIFARE_CMD_WRITE);
    buf.push(block_number);
    buf.extend_from_slice(data.as_bytes());
    buf
}
