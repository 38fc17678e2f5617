// fixtures.rs — provides commonly used reply payloads/frames
#![allow(dead_code)]

use pn532::test_support::response_frame;
use pn532::types::{BlockData, Uid};

pub fn sample_uid_bytes() -> [u8; 4] {
    [0xEE, 0x27, 0x25, 0xE5]
}

pub fn sample_uid() -> Uid {
    Uid::try_from(&sample_uid_bytes()[..]).unwrap()
}

pub fn sample_blockdata(fill: u8) -> BlockData {
    BlockData::from_bytes([fill; 16])
}

pub fn firmware_reply_frame() -> Vec<u8> {
    // IC 0x32, version 1.6, supports ISO14443A/B and ISO18092
    response_frame(&[0x03, 0x32, 0x01, 0x06, 0x07])
}

pub fn sam_configuration_reply_frame() -> Vec<u8> {
    response_frame(&[0x15])
}

pub fn set_parameters_reply_frame() -> Vec<u8> {
    response_frame(&[0x13])
}

pub fn list_passive_target_reply(uid: &[u8]) -> Vec<u8> {
    let mut payload = vec![0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, uid.len() as u8];
    payload.extend_from_slice(uid);
    response_frame(&payload)
}

pub fn data_exchange_reply(status: u8, payload: &[u8]) -> Vec<u8> {
    let mut data = vec![0x41, status];
    data.extend_from_slice(payload);
    response_frame(&data)
}

pub fn read_block_reply(block: &[u8; 16]) -> Vec<u8> {
    data_exchange_reply(0x00, block)
}

pub fn write_block_reply_ok() -> Vec<u8> {
    data_exchange_reply(0x00, &[])
}
