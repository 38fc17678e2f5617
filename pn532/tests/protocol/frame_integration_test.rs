#[path = "../common/mod.rs"]
mod common;

use pn532::constants::{ACK_FRAME, ERROR_FRAME, NACK_FRAME};
use pn532::protocol::InfoFrame;

#[test]
fn firmware_command_bytes_on_the_wire() {
    let frame = InfoFrame::new(&[0x02]).unwrap();
    assert_eq!(
        frame.to_bytes(),
        vec![0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD4, 0x02, 0x2A, 0x00]
    );
}

#[test]
fn device_reply_frames_decode() {
    let raw = common::fixtures::firmware_reply_frame();
    let frame = InfoFrame::decode(&raw).unwrap();
    assert_eq!(frame.tfi, 0xD5);
    assert_eq!(frame.data[0], 0x03);
}

#[test]
fn fixed_frames_are_self_consistent() {
    // ACK and NACK carry their own length/checksum pair in bytes 3-4.
    assert_eq!(ACK_FRAME[3].wrapping_add(ACK_FRAME[4]), 0xFF);
    assert_eq!(NACK_FRAME[3].wrapping_add(NACK_FRAME[4]), 0xFF);
    // The error frame is a valid normal frame reporting status 0x7F.
    let frame = InfoFrame::decode(&ERROR_FRAME).unwrap();
    assert_eq!(frame.len, 0x01);
    assert_eq!(frame.tfi, 0x7F);
    assert!(frame.data.is_empty());
}

#[test]
fn largest_payload_roundtrips() {
    let payload = vec![0xA5u8; 254];
    let frame = InfoFrame::new(&payload).unwrap();
    let raw = frame.to_bytes();
    assert_eq!(raw.len(), 254 + 8);
    assert_eq!(InfoFrame::decode(&raw).unwrap().data, payload);
}
