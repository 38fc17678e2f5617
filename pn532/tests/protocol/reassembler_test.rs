#[path = "../common/mod.rs"]
mod common;

use pn532::constants::{ACK_FRAME, ERROR_FRAME, NACK_FRAME};
use pn532::protocol::{FrameType, Reassembler};

#[test]
fn full_exchange_stream_reassembles_in_order() {
    // What a well-behaved device produces for one command: ACK, then the
    // reply information frame.
    let mut stream = ACK_FRAME.to_vec();
    stream.extend_from_slice(&common::fixtures::firmware_reply_frame());

    let mut r = Reassembler::new();
    let frames = r.feed(&stream);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].frame_type, FrameType::Ack);
    assert_eq!(frames[1].frame_type, FrameType::Normal);
}

#[test]
fn classification_of_fixed_frames() {
    let mut r = Reassembler::new();
    let mut stream = NACK_FRAME.to_vec();
    stream.extend_from_slice(&ERROR_FRAME);
    let frames = r.feed(&stream);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].frame_type, FrameType::Nack);
    assert_eq!(frames[1].frame_type, FrameType::Error);
}

#[test]
fn resyncs_after_line_noise() {
    let mut stream = vec![0x13, 0x37, 0x00, 0xFF, 0x55];
    stream.extend_from_slice(&ACK_FRAME);

    let mut r = Reassembler::new();
    let frames = r.feed(&stream);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].frame_type, FrameType::Ack);
}

#[test]
fn garbage_ending_in_zeros_does_not_eat_the_next_frame() {
    // Trailing 0x00 bytes of the garbage overlap the next frame's start
    // sequence; the seeker must not lose them.
    let mut stream = vec![0xAB, 0x00, 0x00];
    stream.extend_from_slice(&common::fixtures::sam_configuration_reply_frame()[2..]);

    let mut r = Reassembler::new();
    let frames = r.feed(&stream);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].frame_type, FrameType::Normal);
}

#[test]
fn byte_at_a_time_equals_one_chunk() {
    let stream = common::fixtures::firmware_reply_frame();

    let mut chunked = Reassembler::new();
    let all_at_once = chunked.feed(&stream);

    let mut single = Reassembler::new();
    let mut one_by_one = Vec::new();
    for &b in &stream {
        if let Some(frame) = single.push(b) {
            one_by_one.push(frame);
        }
    }
    assert_eq!(all_at_once, one_by_one);
}

#[test]
fn corrupted_frame_is_dropped_and_stream_recovers() {
    let mut bad = common::fixtures::firmware_reply_frame();
    let dcs_idx = bad.len() - 2;
    bad[dcs_idx] ^= 0xFF;
    bad.extend_from_slice(&ACK_FRAME);

    let mut r = Reassembler::new();
    let frames = r.feed(&bad);
    assert_eq!(frames.len(), 1);
    assert_eq!(frames[0].frame_type, FrameType::Ack);
}

#[test]
fn extended_frame_is_consumed_whole() {
    // Extended frame: FF FF length pair, then the announced body.
    let ext_len = 4usize;
    let mut stream = vec![0x00, 0x00, 0xFF, 0xFF, 0xFF, 0x00, ext_len as u8];
    stream.resize(9 + ext_len, 0x11);
    stream.extend_from_slice(&ACK_FRAME);

    let mut r = Reassembler::new();
    let frames = r.feed(&stream);
    assert_eq!(frames.len(), 2);
    assert_eq!(frames[0].frame_type, FrameType::Extended);
    assert_eq!(frames[0].raw.len(), 9 + ext_len);
    assert_eq!(frames[1].frame_type, FrameType::Ack);
}
