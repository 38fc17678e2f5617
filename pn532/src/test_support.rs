//! Test support helpers intended for use by unit and integration tests.
//!
//! These helpers centralize common MockTransport setup so tests across the
//! crate and tests/ directory can reuse the same logic.
#![allow(dead_code)]

use crate::constants::{ACK_FRAME, POSTAMBLE, START_SEQUENCE, TFI_DEVICE_TO_HOST};
use crate::device::Device;
use crate::protocol::checksum;
use crate::transport::MockTransport;

/// Frame a device-to-host reply payload the way the chip would put it on
/// the wire: start sequence, length and checksums, 0xD5 frame identifier.
#[doc(hidden)]
pub fn response_frame(data: &[u8]) -> Vec<u8> {
    let len = (data.len() + 1) as u8;
    let mut frame = START_SEQUENCE.to_vec();
    frame.push(len);
    frame.push(checksum::lcs(len));
    frame.push(TFI_DEVICE_TO_HOST);
    frame.extend_from_slice(data);
    frame.push(checksum::dcs(TFI_DEVICE_TO_HOST, data));
    frame.push(POSTAMBLE);
    frame
}

/// Concatenate an ACK frame with the given pre-framed replies, the byte
/// stream a well-behaved device produces for one command exchange.
#[doc(hidden)]
pub fn ack_then(frames: &[&[u8]]) -> Vec<u8> {
    let mut stream = ACK_FRAME.to_vec();
    for frame in frames {
        stream.extend_from_slice(frame);
    }
    stream
}

/// Convenience: build a Device over a MockTransport scripted with one
/// ACK + reply pair per entry, returning the mock handle for write
/// assertions. Panics on setup failure, which only tests should see.
#[doc(hidden)]
pub fn scripted_device(replies: &[&[u8]]) -> (Device, MockTransport) {
    let mock = MockTransport::new();
    for reply in replies {
        mock.push_response(&ACK_FRAME);
        mock.push_response(reply);
    }
    let device = match Device::new(Box::new(mock.clone())) {
        Ok(device) => device,
        Err(err) => panic!("mock device setup failed: {}", err),
    };
    (device, mock)
}
