#[path = "../common/mod.rs"]
mod common;

use std::time::Duration;

use pn532::constants::{ACK_FRAME, ERROR_FRAME};
use pn532::protocol::FrameType;
use pn532::test_support::scripted_device;
use pn532::transport::MockTransport;
use pn532::{Device, Error};

#[test]
fn line_noise_before_the_reply_is_ignored() {
    let mock = MockTransport::new();
    // Garbage, then the ACK, more garbage, then the reply frame.
    mock.push_response(&[0x55, 0x13, 0x37]);
    mock.push_response(&ACK_FRAME);
    mock.push_response(&[0x00, 0x00]);
    mock.push_response(&common::fixtures::firmware_reply_frame());

    let mut device = Device::new(Box::new(mock)).unwrap();
    let fw = device.firmware_version().unwrap();
    assert_eq!(fw.ic, 0x32);
}

#[test]
fn error_frame_in_the_ack_slot_is_a_protocol_error() {
    let mock = MockTransport::new();
    mock.push_response(&ERROR_FRAME);
    let mut device = Device::new(Box::new(mock)).unwrap();
    match device.send_command(&[0x02]) {
        Err(Error::UnexpectedFrame(FrameType::Error)) => {}
        other => panic!("expected UnexpectedFrame, got: {:?}", other),
    }
}

#[test]
fn silent_device_times_out() {
    let mock = MockTransport::new();
    let mut device = Device::new(Box::new(mock)).unwrap();
    device.set_response_timeout(Duration::from_millis(25));
    match device.firmware_version() {
        Err(Error::Timeout) => {}
        other => panic!("expected Timeout, got: {:?}", other),
    }
}

#[test]
fn nack_rejects_the_command() {
    let mock = MockTransport::new();
    mock.push_response(&pn532::constants::NACK_FRAME);
    let mut device = Device::new(Box::new(mock)).unwrap();
    match device.firmware_version() {
        Err(Error::CommandRejected) => {}
        other => panic!("expected CommandRejected, got: {:?}", other),
    }
}

#[test]
fn split_reply_across_transport_reads_still_decodes() {
    let mock = MockTransport::new();
    let reply = common::fixtures::firmware_reply_frame();
    mock.push_response(&ACK_FRAME[..3]);
    mock.push_response(&ACK_FRAME[3..]);
    mock.push_response(&reply[..5]);
    mock.push_response(&reply[5..]);

    let mut device = Device::new(Box::new(mock)).unwrap();
    let fw = device.firmware_version().unwrap();
    assert_eq!(fw.ver, 0x01);
}

#[test]
fn closed_session_fails_exchanges() {
    let (mut device, _mock) = scripted_device(&[]);
    device.close().unwrap();
    device.set_response_timeout(Duration::from_millis(200));
    match device.firmware_version() {
        Err(Error::Io(_)) | Err(Error::SessionClosed) => {}
        other => panic!("expected a closed-session error, got: {:?}", other),
    }
}
