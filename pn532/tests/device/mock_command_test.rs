#[path = "../common/mod.rs"]
mod common;

use pn532::constants::{ACK_FRAME, WAKEUP};
use pn532::test_support::scripted_device;
use pn532::transport::MockTransport;
use pn532::types::{CardBaud, Parameters, SamMode};
use pn532::Device;

#[test]
fn quick_init_runs_sam_configuration() {
    let mock = MockTransport::new();
    mock.push_response(&ACK_FRAME);
    mock.push_response(&common::fixtures::sam_configuration_reply_frame());

    let _device = Device::quick_init(Box::new(mock.clone())).unwrap();

    let sent = mock.sent_bytes();
    assert!(sent.starts_with(&WAKEUP));
    // The framed SAMConfiguration payload follows the wake-up prefix:
    // normal mode, default timeout, no IRQ.
    assert_eq!(
        &sent[WAKEUP.len() + 6..WAKEUP.len() + 10],
        &[0x14, 0x01, 0x17, 0x00]
    );
}

#[test]
fn firmware_version_full_session() {
    let (mut device, mock) = scripted_device(&[&common::fixtures::firmware_reply_frame()]);

    let fw = device.firmware_version().unwrap();
    assert_eq!(fw.ic, 0x32);
    assert_eq!(format!("{}", fw), "IC 0x32 v1.6");

    let sent = mock.sent_bytes();
    assert_eq!(
        &sent[WAKEUP.len()..],
        &[0x00, 0x00, 0xFF, 0x02, 0xFE, 0xD4, 0x02, 0x2A, 0x00]
    );
}

#[test]
fn set_parameters_full_session() {
    let (mut device, mock) = scripted_device(&[&common::fixtures::set_parameters_reply_frame()]);
    let params = Parameters {
        automatic_rats: true,
        ..Parameters::default()
    };
    device.set_parameters(params).unwrap();
    let sent = mock.sent_bytes();
    assert_eq!(
        &sent[WAKEUP.len() + 6..WAKEUP.len() + 8],
        &[0x12, 0b0001_0000]
    );
}

#[test]
fn read_passive_target_full_session() {
    let uid = common::fixtures::sample_uid_bytes();
    let (mut device, _mock) =
        scripted_device(&[&common::fixtures::list_passive_target_reply(&uid)]);

    let parsed = device.read_passive_target(CardBaud::Iso14443a).unwrap();
    assert_eq!(parsed.as_bytes(), &uid);
    assert_eq!(parsed.to_hex(), "ee2725e5");
}

#[test]
fn consecutive_commands_share_one_wakeup() {
    let (mut device, mock) = scripted_device(&[
        &common::fixtures::sam_configuration_reply_frame(),
        &common::fixtures::firmware_reply_frame(),
    ]);

    device.sam_configuration(SamMode::Normal, 0x17).unwrap();
    device.firmware_version().unwrap();

    let sent = mock.sent();
    assert_eq!(sent.len(), 2);
    assert!(sent[0].starts_with(&WAKEUP));
    assert_eq!(&sent[1][..3], &[0x00, 0x00, 0xFF]);
}
