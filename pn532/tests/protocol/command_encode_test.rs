#[path = "../common/mod.rs"]
mod common;

use pn532::protocol::Command;
use pn532::types::{CardBaud, KeyType, MifareKey, Parameters, SamMode};

#[test]
fn firmware_version_encoding() {
    assert_eq!(Command::FirmwareVersion.encode(), vec![0x02]);
}

#[test]
fn sam_configuration_encoding() {
    let cmd = Command::SamConfiguration {
        mode: SamMode::Normal,
        timeout: 0x17,
    };
    assert_eq!(cmd.encode(), vec![0x14, 0x01, 0x17, 0x00]);
}

#[test]
fn set_parameters_encoding() {
    let params = Parameters {
        automatic_atr_res: true,
        automatic_rats: true,
        ..Parameters::default()
    };
    let cmd = Command::SetParameters { params };
    assert_eq!(cmd.encode(), vec![0x12, 0b0001_0100]);
}

#[test]
fn list_passive_target_encoding() {
    let cmd = Command::ListPassiveTarget {
        card_baud: CardBaud::Felica212,
    };
    assert_eq!(cmd.encode(), vec![0x4A, 0x01, 0x01]);
}

#[test]
fn auto_poll_encoding() {
    let cmd = Command::AutoPoll {
        poll_nr: 0x02,
        period: 0x03,
        types: vec![0x10, 0x20],
    };
    assert_eq!(cmd.encode(), vec![0x60, 0x02, 0x03, 0x10, 0x20]);
}

#[test]
fn mifare_authenticate_encoding() {
    let cmd = Command::MifareAuthenticateBlock {
        uid: common::fixtures::sample_uid(),
        block_number: 0x04,
        key_type: KeyType::AuthA,
        key: MifareKey::DEFAULT,
    };
    let mut expected = vec![0x40, 0x01, 0x60, 0x04];
    expected.extend_from_slice(&[0xFF; 6]);
    expected.extend_from_slice(&common::fixtures::sample_uid_bytes());
    assert_eq!(cmd.encode(), expected);
}

#[test]
fn mifare_read_and_write_encoding() {
    let read = Command::MifareReadBlock { block_number: 0x07 };
    assert_eq!(read.encode(), vec![0x40, 0x01, 0x30, 0x07]);

    let write = Command::MifareWriteBlock {
        block_number: 0x07,
        data: common::fixtures::sample_blockdata(0x42),
    };
    let mut expected = vec![0x40, 0x01, 0xA0, 0x07];
    expected.extend_from_slice(&[0x42; 16]);
    assert_eq!(write.encode(), expected);
}
