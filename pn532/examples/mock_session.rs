// Scripted end-to-end session against the mock transport.

// This example runs the full command/ACK/reply exchange without hardware:
// the mock plays back the byte streams a real PN532 would produce. Run with
// RUST_LOG=debug to watch the frames on the "wire".

use pn532::prelude::*;
use pn532::test_support::response_frame;

fn main() -> Result<()> {
    env_logger::init();

    let mock = MockTransport::new();

    // Script one exchange per command: ACK then the reply frame.
    let ack = pn532::constants::ACK_FRAME;
    // SAMConfiguration reply (quick_init handshake)
    mock.push_response(&ack);
    mock.push_response(&response_frame(&[0x15]));
    // GetFirmwareVersion: PN532, v1.6, all protocols supported
    mock.push_response(&ack);
    mock.push_response(&response_frame(&[0x03, 0x32, 0x01, 0x06, 0x07]));
    // InListPassiveTarget: one ISO14443A target with a 4-byte UID
    mock.push_response(&ack);
    mock.push_response(&response_frame(&[
        0x4B, 0x01, 0x01, 0x00, 0x04, 0x08, 0x04, 0xEE, 0x27, 0x25, 0xE5,
    ]));
    // InDataExchange: authenticate, then read block 4
    mock.push_response(&ack);
    mock.push_response(&response_frame(&[0x41, 0x00]));
    mock.push_response(&ack);
    let mut read_reply = vec![0x41, 0x00];
    read_reply.extend_from_slice(b"hello, mifare!\x00\x00");
    mock.push_response(&response_frame(&read_reply));

    let mut device = Device::quick_init(Box::new(mock))?;

    let fw = device.firmware_version()?;
    println!("Chip: {}", fw);

    let uid = device.read_passive_target(CardBaud::Iso14443a)?;
    println!("Card UID: {}", uid.to_hex());

    device.mifare_classic_authenticate_block(uid, 4, KeyType::AuthA, MifareKey::DEFAULT)?;
    let block = device.mifare_classic_read_block(4)?;
    println!("Block 4: {}", block.to_hex());
    println!("         {}", block.to_ascii_safe());

    Ok(())
}
