// pn532/src/protocol/commands/firmware.rs

use crate::constants::CMD_GET_FIRMWARE_VERSION;

/// Encode the GetFirmwareVersion command payload (code 0x02, no params).
pub fn encode_firmware_version() -> Vec<u8> {
    vec![CMD_GET_FIRMWARE_VERSION]
}
