// pn532/src/protocol/commands/sam.rs

use crate::constants::CMD_SAM_CONFIGURATION;
use crate::types::SamMode;

/// Encode the SAMConfiguration command payload (code 0x14).
///
/// `timeout` only matters in virtual-card mode; the trailing byte disables
/// the IRQ pin, which is absent on a serial-only wiring.
pub fn encode_sam_configuration(mode: SamMode, timeout: u8) -> Vec<u8> {
    vec![CMD_SAM_CONFIGURATION, mode as u8, timeout, 0x00]
}
