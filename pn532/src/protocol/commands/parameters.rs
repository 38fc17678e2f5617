// pn532/src/protocol/commands/parameters.rs

use crate::constants::CMD_SET_PARAMETERS;
use crate::types::Parameters;

/// Encode the SetParameters command payload (code 0x12).
pub fn encode_set_parameters(params: Parameters) -> Vec<u8> {
    vec![CMD_SET_PARAMETERS, params.bits()]
}
