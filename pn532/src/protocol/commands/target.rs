// pn532/src/protocol/commands/target.rs

use crate::constants::{CMD_IN_AUTO_POLL, CMD_IN_LIST_PASSIVE_TARGET};
use crate::types::CardBaud;

/// Encode the InListPassiveTarget command payload (code 0x4A).
///
/// The chip can enumerate up to two targets at once, but one is all the
/// Mifare flow ever needs, so the max-targets byte is fixed at 1.
pub fn encode_list_passive_target(card_baud: CardBaud) -> Vec<u8> {
    vec![CMD_IN_LIST_PASSIVE_TARGET, 0x01, card_baud as u8]
}

/// Encode the InAutoPoll command payload (code 0x60). Parameter ranges are
/// validated by the caller before any I/O happens.
pub fn encode_auto_poll(poll_nr: u8, period: u8, types: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(3 + types.len());
    buf.push(CMD_IN_AUTO_POLL);
    buf.push(poll_nr);
    buf.push(period);
    buf.extend_from_slice(types);
    buf
}
