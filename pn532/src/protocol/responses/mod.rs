// pn532/src/protocol/responses/mod.rs

pub mod firmware;
pub mod mifare;
pub mod target;

pub use firmware::decode_firmware_version;
pub use mifare::{block_from_exchange, decode_data_exchange};
pub use target::{decode_auto_poll, decode_list_passive_target};

use crate::constants;
use crate::protocol::parser;
use crate::types::{FirmwareVersion, Uid};

/// High-level Response enum. Per-command decoders live in
/// `protocol::responses::<name>.rs` and are dispatched here.
#[derive(Debug, Clone)]
pub enum Response {
    /// GetFirmwareVersion reply, decoded into its typed fields.
    FirmwareVersion(FirmwareVersion),
    /// SAMConfiguration reply (echo only).
    SamConfiguration,
    /// SetParameters reply (echo only).
    SetParameters,
    /// InListPassiveTarget reply for a single target.
    ListPassiveTarget {
        /// UID of the discovered target.
        uid: Uid,
    },
    /// InAutoPoll reply.
    AutoPoll {
        /// Raw target data of the first target found.
        targets: Vec<u8>,
    },
    /// InDataExchange reply.
    DataExchange {
        /// Device status byte; non-zero means the exchange failed.
        status: u8,
        /// Bytes following the status byte.
        payload: Vec<u8>,
    },
}

impl Response {
    /// Decode a reply payload (including the echoed response code) for the
    /// given command code.
    pub fn decode(expected_cmd: u8, data: &[u8]) -> crate::Result<Self> {
        // Central echo check: every PN532 reply starts with command + 1.
        // Doing it here keeps the per-command decoders free of the
        // first-byte verification and of empty-slice panics.
        parser::ensure_len(data, 1)?;
        parser::expect_response_code(data, expected_cmd)?;

        match expected_cmd {
            constants::CMD_GET_FIRMWARE_VERSION => Ok(Self::FirmwareVersion(
                firmware::decode_firmware_version(data)?,
            )),
            constants::CMD_SAM_CONFIGURATION => Ok(Self::SamConfiguration),
            constants::CMD_SET_PARAMETERS => Ok(Self::SetParameters),
            constants::CMD_IN_LIST_PASSIVE_TARGET => Ok(Self::ListPassiveTarget {
                uid: target::decode_list_passive_target(data)?,
            }),
            constants::CMD_IN_AUTO_POLL => Ok(Self::AutoPoll {
                targets: target::decode_auto_poll(data)?,
            }),
            constants::CMD_IN_DATA_EXCHANGE => {
                let (status, payload) = mifare::decode_data_exchange(data)?;
                Ok(Self::DataExchange { status, payload })
            }
            _ => {
                let actual = data.first().copied().unwrap_or(0);
                Err(crate::Error::UnexpectedResponse {
                    expected: expected_cmd.wrapping_add(1),
                    actual,
                })
            }
        }
    }
}
