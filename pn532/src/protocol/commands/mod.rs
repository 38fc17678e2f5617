// pn532/src/protocol/commands/mod.rs

pub mod firmware;
pub mod mifare;
pub mod parameters;
pub mod sam;
pub mod target;

pub use firmware::encode_firmware_version;
pub use mifare::{encode_authenticate_block, encode_read_block, encode_write_block};
pub use parameters::encode_set_parameters;
pub use sam::encode_sam_configuration;
pub use target::{encode_auto_poll, encode_list_passive_target};

use crate::constants;
use crate::types::{BlockData, CardBaud, KeyType, MifareKey, Parameters, SamMode, Uid};

/// High-level Command enum. New commands should be added here and their
/// per-command encoder placed in `protocol::commands::<name>.rs`.
#[derive(Debug, Clone)]
pub enum Command {
    /// GetFirmwareVersion (0x02), no parameters.
    FirmwareVersion,
    /// SAMConfiguration (0x14): mode plus virtual-card timeout.
    SamConfiguration {
        /// How the security access module is used.
        mode: SamMode,
        /// Virtual-card timeout in units of 50 ms.
        timeout: u8,
    },
    /// SetParameters (0x12): the internal protocol flag bits.
    SetParameters {
        /// Flags packed into the wire bitmask.
        params: Parameters,
    },
    /// InListPassiveTarget (0x4A) for exactly one target.
    ListPassiveTarget {
        /// Baud rate / modulation to listen for.
        card_baud: CardBaud,
    },
    /// InAutoPoll (0x60): repeated polling across target types.
    AutoPoll {
        /// Number of polling rounds (0xFF = endless).
        poll_nr: u8,
        /// Round period in units of 150 ms.
        period: u8,
        /// Target type codes to poll for.
        types: Vec<u8>,
    },
    /// Mifare Classic block authentication via InDataExchange (0x40).
    MifareAuthenticateBlock {
        /// UID of the selected card.
        uid: Uid,
        /// Block to authenticate.
        block_number: u8,
        /// Key A or key B.
        key_type: KeyType,
        /// The 6-byte sector key.
        key: MifareKey,
    },
    /// Mifare Classic block read via InDataExchange (0x40).
    MifareReadBlock {
        /// Block to read.
        block_number: u8,
    },
    /// Mifare Classic block write via InDataExchange (0x40).
    MifareWriteBlock {
        /// Block to write.
        block_number: u8,
        /// The 16 bytes to store.
        data: BlockData,
    },
}

impl Command {
    /// Return the PN532 command code; the chip echoes code + 1 in replies.
    pub fn command_code(&self) -> u8 {
        match self {
            Self::FirmwareVersion => constants::CMD_GET_FIRMWARE_VERSION,
            Self::SamConfiguration { .. } => constants::CMD_SAM_CONFIGURATION,
            Self::SetParameters { .. } => constants::CMD_SET_PARAMETERS,
            Self::ListPassiveTarget { .. } => constants::CMD_IN_LIST_PASSIVE_TARGET,
            Self::AutoPoll { .. } => constants::CMD_IN_AUTO_POLL,
            Self::MifareAuthenticateBlock { .. }
            | Self::MifareReadBlock { .. }
            | Self::MifareWriteBlock { .. } => constants::CMD_IN_DATA_EXCHANGE,
        }
    }

    /// Encode the command into the raw frame payload (command code + params).
    pub fn encode(&self) -> Vec<u8> {
        match self {
            Self::FirmwareVersion => encode_firmware_version(),
            Self::SamConfiguration { mode, timeout } => {
                encode_sam_configuration(*mode, *timeout)
            }
            Self::SetParameters { params } => encode_set_parameters(*params),
            Self::ListPassiveTarget { card_baud } => encode_list_passive_target(*card_baud),
            Self::AutoPoll {
                poll_nr,
                period,
                types,
            } => encode_auto_poll(*poll_nr, *period, types),
            Self::MifareAuthenticateBlock {
                uid,
                block_number,
                key_type,
                key,
            } => encode_authenticate_block(*uid, *block_number, *key_type, *key),
            Self::MifareReadBlock { block_number } => encode_read_block(*block_number),
            Self::MifareWriteBlock { block_number, data } => {
                encode_write_block(*block_number, *data)
            }
        }
    }
}
