// pn532/src/device/operations.rs

use log::{debug, info};

use crate::device::Device;
use crate::protocol::commands::Command;
use crate::protocol::responses::{self, Response};
use crate::types::{BlockData, CardBaud, FirmwareVersion, KeyType, MifareKey, Parameters, SamMode, Uid};
use crate::{Error, Result};

/// Firmware-defined operations. Each of these runs one full command
/// exchange and returns the decoded result.
impl Device {
    /// GetFirmwareVersion: identify the chip and its firmware revision.
    pub fn firmware_version(&mut self) -> Result<FirmwareVersion> {
        match self.execute(&Command::FirmwareVersion)? {
            Response::FirmwareVersion(fw) => {
                info!("firmware: {}", fw);
                Ok(fw)
            }
            other => Err(mismatched_response(other)),
        }
    }

    /// SAMConfiguration: select how the security access module is used.
    /// `timeout` is in units of 50 ms and only matters in virtual-card
    /// mode; the reply carries no payload beyond the echo.
    pub fn sam_configuration(&mut self, mode: SamMode, timeout: u8) -> Result<()> {
        match self.execute(&Command::SamConfiguration { mode, timeout })? {
            Response::SamConfiguration => Ok(()),
            other => Err(mismatched_response(other)),
        }
    }

    /// SetParameters: flip the chip's internal protocol flags.
    pub fn set_parameters(&mut self, params: Parameters) -> Result<()> {
        match self.execute(&Command::SetParameters { params })? {
            Response::SetParameters => Ok(()),
            other => Err(mismatched_response(other)),
        }
    }

    /// InListPassiveTarget: wait for a single target of the given baud
    /// modulation to enter the field and return its UID.
    pub fn read_passive_target(&mut self, card_baud: CardBaud) -> Result<Uid> {
        match self.execute(&Command::ListPassiveTarget { card_baud })? {
            Response::ListPassiveTarget { uid } => {
                debug!("target uid: {}", uid.to_hex());
                Ok(uid)
            }
            other => Err(mismatched_response(other)),
        }
    }

    /// InAutoPoll: poll for `poll_nr` rounds, `period` x 150 ms each,
    /// across the given target type codes. Returns the raw target data
    /// of the first target found.
    pub fn in_auto_poll(&mut self, poll_nr: u8, period: u8, types: &[u8]) -> Result<Vec<u8>> {
        if poll_nr < 1 {
            return Err(Error::InvalidArgument {
                name: "poll_nr",
                reason: "must be at least 1".into(),
            });
        }
        if !(1..=15).contains(&period) {
            return Err(Error::InvalidArgument {
                name: "period",
                reason: format!("{} is outside 1..=15", period),
            });
        }
        if types.is_empty() || types.len() > 254 {
            return Err(Error::InvalidArgument {
                name: "types",
                reason: format!("{} type codes is outside 1..=254", types.len()),
            });
        }
        let cmd = Command::AutoPoll {
            poll_nr,
            period,
            types: types.to_vec(),
        };
        match self.execute(&cmd)? {
            Response::AutoPoll { targets } => Ok(targets),
            other => Err(mismatched_response(other)),
        }
    }

    /// Authenticate a Mifare Classic block with key A or key B before
    /// reading or writing it.
    pub fn mifare_classic_authenticate_block(
        &mut self,
        uid: Uid,
        block_number: u8,
        key_type: KeyType,
        key: MifareKey,
    ) -> Result<()> {
        let cmd = Command::MifareAuthenticateBlock {
            uid,
            block_number,
            key_type,
            key,
        };
        match self.execute(&cmd)? {
            Response::DataExchange { status, .. } => {
                if status != 0x00 {
                    return Err(Error::MifareStatus { status });
                }
                Ok(())
            }
            other => Err(mismatched_response(other)),
        }
    }

    /// Read one 16-byte block from an authenticated Mifare Classic card.
    pub fn mifare_classic_read_block(&mut self, block_number: u8) -> Result<BlockData> {
        match self.execute(&Command::MifareReadBlock { block_number })? {
            Response::DataExchange { status, payload } => {
                responses::block_from_exchange(status, &payload)
            }
            other => Err(mismatched_response(other)),
        }
    }

    /// Write one 16-byte block to an authenticated Mifare Classic card.
    pub fn mifare_classic_write_block(&mut self, block_number: u8, data: BlockData) -> Result<()> {
        match self.execute(&Command::MifareWriteBlock { block_number, data })? {
            Response::DataExchange { status, .. } => {
                if status != 0x00 {
                    return Err(Error::MifareStatus { status });
                }
                Ok(())
            }
            other => Err(mismatched_response(other)),
        }
    }
}

// Response::decode dispatches on the command code we sent, so a variant
// mismatch cannot happen unless the enum gains a command without a
// matching arm here.
fn mismatched_response(response: Response) -> Error {
    Error::FrameFormat(format!("mismatched response variant: {:?}", response))
}
