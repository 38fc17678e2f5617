// pn532/src/constants.rs
//! Wire-level byte constants shared across the crate.

/// Start of every PN532 frame: preamble 0x00 followed by the 0x00 0xFF
/// start code.
pub const START_SEQUENCE: [u8; 3] = [0x00, 0x00, 0xFF];

/// Frame preamble byte.
pub const PREAMBLE: u8 = 0x00;

/// Frame postamble byte.
pub const POSTAMBLE: u8 = 0x00;

/// TFI for frames travelling host -> PN532.
pub const TFI_HOST_TO_DEVICE: u8 = 0xD4;

/// TFI for frames travelling PN532 -> host.
pub const TFI_DEVICE_TO_HOST: u8 = 0xD5;

/// Minimal byte count of a decodable normal frame.
pub const MIN_NORMAL_FRAME_LEN: usize = 8;

/// The ACK frame confirms that the previous command frame was received.
pub const ACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0x00, 0xFF, 0x00];

/// The NACK frame asks for retransmission of the previous frame.
pub const NACK_FRAME: [u8; 6] = [0x00, 0x00, 0xFF, 0xFF, 0x00, 0x00];

/// The application-level error frame emitted by the chip.
pub const ERROR_FRAME: [u8; 8] = [0x00, 0x00, 0xFF, 0x01, 0xFF, 0x7F, 0x81, 0x00];

/// Wake-up preamble: a 0x55 dummy byte plus padding, sent ahead of the
/// first command frame to bring the chip out of low-power mode.
pub const WAKEUP: [u8; 13] = [
    0x55, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00,
];

// PN532 command codes (UM0701-02 §7).

/// Diagnose: self tests (communication line, ROM/RAM, antenna).
pub const CMD_DIAGNOSE: u8 = 0x00;
/// GetFirmwareVersion: IC, firmware version/revision, protocol support.
pub const CMD_GET_FIRMWARE_VERSION: u8 = 0x02;
/// GetGeneralStatus: last error, field presence, listed targets.
pub const CMD_GET_GENERAL_STATUS: u8 = 0x04;
/// ReadRegister: read internal registers or XRAM.
pub const CMD_READ_REGISTER: u8 = 0x06;
/// WriteRegister: write internal registers or XRAM.
pub const CMD_WRITE_REGISTER: u8 = 0x08;
/// ReadGPIO: read the GPIO pin levels.
pub const CMD_READ_GPIO: u8 = 0x0C;
/// WriteGPIO: drive the GPIO pins.
pub const CMD_WRITE_GPIO: u8 = 0x0E;
/// SetSerialBaudRate: change the HSU link speed.
pub const CMD_SET_SERIAL_BAUD_RATE: u8 = 0x10;
/// SetParameters: flip the internal protocol flag bits.
pub const CMD_SET_PARAMETERS: u8 = 0x12;
/// SAMConfiguration: select how the security access module is used.
pub const CMD_SAM_CONFIGURATION: u8 = 0x14;
/// PowerDown: put the chip into low-power mode.
pub const CMD_POWER_DOWN: u8 = 0x16;
/// RFConfiguration: RF field, timing and retry settings.
pub const CMD_RF_CONFIGURATION: u8 = 0x32;
/// RFRegulationTest: emit a constant carrier for regulation tests.
pub const CMD_RF_REGULATION_TEST: u8 = 0x58;
/// InJumpForDEP: activate a target for a DEP exchange.
pub const CMD_IN_JUMP_FOR_DEP: u8 = 0x56;
/// InJumpForPSL: activate a target allowing a later speed change.
pub const CMD_IN_JUMP_FOR_PSL: u8 = 0x46;
/// InListPassiveTarget: enumerate passive targets in the field.
pub const CMD_IN_LIST_PASSIVE_TARGET: u8 = 0x4A;
/// InATR: request the target's attributes (ATR_RES).
pub const CMD_IN_ATR: u8 = 0x50;
/// InPSL: change the baud rate of an active DEP link.
pub const CMD_IN_PSL: u8 = 0x4E;
/// InDataExchange: exchange card-level data with a listed target.
pub const CMD_IN_DATA_EXCHANGE: u8 = 0x40;
/// InCommunicateThru: raw exchange bypassing the chip's protocol handling.
pub const CMD_IN_COMMUNICATE_THRU: u8 = 0x42;
/// InDeselect: deselect listed targets without releasing them.
pub const CMD_IN_DESELECT: u8 = 0x44;
/// InRelease: release listed targets.
pub const CMD_IN_RELEASE: u8 = 0x52;
/// InSelect: select a previously deselected target.
pub const CMD_IN_SELECT: u8 = 0x54;
/// InAutoPoll: poll repeatedly for targets of the given types.
pub const CMD_IN_AUTO_POLL: u8 = 0x60;

// Mifare Classic sub-commands carried inside InDataExchange.

/// Authenticate a block with key A.
pub const MIFARE_CMD_AUTH_A: u8 = 0x60;
/// Authenticate a block with key B.
pub const MIFARE_CMD_AUTH_B: u8 = 0x61;
/// Read one 16-byte block.
pub const MIFARE_CMD_READ: u8 = 0x30;
/// Write one 16-byte block.
pub const MIFARE_CMD_WRITE: u8 = 0xA0;
/// Transfer the internal register to a value block.
pub const MIFARE_CMD_TRANSFER: u8 = 0xB0;
/// Decrement a value block into the internal register.
pub const MIFARE_CMD_DECREMENT: u8 = 0xC0;
/// Increment a value block into the internal register.
pub const MIFARE_CMD_INCREMENT: u8 = 0xC1;
/// Store the internal register into a value block.
pub const MIFARE_CMD_STORE: u8 = 0xC2;

/// SAMConfiguration timeout byte used by the quick-init handshake
/// (0x17 units of 50ms, roughly one second).
pub const SAM_DEFAULT_TIMEOUT: u8 = 0x17;

/// Serial link speed expected by the chip in its default configuration.
pub const DEFAULT_BAUD_RATE: u32 = 115_200;
