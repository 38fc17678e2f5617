// pn532/src/lib.rs

//! pn532
//!
//! Pure Rust host-side driver for the NXP PN532 contactless reader chip
//! over a serial link: frame codec, byte-stream reassembly, the
//! command/ACK/reply exchange discipline and the common firmware commands
//! (firmware version, SAM configuration, passive-target polling and
//! Mifare Classic block access).
#![warn(missing_docs)]

pub mod constants;
pub mod device;
pub mod error;
pub mod prelude;
pub mod protocol;
pub mod test_support;
pub mod transport;
pub mod types;
pub mod utils;

// Re-export common types at crate root so `crate::Error`, `crate::Result`,
// and the newtypes in `types` are available for consumers and for
// convenient `prelude` re-exports.
pub use crate::error::*;
pub use crate::types::*;

pub use prelude::*;
