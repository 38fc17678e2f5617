// pn532/src/protocol/mod.rs

pub mod checksum;
pub mod commands;
pub mod frame;
pub mod parser;
pub mod reassembler;
pub mod responses;

pub use checksum::{dcs, lcs};
pub use commands::*;
pub use frame::{FrameType, InfoFrame, RespFrame};
pub use reassembler::Reassembler;
pub use responses::*;
