// pn532/src/device/mod.rs

pub mod handle;
pub mod operations;

pub use handle::Device;
