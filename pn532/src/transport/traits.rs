// pn532/src/transport/traits.rs

use crate::Result;

/// Transport abstracts the opened serial byte stream away from the
/// protocol and session logic. Opening and configuring the port (name,
/// baud rate, parity) is the caller's job; the driver only needs a
/// blocking duplex byte stream.
///
/// `try_clone` must return a handle onto the same underlying stream: the
/// session hands one clone to its dedicated reader task and keeps the
/// original for writing commands.
pub trait Transport: Send {
    /// Blocking read of up to `buf.len()` bytes. Returns the number of
    /// bytes read; an error is fatal to the session.
    fn read(&mut self, buf: &mut [u8]) -> Result<usize>;

    /// Write the whole buffer to the device.
    fn write_all(&mut self, data: &[u8]) -> Result<()>;

    /// Shut the stream down; pending and future reads fail afterwards.
    fn close(&mut self) -> Result<()>;

    /// Second handle onto the same stream.
    fn try_clone(&self) -> Result<Box<dyn Transport>>;
}
