// pn532/src/transport/mock.rs

use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Condvar, Mutex, MutexGuard};

use crate::transport::traits::Transport;
use crate::Result;

#[derive(Debug, Default)]
struct State {
    incoming: VecDeque<u8>,
    sent: Vec<Vec<u8>>,
    closed: bool,
}

/// Mock transport for unit tests. Scripted inbound bytes are handed out by
/// blocking reads exactly like a serial port would; every write is
/// recorded. Clones share the same underlying stream, so a test can keep
/// one handle for scripting and assertions after a `Device` owns the other.
#[derive(Debug, Clone, Default)]
pub struct MockTransport {
    state: Arc<(Mutex<State>, Condvar)>,
}

impl MockTransport {
    /// Empty mock: nothing scripted, nothing recorded.
    pub fn new() -> Self {
        Self::default()
    }

    // A panicking test thread may poison the lock; the state itself is
    // still usable.
    fn lock(&self) -> MutexGuard<'_, State> {
        self.state.0.lock().unwrap_or_else(|e| e.into_inner())
    }

    /// Queue bytes for subsequent reads and wake any blocked reader.
    pub fn push_response(&self, bytes: &[u8]) {
        let mut state = self.lock();
        state.incoming.extend(bytes.iter().copied());
        self.state.1.notify_all();
    }

    /// Everything written so far, one entry per `write_all` call.
    pub fn sent(&self) -> Vec<Vec<u8>> {
        self.lock().sent.clone()
    }

    /// Concatenation of everything written so far.
    pub fn sent_bytes(&self) -> Vec<u8> {
        self.lock().sent.concat()
    }
}

impl Transport for MockTransport {
    fn read(&mut self, buf: &mut [u8]) -> Result<usize> {
        let mut state = self.lock();
        while state.incoming.is_empty() {
            if state.closed {
                return Err(io::Error::new(io::ErrorKind::BrokenPipe, "transport closed").into());
            }
            state = self
                .state
                .1
                .wait(state)
                .unwrap_or_else(|e| e.into_inner());
        }
        let n = buf.len().min(state.incoming.len());
        for (slot, byte) in buf.iter_mut().zip(state.incoming.drain(..n)) {
            *slot = byte;
        }
        Ok(n)
    }

    fn write_all(&mut self, data: &[u8]) -> Result<()> {
        let mut state = self.lock();
        if state.closed {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "transport closed").into());
        }
        state.sent.push(data.to_vec());
        Ok(())
    }

    fn close(&mut self) -> Result<()> {
        self.lock().closed = true;
        self.state.1.notify_all();
        Ok(())
    }

    fn try_clone(&self) -> Result<Box<dyn Transport>> {
        Ok(Box::new(self.clone()))
    }
}
