// pn532/src/device/handle.rs

use std::sync::mpsc::{self, Receiver, RecvTimeoutError, Sender};
use std::thread;
use std::time::{Duration, Instant};

use log::{debug, error};

use crate::constants::{SAM_DEFAULT_TIMEOUT, WAKEUP};
use crate::protocol::commands::Command;
use crate::protocol::frame::{FrameType, InfoFrame, RespFrame};
use crate::protocol::reassembler::Reassembler;
use crate::protocol::responses::Response;
use crate::transport::Transport;
use crate::types::SamMode;
use crate::utils::{bytes_to_hex_spaced, default_response_timeout};
use crate::{Error, Result};

const READ_CHUNK_SIZE: usize = 512;

/// An open PN532 session over a [`Transport`].
///
/// On construction the transport is cloned and handed to a dedicated
/// reader thread that pulls raw chunks off the wire; a second thread runs
/// the [`Reassembler`] over those chunks and forwards classified frames
/// into a channel this handle drains. Commands are written on the
/// original transport handle, so the exchange discipline is strictly
/// half-duplex: write a command frame, wait for ACK or NACK, then wait
/// for the reply information frame.
///
/// All exchange methods take `&mut self`, so at most one command is in
/// flight per session.
pub struct Device {
    writer: Box<dyn Transport>,
    frames: Receiver<RespFrame>,
    wakeup_sent: bool,
    response_timeout: Duration,
}

impl Device {
    /// Open a session on an already-configured transport and spawn its
    /// reader and reassembly threads.
    pub fn new(transport: Box<dyn Transport>) -> Result<Self> {
        let reader = transport.try_clone()?;
        let (chunk_tx, chunk_rx) = mpsc::channel::<Vec<u8>>();
        let (frame_tx, frame_rx) = mpsc::channel::<RespFrame>();

        thread::Builder::new()
            .name("pn532-reader".into())
            .spawn(move || read_loop(reader, chunk_tx))?;
        thread::Builder::new()
            .name("pn532-reassembler".into())
            .spawn(move || reassemble_loop(chunk_rx, frame_tx))?;

        Ok(Self {
            writer: transport,
            frames: frame_rx,
            wakeup_sent: false,
            response_timeout: default_response_timeout(),
        })
    }

    /// Open a session and run the canonical init sequence: SAMConfiguration
    /// in normal mode with the default timeout, which also confirms the
    /// device is awake and responding.
    pub fn quick_init(transport: Box<dyn Transport>) -> Result<Self> {
        let mut device = Self::new(transport)?;
        device.sam_configuration(SamMode::Normal, SAM_DEFAULT_TIMEOUT)?;
        Ok(device)
    }

    /// How long exchanges wait for the ACK and for the reply frame.
    pub fn response_timeout(&self) -> Duration {
        self.response_timeout
    }

    /// Change how long exchanges wait before giving up with `Timeout`.
    pub fn set_response_timeout(&mut self, timeout: Duration) {
        self.response_timeout = timeout;
    }

    /// Frame the payload and write it to the device. The first frame of a
    /// session is prefixed with the serial wake-up sequence so a device in
    /// low-power mode sees a valid start of frame.
    pub fn write_frame(&mut self, payload: &[u8]) -> Result<()> {
        let frame = InfoFrame::new(payload)?.to_bytes();
        let bytes = if self.wakeup_sent {
            frame
        } else {
            self.wakeup_sent = true;
            let mut prefixed = WAKEUP.to_vec();
            prefixed.extend_from_slice(&frame);
            prefixed
        };
        debug!("write: {}", bytes_to_hex_spaced(&bytes));
        self.writer.write_all(&bytes)
    }

    /// Send a command payload and wait for the device to acknowledge it.
    /// Returns `true` on ACK and `false` on NACK; any other frame arriving
    /// in the acknowledge slot is a protocol violation.
    pub fn send_command(&mut self, payload: &[u8]) -> Result<bool> {
        self.write_frame(payload)?;
        let frame = self.recv_frame(self.response_timeout)?;
        match frame.frame_type {
            FrameType::Ack => Ok(true),
            FrameType::Nack => Ok(false),
            other => Err(Error::UnexpectedFrame(other)),
        }
    }

    /// Wait for the next normal information frame, skipping over any
    /// stray ACK/NACK/error frames, and decode it. The configured
    /// response timeout bounds the whole wait, not each frame.
    pub fn wait_info_frame(&mut self) -> Result<InfoFrame> {
        let deadline = Instant::now() + self.response_timeout;
        loop {
            let remaining = deadline.saturating_duration_since(Instant::now());
            let frame = self.recv_frame(remaining)?;
            match frame.frame_type {
                FrameType::Normal => return InfoFrame::decode(&frame.raw),
                other => debug!("skipping {:?} frame while waiting for a reply", other),
            }
        }
    }

    /// Run a full command exchange: send, require an ACK, then wait for
    /// the reply frame and decode it for the command that was sent.
    pub fn execute(&mut self, command: &Command) -> Result<Response> {
        debug!("execute: {:?}", command);
        if !self.send_command(&command.encode())? {
            return Err(Error::CommandRejected);
        }
        let frame = self.wait_info_frame()?;
        Response::decode(command.command_code(), &frame.data)
    }

    /// Close the underlying transport. The reader thread observes the
    /// closed stream and exits; subsequent exchanges fail.
    pub fn close(&mut self) -> Result<()> {
        self.writer.close()
    }

    fn recv_frame(&self, timeout: Duration) -> Result<RespFrame> {
        match self.frames.recv_timeout(timeout) {
            Ok(frame) => {
                debug!(
                    "read {:?}: {}",
                    frame.frame_type,
                    bytes_to_hex_spaced(&frame.raw)
                );
                Ok(frame)
            }
            Err(RecvTimeoutError::Timeout) => Err(Error::Timeout),
            Err(RecvTimeoutError::Disconnected) => Err(Error::SessionClosed),
        }
    }
}

impl Drop for Device {
    fn drop(&mut self) {
        if let Err(err) = self.writer.close() {
            debug!("transport close on drop failed: {}", err);
        }
    }
}

fn read_loop(mut reader: Box<dyn Transport>, chunks: Sender<Vec<u8>>) {
    let mut buf = [0u8; READ_CHUNK_SIZE];
    loop {
        match reader.read(&mut buf) {
            // Zero bytes from a blocking read is end of stream (hung-up
            // peer); the session cannot recover, so stop reading. Dropping
            // the sender surfaces SessionClosed to waiting callers.
            Ok(0) => {
                debug!("transport reached end of stream, ending session");
                return;
            }
            Ok(n) => {
                if chunks.send(buf[..n].to_vec()).is_err() {
                    return;
                }
            }
            Err(err) => {
                error!("transport read failed, ending session: {}", err);
                return;
            }
        }
    }
}

fn reassemble_loop(chunks: Receiver<Vec<u8>>, frames: Sender<RespFrame>) {
    let mut reassembler = Reassembler::new();
    while let Ok(chunk) = chunks.recv() {
        for frame in reassembler.feed(&chunk) {
            if frames.send(frame).is_err() {
                return;
            }
        }
    }
}
