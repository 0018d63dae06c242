use std::io::{ErrorKind, Write};

use tracing::debug;

use crate::codec::Frame;
use crate::command::command_name;
use crate::error::{FrameError, Result};

/// Writes complete frames to any `Write` stream.
///
/// A frame is written exactly once; there is no resend at this level.
pub struct FrameWriter<T> {
    inner: T,
}

impl<T: Write> FrameWriter<T> {
    pub fn new(inner: T) -> Self {
        Self { inner }
    }

    /// Write a complete frame (blocking) and flush.
    ///
    /// Returns the number of bytes written, always the frame's wire size.
    pub fn write_frame(&mut self, frame: &Frame) -> Result<usize> {
        let bytes = frame.as_bytes();
        let mut offset = 0usize;
        while offset < bytes.len() {
            match self.inner.write(&bytes[offset..]) {
                Ok(0) => return Err(FrameError::ConnectionClosed),
                Ok(n) => offset += n,
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }

        self.flush()?;
        debug!(command = command_name(frame.command), raw = ?bytes, "frame sent");
        Ok(offset)
    }

    /// Flush the underlying stream.
    pub fn flush(&mut self) -> Result<()> {
        loop {
            match self.inner.flush() {
                Ok(()) => return Ok(()),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err) if err.kind() == ErrorKind::WouldBlock => continue,
                Err(err) => return Err(FrameError::Io(err)),
            }
        }
    }

    /// Borrow the underlying stream.
    pub fn get_ref(&self) -> &T {
        &self.inner
    }

    /// Mutably borrow the underlying stream.
    pub fn get_mut(&mut self) -> &mut T {
        &mut self.inner
    }

    /// Consume the writer and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }
}
