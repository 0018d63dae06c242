use std::io::{ErrorKind, Read};
use std::time::Duration;

use tracing::{debug, trace, warn};

use crate::codec::{Response, RESPONSE_SIZE};
use crate::command::START_MARKER;
use crate::error::{FrameError, Result};

/// Default number of read attempts before giving up on a response.
pub const DEFAULT_MAX_ATTEMPTS: u32 = 10;

/// Default pause between read attempts that produced no frame.
pub const DEFAULT_RETRY_INTERVAL: Duration = Duration::from_millis(100);

/// Polling parameters for [`ResponseReader`].
#[derive(Debug, Clone)]
pub struct FrameConfig {
    /// Read attempts per response. Default: 10.
    pub max_attempts: u32,
    /// Sleep between attempts that produced no frame. Default: 100 ms.
    pub retry_interval: Duration,
}

impl Default for FrameConfig {
    fn default() -> Self {
        Self {
            max_attempts: DEFAULT_MAX_ATTEMPTS,
            retry_interval: DEFAULT_RETRY_INTERVAL,
        }
    }
}

/// Polls a `Read` stream for response frames.
///
/// Each attempt reads up to [`RESPONSE_SIZE`] bytes into a fresh buffer. An
/// attempt succeeds when it reads at least one byte and the first byte is the
/// start marker; bytes are never carried over between attempts.
pub struct ResponseReader<T> {
    inner: T,
    config: FrameConfig,
}

impl<T: Read> ResponseReader<T> {
    /// Create a new response reader with default configuration.
    pub fn new(inner: T) -> Self {
        Self::with_config(inner, FrameConfig::default())
    }

    /// Create a new response reader with explicit configuration.
    pub fn with_config(inner: T, config: FrameConfig) -> Self {
        Self { inner, config }
    }

    /// Wait for the next response (blocking).
    ///
    /// Returns `Err(FrameError::Timeout)` once `max_attempts` reads have
    /// passed without a frame.
    pub fn read_response(&mut self) -> Result<Response> {
        for attempt in 1..=self.config.max_attempts {
            let mut buf = [0u8; RESPONSE_SIZE];
            let read = self.read_attempt(&mut buf)?;

            if read > 0 && buf[0] == START_MARKER {
                let response = Response::new(buf, read);
                debug!(attempt, read, raw = %response.hex(), "response received");
                if !response.checksum_ok() {
                    warn!(raw = %response.hex(), "response checksum mismatch");
                }
                return Ok(response);
            }

            if read > 0 {
                trace!(attempt, read, first = buf[0], "discarding bytes without start marker");
            }

            if !self.config.retry_interval.is_zero() {
                std::thread::sleep(self.config.retry_interval);
            }
        }

        Err(FrameError::Timeout {
            attempts: self.config.max_attempts,
        })
    }

    fn read_attempt(&mut self, buf: &mut [u8]) -> Result<usize> {
        loop {
            match self.inner.read(buf) {
                Ok(n) => return Ok(n),
                Err(err) if err.kind() == ErrorKind::Interrupted => continue,
                Err(err)
                    if err.kind() == ErrorKind::TimedOut || err.kind() == ErrorKind::WouldBlock =>
                {
                    return Ok(0)
                }
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

    /// Consume the reader and return the inner stream.
    pub fn into_inner(self) -> T {
        self.inner
    }

    /// Current reader configuration.
    pub fn config(&self) -> &FrameConfig {
        &self.config
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;

    use super::*;
    use crate::codec::Reply;
    use crate::command::CONFIRM;

    /// Serves one scripted result per `read` call, then empty reads.
    struct ScriptedLine {
        script: VecDeque<std::io::Result<Vec<u8>>>,
        reads: usize,
    }

    impl ScriptedLine {
        fn new(script: Vec<std::io::Result<Vec<u8>>>) -> Self {
            Self {
                script: script.into(),
                reads: 0,
            }
        }
    }

    impl Read for ScriptedLine {
        fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
            self.reads += 1;
            match self.script.pop_front() {
                Some(Ok(bytes)) => {
                    let n = bytes.len().min(buf.len());
                    buf[..n].copy_from_slice(&bytes[..n]);
                    Ok(n)
                }
                Some(Err(err)) => Err(err),
                None => Ok(0),
            }
        }
    }

    fn fast_config(max_attempts: u32) -> FrameConfig {
        FrameConfig {
            max_attempts,
            retry_interval: Duration::ZERO,
        }
    }

    #[test]
    fn default_config() {
        let config = FrameConfig::default();
        assert_eq!(config.max_attempts, 10);
        assert_eq!(config.retry_interval, Duration::from_millis(100));
    }

    #[test]
    fn returns_first_valid_frame() {
        let line = ScriptedLine::new(vec![Ok(vec![0xAA, 0x05, 0x4B, 0x00, 0x01, 0x00, 0x00])]);
        let mut reader = ResponseReader::with_config(line, fast_config(10));

        let response = reader.read_response().unwrap();
        assert_eq!(response.command(), CONFIRM);
        assert!(matches!(response.reply(), Reply::Confirm(mask) if mask.bits() == 0x0001));
        assert_eq!(reader.get_ref().reads, 1);
    }

    #[test]
    fn skips_attempts_without_start_marker() {
        let line = ScriptedLine::new(vec![
            Ok(vec![]),
            Ok(vec![0x00, 0x4B, 0x01]),
            Ok(vec![0xAA, 0x05, 0x4D, 0x00, 0x01, 0x0A, 0x00]),
        ]);
        let mut reader = ResponseReader::with_config(line, fast_config(10));

        let response = reader.read_response().unwrap();
        assert_eq!(response.as_bytes()[5], 0x0A);
        assert_eq!(reader.get_ref().reads, 3);
    }

    #[test]
    fn times_out_after_max_attempts() {
        let line = ScriptedLine::new(Vec::new());
        let mut reader = ResponseReader::with_config(line, fast_config(10));

        let err = reader.read_response().unwrap_err();
        assert!(matches!(err, FrameError::Timeout { attempts: 10 }));
        assert_eq!(reader.get_ref().reads, 10);
    }

    #[test]
    fn short_read_is_zero_filled() {
        let line = ScriptedLine::new(vec![Ok(vec![0xAA, 0x05, 0x4B])]);
        let mut reader = ResponseReader::with_config(line, fast_config(10));

        let response = reader.read_response().unwrap();
        assert_eq!(response.as_bytes(), &[0xAA, 0x05, 0x4B, 0, 0, 0, 0]);
        assert_eq!(response.received(), 3);
    }

    #[test]
    fn partial_frames_are_not_stitched() {
        let line = ScriptedLine::new(vec![
            Ok(vec![0x05, 0x4B, 0x00]),
            Ok(vec![0x01, 0x00, 0x00]),
        ]);
        let mut reader = ResponseReader::with_config(line, fast_config(3));

        let err = reader.read_response().unwrap_err();
        assert!(matches!(err, FrameError::Timeout { attempts: 3 }));
    }

    #[test]
    fn would_block_counts_as_empty_attempt() {
        let line = ScriptedLine::new(vec![
            Err(std::io::Error::from(ErrorKind::WouldBlock)),
            Err(std::io::Error::from(ErrorKind::TimedOut)),
            Ok(vec![0xAA, 0x05, 0x4B, 0x00, 0x00, 0x00, 0x00]),
        ]);
        let mut reader = ResponseReader::with_config(line, fast_config(3));

        assert!(reader.read_response().is_ok());
    }

    #[test]
    fn interrupted_read_retries_within_attempt() {
        let line = ScriptedLine::new(vec![
            Err(std::io::Error::from(ErrorKind::Interrupted)),
            Ok(vec![0xAA, 0x05, 0x4B, 0x00, 0x00, 0x00, 0x00]),
        ]);
        let mut reader = ResponseReader::with_config(line, fast_config(1));

        assert!(reader.read_response().is_ok());
    }

    #[test]
    fn hard_io_error_propagates() {
        let line = ScriptedLine::new(vec![Err(std::io::Error::from(ErrorKind::BrokenPipe))]);
        let mut reader = ResponseReader::with_config(line, fast_config(10));

        let err = reader.read_response().unwrap_err();
        assert!(matches!(err, FrameError::Io(e) if e.kind() == ErrorKind::BrokenPipe));
    }

    #[test]
    fn sleeps_between_empty_attempts() {
        let line = ScriptedLine::new(Vec::new());
        let config = FrameConfig {
            max_attempts: 3,
            retry_interval: Duration::from_millis(5),
        };
        let mut reader = ResponseReader::with_config(line, config);

        let start = std::time::Instant::now();
        assert!(reader.read_response().is_err());
        assert!(start.elapsed() >= Duration::from_millis(15));
    }

    #[test]
    fn accessors_and_into_inner() {
        let mut reader = ResponseReader::new(ScriptedLine::new(Vec::new()));
        assert_eq!(reader.config().max_attempts, DEFAULT_MAX_ATTEMPTS);
        let _ = reader.get_mut();
        let _inner = reader.into_inner();
    }
}
