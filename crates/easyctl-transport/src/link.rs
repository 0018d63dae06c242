use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};
use std::time::Duration;

use serialport::{DataBits, FlowControl, Parity, SerialPort, StopBits};
use tracing::{debug, info};

use crate::error::{Result, TransportError};

/// Line speed the receiver is fixed to.
pub const DEFAULT_BAUD_RATE: u32 = 38_400;

/// Per-read timeout. A read with no pending data returns after this long.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(100);

/// Serial device used when none is given.
#[cfg(windows)]
pub const DEFAULT_DEVICE: &str = "COM1";
#[cfg(not(windows))]
pub const DEFAULT_DEVICE: &str = "/dev/ttyUSB0";

/// Line settings for the serial link.
///
/// Data bits, parity, stop bits and flow control are fixed by the protocol
/// (8N1, no flow control) and are not configurable.
#[derive(Debug, Clone)]
pub struct LinkConfig {
    /// Baud rate. Default: 38400.
    pub baud_rate: u32,
    /// Timeout for a single read. Default: 100 ms.
    pub read_timeout: Duration,
}

impl Default for LinkConfig {
    fn default() -> Self {
        Self {
            baud_rate: DEFAULT_BAUD_RATE,
            read_timeout: DEFAULT_READ_TIMEOUT,
        }
    }
}

/// An open serial connection to the receiver.
///
/// Reads follow a poll contract: when nothing arrives within the configured
/// read timeout, `read` returns `Ok(0)` instead of a `TimedOut` error.
pub struct SerialLink {
    port: Box<dyn SerialPort>,
    path: PathBuf,
}

impl SerialLink {
    /// Open `path` with the default line settings.
    pub fn open(path: impl AsRef<Path>) -> Result<Self> {
        Self::open_with_config(path, &LinkConfig::default())
    }

    /// Open `path` with explicit line settings.
    pub fn open_with_config(path: impl AsRef<Path>, config: &LinkConfig) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        let port = serialport::new(path.to_string_lossy(), config.baud_rate)
            .data_bits(DataBits::Eight)
            .parity(Parity::None)
            .stop_bits(StopBits::One)
            .flow_control(FlowControl::None)
            .timeout(config.read_timeout)
            .open()
            .map_err(|source| match source.kind() {
                serialport::ErrorKind::InvalidInput => TransportError::Configure {
                    path: path.clone(),
                    source,
                },
                _ => TransportError::Open {
                    path: path.clone(),
                    source,
                },
            })?;

        info!(?path, baud_rate = config.baud_rate, "opened serial link");

        Ok(Self { port, path })
    }

    /// Clone the link into a second handle on the same device.
    ///
    /// Used to split the link into a reader half and a writer half.
    pub fn try_clone(&self) -> Result<Self> {
        let port = self
            .port
            .try_clone()
            .map_err(|err| TransportError::Io(err.into()))?;
        debug!(path = ?self.path, "cloned serial link");
        Ok(Self {
            port,
            path: self.path.clone(),
        })
    }

    /// The device path this link was opened on.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Read for SerialLink {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        absorb_timeout(self.port.read(buf))
    }
}

impl Write for SerialLink {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        self.port.write(buf)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.port.flush()
    }
}

impl std::fmt::Debug for SerialLink {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SerialLink")
            .field("type", &"serial")
            .field("path", &self.path)
            .finish()
    }
}

/// A read timeout on an idle line means "no data yet", not failure.
fn absorb_timeout(result: std::io::Result<usize>) -> std::io::Result<usize> {
    match result {
        Err(err) if err.kind() == ErrorKind::TimedOut => Ok(0),
        other => other,
    }
}
