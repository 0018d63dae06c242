use std::path::PathBuf;

/// Errors that can occur while opening or driving the serial link.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    /// Failed to open the serial device.
    #[error("failed to open serial device {path}: {source}")]
    Open {
        path: PathBuf,
        source: serialport::Error,
    },

    /// The device opened but rejected the requested line settings.
    #[error("failed to configure serial device {path}: {source}")]
    Configure {
        path: PathBuf,
        source: serialport::Error,
    },

    /// An I/O error occurred on the serial stream.
    #[error("serial I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TransportError>;
