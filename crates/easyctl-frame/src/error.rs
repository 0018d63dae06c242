/// Errors that can occur while building, writing or reading frames.
#[derive(Debug, thiserror::Error)]
pub enum FrameError {
    /// No response starting with the start marker arrived in time.
    #[error("timeout while waiting for response ({attempts} attempts)")]
    Timeout { attempts: u32 },

    /// An I/O error occurred while reading or writing frames.
    #[error("frame I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The line accepted zero bytes of an outbound frame.
    #[error("connection closed (incomplete frame written)")]
    ConnectionClosed,

    /// Channel number outside 1..=16.
    #[error("invalid channel {0} (expected 1-16)")]
    InvalidChannel(u8),

    /// Action keyword not in the closed command set.
    #[error("Invalid command: {0}. Use up, down, stop, tilt, or intermediate.")]
    UnknownAction(String),
}

pub type Result<T> = std::result::Result<T, FrameError>;
