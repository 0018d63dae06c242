use easyctl_frame::Channel;

/// Errors that can occur in an exchange with the receiver.
#[derive(Debug, thiserror::Error)]
pub enum ExchangeError {
    /// Transport-level error.
    #[error("transport error: {0}")]
    Transport(#[from] easyctl_transport::TransportError),

    /// Frame-level error, including response timeouts.
    #[error("frame error: {0}")]
    Frame(#[from] easyctl_frame::FrameError),

    /// The receiver answered with an unexpected command code.
    #[error("invalid response received to {request}: expected 0x{expected:02X}, got 0x{received:02X}")]
    InvalidResponse {
        request: &'static str,
        expected: u8,
        received: u8,
    },

    /// The target channel is not learned on the receiver.
    #[error("channel {0} is not learned")]
    ChannelNotLearned(Channel),

    /// The receiver kept answering Easy_Info with Easy_Confirm.
    #[error("no status after {rounds} info rounds (receiver kept confirming)")]
    ConfirmLoop { rounds: u32 },
}

impl ExchangeError {
    /// Returns true if the response wait timed out.
    pub fn is_timeout(&self) -> bool {
        matches!(
            self,
            ExchangeError::Frame(easyctl_frame::FrameError::Timeout { .. })
        )
    }
}

pub type Result<T> = std::result::Result<T, ExchangeError>;
