use std::fmt;

use easyctl_exchange::ExchangeError;
use easyctl_frame::FrameError;
use easyctl_transport::TransportError;

// Every failure class (configuration, usage, unknown command, protocol
// timeout) exits with the same code.
pub const SUCCESS: i32 = 0;
pub const FAILURE: i32 = 1;

pub type CliResult<T> = Result<T, CliError>;

#[derive(Debug)]
pub struct CliError {
    pub code: i32,
    pub message: String,
}

impl CliError {
    pub fn new(code: i32, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
        }
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

pub fn transport_error(context: &str, err: TransportError) -> CliError {
    CliError::new(FAILURE, format!("{context}: {err}"))
}

pub fn frame_error(context: &str, err: FrameError) -> CliError {
    match err {
        FrameError::Timeout { .. } => {
            CliError::new(FAILURE, "Timeout while waiting for response.")
        }
        FrameError::UnknownAction(_) | FrameError::InvalidChannel(_) => {
            CliError::new(FAILURE, err.to_string())
        }
        other => CliError::new(FAILURE, format!("{context}: {other}")),
    }
}

pub fn exchange_error(context: &str, err: ExchangeError) -> CliError {
    match err {
        ExchangeError::Transport(err) => transport_error(context, err),
        ExchangeError::Frame(err) => frame_error(context, err),
        other => CliError::new(FAILURE, format!("{context}: {other}")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timeout_message_matches_receiver_tooling() {
        let err = exchange_error(
            "check failed",
            ExchangeError::Frame(FrameError::Timeout { attempts: 10 }),
        );
        assert_eq!(err.code, FAILURE);
        assert_eq!(err.message, "Timeout while waiting for response.");
    }

    #[test]
    fn unknown_action_message_is_not_prefixed() {
        let err = frame_error("send failed", FrameError::UnknownAction("left".into()));
        assert_eq!(
            err.to_string(),
            "Invalid command: left. Use up, down, stop, tilt, or intermediate."
        );
    }

    #[test]
    fn io_errors_keep_context() {
        let err = exchange_error(
            "send failed",
            ExchangeError::Frame(FrameError::Io(std::io::Error::other("line dropped"))),
        );
        assert_eq!(err.code, FAILURE);
        assert!(err.message.starts_with("send failed: "));
        assert!(err.message.contains("line dropped"));
    }
}
