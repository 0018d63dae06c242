use std::fmt;
use std::io::{Read, Write};

use easyctl_frame::{
    build_check, build_info, build_send, command_name, Action, Channel, ChannelMask,
    DeviceStatus, Frame, FrameConfig, FrameWriter, Reply, Response, ResponseReader, ACK, CHECK,
    CONFIRM, DEFAULT_MAX_ATTEMPTS, INFO,
};
use tracing::{debug, warn};

use crate::error::{ExchangeError, Result};
use crate::observer::WireObserver;

/// Default cap on Easy_Info rounds answered with Easy_Confirm.
pub const DEFAULT_MAX_INFO_ROUNDS: u32 = DEFAULT_MAX_ATTEMPTS;

/// Configuration for an [`EasyClient`].
#[derive(Debug, Clone)]
pub struct ExchangeConfig {
    /// Response polling parameters.
    pub frame: FrameConfig,
    /// Maximum Easy_Info requests per `info` call. Default: 10.
    pub max_info_rounds: u32,
}

impl Default for ExchangeConfig {
    fn default() -> Self {
        Self {
            frame: FrameConfig::default(),
            max_info_rounds: DEFAULT_MAX_INFO_ROUNDS,
        }
    }
}

/// Client side of the Easy protocol.
///
/// Owns both halves of the duplex line. Exchanges are strictly sequential:
/// every request is written and its response awaited before the next one.
/// A failed exchange leaves no state behind.
pub struct EasyClient<R, W> {
    reader: ResponseReader<R>,
    writer: FrameWriter<W>,
    config: ExchangeConfig,
    observer: Option<Box<dyn WireObserver>>,
}

impl<R: Read, W: Write> EasyClient<R, W> {
    /// Build a client from the read and write halves of a line.
    pub fn from_parts(reader: R, writer: W, config: ExchangeConfig) -> Self {
        Self {
            reader: ResponseReader::with_config(reader, config.frame.clone()),
            writer: FrameWriter::new(writer),
            config,
            observer: None,
        }
    }

    /// Register an observer for frames sent and responses received.
    pub fn with_observer(mut self, observer: impl WireObserver + 'static) -> Self {
        self.observer = Some(Box::new(observer));
        self
    }

    /// Easy_Check: ask which channels are learned.
    pub fn check(&mut self) -> Result<ChannelMask> {
        self.write(&build_check())?;
        let response = self.read()?;

        match response.reply() {
            Reply::Confirm(mask) => {
                debug!(%mask, "learned channels");
                Ok(mask)
            }
            _ => Err(invalid_response(CHECK, CONFIRM, &response)),
        }
    }

    /// Easy_Send: drive the actuator on `channel`.
    ///
    /// Fire-and-forget: the receiver does not answer, so nothing is read and
    /// the channel is not checked for being learned.
    pub fn send(&mut self, channel: Channel, action: Action) -> Result<()> {
        self.write(&build_send(channel, action.key_code()))?;
        debug!(%channel, %action, key = action.key_code(), "command sent");
        Ok(())
    }

    /// Easy_Info: read the actuator status on `channel`.
    ///
    /// Runs a check first and fails with `ChannelNotLearned` without writing
    /// the info request if the channel is not learned. When the receiver
    /// answers the info request with a confirmation instead of an
    /// acknowledgement, the request is repeated while the channel stays
    /// learned, up to `max_info_rounds` requests.
    pub fn info(&mut self, channel: Channel) -> Result<DeviceStatus> {
        let mask = self.check()?;
        if !mask.is_learned(channel) {
            return Err(ExchangeError::ChannelNotLearned(channel));
        }

        let rounds = self.config.max_info_rounds;
        for round in 1..=rounds {
            self.write(&build_info(channel))?;
            let response = self.read()?;

            match response.reply() {
                Reply::Ack(status) => {
                    debug!(%channel, code = status.code(), %status, "status received");
                    return Ok(status);
                }
                Reply::Confirm(mask) if mask.is_learned(channel) => {
                    warn!(%channel, round, "info answered with confirm; re-issuing");
                }
                Reply::Confirm(_) => return Err(ExchangeError::ChannelNotLearned(channel)),
                Reply::Other(_) => return Err(invalid_response(INFO, ACK, &response)),
            }
        }

        Err(ExchangeError::ConfirmLoop { rounds })
    }

    /// Current client configuration.
    pub fn config(&self) -> &ExchangeConfig {
        &self.config
    }

    /// Consume the client and return the line halves.
    pub fn into_parts(self) -> (R, W) {
        (self.reader.into_inner(), self.writer.into_inner())
    }

    fn write(&mut self, frame: &Frame) -> Result<()> {
        self.writer.write_frame(frame)?;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_frame_sent(frame);
        }
        Ok(())
    }

    fn read(&mut self) -> Result<Response> {
        let response = self.reader.read_response()?;
        if let Some(observer) = self.observer.as_mut() {
            observer.on_response(&response);
        }
        Ok(response)
    }
}

impl<R, W> fmt::Debug for EasyClient<R, W> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EasyClient")
            .field("config", &self.config)
            .field("observer", &self.observer.is_some())
            .finish()
    }
}

fn invalid_response(request: u8, expected: u8, response: &Response) -> ExchangeError {
    ExchangeError::InvalidResponse {
        request: command_name(request),
        expected,
        received: response.command(),
    }
}
