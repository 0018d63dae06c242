//! Framing for the Easy shutter-control protocol.
//!
//! Every message on the wire has the shape:
//! - start marker `0xAA`
//! - length byte (command code + payload + checksum)
//! - command code
//! - payload
//! - checksum, chosen so that all bytes of the frame sum to 0 mod 256
//!
//! Outbound frames are built by [`build_check`], [`build_send`] and
//! [`build_info`]. Responses are fixed 7-byte buffers polled from the line by
//! [`ResponseReader`] and classified with [`Response::reply`].

pub mod action;
pub mod channel;
pub mod checksum;
pub mod codec;
pub mod command;
pub mod error;
pub mod reader;
pub mod status;
pub mod writer;

pub use action::Action;
pub use channel::{Channel, ChannelMask, CHANNEL_COUNT};
pub use checksum::{checksum, verify};
pub use codec::{
    build_check, build_info, build_send, encode_frame, extract_ack_status, extract_channel_mask,
    Frame, Reply, Response, RESPONSE_SIZE,
};
pub use command::{command_name, ACK, CHECK, CONFIRM, INFO, SEND, START_MARKER};
pub use error::{FrameError, Result};
pub use reader::{FrameConfig, ResponseReader, DEFAULT_MAX_ATTEMPTS, DEFAULT_RETRY_INTERVAL};
pub use status::{interpret_status, DeviceStatus};
pub use writer::FrameWriter;
