use std::fmt::Write as _;

use bytes::{BufMut, Bytes, BytesMut};

use crate::channel::{Channel, ChannelMask};
use crate::checksum::{checksum, verify};
use crate::command::{ACK, CHECK, CONFIRM, INFO, SEND, START_MARKER};
use crate::status::DeviceStatus;

/// Size of a response frame. Responses are always read into a buffer of
/// this size.
pub const RESPONSE_SIZE: usize = 7;

/// Marker + length + command code + checksum.
const OVERHEAD: usize = 4;

/// An encoded outbound frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Frame {
    /// Command code at offset 2.
    pub command: u8,
    /// Full wire bytes, start marker through checksum.
    pub bytes: Bytes,
}

impl Frame {
    /// The total wire size of this frame.
    pub fn wire_size(&self) -> usize {
        self.bytes.len()
    }

    /// Bytes between the command code and the checksum.
    pub fn payload(&self) -> &[u8] {
        &self.bytes[3..self.bytes.len() - 1]
    }

    /// The trailing checksum byte.
    pub fn checksum(&self) -> u8 {
        self.bytes[self.bytes.len() - 1]
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

/// Encode a frame into the wire format.
///
/// Wire format:
/// ```text
/// ┌────────┬────────┬─────────┬───────────┬──────────┐
/// │ Start  │ Length │ Command │ Payload   │ Checksum │
/// │ 0xAA   │ (1B)   │ (1B)    │ (N bytes) │ (1B)     │
/// └────────┴────────┴─────────┴───────────┴──────────┘
/// ```
/// `Length` counts the command code, the payload and the checksum.
pub fn encode_frame(command: u8, payload: &[u8], dst: &mut BytesMut) {
    let start = dst.len();
    dst.reserve(OVERHEAD + payload.len());
    dst.put_u8(START_MARKER);
    dst.put_u8((payload.len() + 2) as u8);
    dst.put_u8(command);
    dst.put_slice(payload);
    let cs = checksum(&dst[start..]);
    dst.put_u8(cs);
}

fn build(command: u8, payload: &[u8]) -> Frame {
    let mut dst = BytesMut::with_capacity(OVERHEAD + payload.len());
    encode_frame(command, payload, &mut dst);
    Frame {
        command,
        bytes: dst.freeze(),
    }
}

/// Easy_Check: `[AA 02 4A cs]`.
pub fn build_check() -> Frame {
    build(CHECK, &[])
}

/// Easy_Send: `[AA 05 4C high low key cs]`.
pub fn build_send(channel: Channel, key_code: u8) -> Frame {
    let [high, low] = channel.mask_bytes();
    build(SEND, &[high, low, key_code])
}

/// Easy_Info: `[AA 04 4E high low cs]`.
pub fn build_info(channel: Channel) -> Frame {
    let [high, low] = channel.mask_bytes();
    build(INFO, &[high, low])
}

/// A response buffer as read from the line.
///
/// Always [`RESPONSE_SIZE`] bytes; bytes the receiver did not send stay zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Response {
    bytes: [u8; RESPONSE_SIZE],
    received: usize,
}

/// A response classified by its command code.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reply {
    /// Easy_Confirm with the learned-channel mask.
    Confirm(ChannelMask),
    /// Easy_Ack with the actuator status.
    Ack(DeviceStatus),
    /// Any other command code.
    Other(u8),
}

impl Response {
    /// Wrap a buffer of which the first `received` bytes came off the line.
    pub fn new(bytes: [u8; RESPONSE_SIZE], received: usize) -> Self {
        Self {
            bytes,
            received: received.min(RESPONSE_SIZE),
        }
    }

    pub fn as_bytes(&self) -> &[u8; RESPONSE_SIZE] {
        &self.bytes
    }

    /// Number of bytes actually read for this response.
    pub fn received(&self) -> usize {
        self.received
    }

    /// Command code at offset 2.
    pub fn command(&self) -> u8 {
        self.bytes[2]
    }

    pub fn reply(&self) -> Reply {
        match self.command() {
            CONFIRM => Reply::Confirm(extract_channel_mask(self)),
            ACK => Reply::Ack(DeviceStatus::from_byte(extract_ack_status(self))),
            other => Reply::Other(other),
        }
    }

    /// Checks the checksum over the bytes covered by the length field.
    ///
    /// Returns false when the length field points past the buffer.
    pub fn checksum_ok(&self) -> bool {
        let total = usize::from(self.bytes[1]) + 2;
        total <= RESPONSE_SIZE && verify(&self.bytes[..total])
    }

    /// Space-separated uppercase hex, e.g. `AA 05 4B 00 01 00 00`.
    pub fn hex(&self) -> String {
        let mut out = String::with_capacity(RESPONSE_SIZE * 3);
        for (i, byte) in self.bytes.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let _ = write!(out, "{byte:02X}");
        }
        out
    }
}

/// Learned-channel mask of an Easy_Confirm response: `(r[3] << 8) | r[4]`.
///
/// The caller is responsible for checking the command code.
pub fn extract_channel_mask(response: &Response) -> ChannelMask {
    let bytes = response.as_bytes();
    ChannelMask::from_bits(u16::from_be_bytes([bytes[3], bytes[4]]))
}

/// Status byte of an Easy_Ack response: `r[5]`.
///
/// The caller is responsible for checking the command code.
pub fn extract_ack_status(response: &Response) -> u8 {
    response.as_bytes()[5]
}
