//! Protocol constants.
//!
//! Requests use the even command codes, the receiver answers with the odd
//! ones: `CONFIRM` answers `CHECK` (and sometimes `INFO`), `ACK` answers
//! `INFO`. `SEND` gets no answer.

/// First byte of every frame.
pub const START_MARKER: u8 = 0xAA;

/// Easy_Check: ask which channels are learned.
pub const CHECK: u8 = 0x4A;

/// Easy_Confirm: learned-channel bitmask.
pub const CONFIRM: u8 = 0x4B;

/// Easy_Send: drive an actuator.
pub const SEND: u8 = 0x4C;

/// Easy_Ack: actuator status.
pub const ACK: u8 = 0x4D;

/// Easy_Info: ask for an actuator's status.
pub const INFO: u8 = 0x4E;

/// Returns the protocol name of a command code.
pub fn command_name(code: u8) -> &'static str {
    match code {
        CHECK => "Easy_Check",
        CONFIRM => "Easy_Confirm",
        SEND => "Easy_Send",
        ACK => "Easy_Ack",
        INFO => "Easy_Info",
        _ => "unknown",
    }
}
