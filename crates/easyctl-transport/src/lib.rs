//! Serial duplex channel for the Easy protocol.
//!
//! Opens the receiver's serial device in raw mode (38400 baud, 8N1, no flow
//! control, short read timeout) and exposes it as a plain
//! `std::io::Read + std::io::Write` byte stream.
//!
//! This is the lowest layer of easyctl. The framing and exchange layers only
//! see the [`SerialLink`] through the standard I/O traits, so any in-memory
//! stream can stand in for it.

pub mod error;
pub mod link;

pub use error::{Result, TransportError};
pub use link::{LinkConfig, SerialLink, DEFAULT_BAUD_RATE, DEFAULT_DEVICE, DEFAULT_READ_TIMEOUT};
