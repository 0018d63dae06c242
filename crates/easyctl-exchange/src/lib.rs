//! Request/response exchanges with an Easy protocol receiver.
//!
//! [`EasyClient`] drives one exchange at a time over a half-duplex line:
//! - `check`: which channels are learned
//! - `send`: fire-and-forget actuator command
//! - `info`: actuator status, gated on the channel being learned

pub mod client;
pub mod connector;
pub mod error;
pub mod observer;

pub use client::{EasyClient, ExchangeConfig, DEFAULT_MAX_INFO_ROUNDS};
pub use connector::{connect, connect_with_config};
pub use error::{ExchangeError, Result};
pub use observer::WireObserver;
