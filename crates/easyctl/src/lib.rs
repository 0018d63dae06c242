//! Client for Easy protocol shutter and blind receivers.
//!
//! easyctl talks to a motor-control receiver over a serial line: it lists the
//! learned channels, drives actuators and reads their status.
//!
//! # Crate Structure
//!
//! - [`transport`]: Serial duplex channel
//! - [`frame`]: Checksum, frame builder, response reader and interpreter
//! - [`exchange`]: Check / Send / Info exchanges (behind `exchange` feature)

/// Re-export transport types.
pub mod transport {
    pub use easyctl_transport::*;
}

/// Re-export frame types.
pub mod frame {
    pub use easyctl_frame::*;
}

/// Re-export exchange types (requires `exchange` feature).
#[cfg(feature = "exchange")]
pub mod exchange {
    pub use easyctl_exchange::*;
}
