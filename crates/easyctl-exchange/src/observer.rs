//! Hooks for watching frames cross the wire.
//!
//! Observers run synchronously inside the exchange, right after a frame is
//! written or a response is accepted. They are meant for diagnostics such as
//! verbose console output and must not block.

use easyctl_frame::{Frame, Response};

pub trait WireObserver {
    /// Called after a frame was fully written and flushed.
    fn on_frame_sent(&mut self, frame: &Frame) {
        let _ = frame;
    }

    /// Called when a response with a valid start marker was read.
    fn on_response(&mut self, response: &Response) {
        let _ = response;
    }
}
