use easyctl_exchange::WireObserver;
use easyctl_frame::{Channel, Frame, Response, CHECK, INFO, SEND};

/// Echoes every frame and raw response to stdout for `--verbose`.
pub struct VerboseEcho;

impl WireObserver for VerboseEcho {
    fn on_frame_sent(&mut self, frame: &Frame) {
        if let Some(line) = describe_sent(frame) {
            println!("{line}");
        }
    }

    fn on_response(&mut self, response: &Response) {
        println!("Raw response: {}", response.hex());
    }
}

fn describe_sent(frame: &Frame) -> Option<String> {
    let payload = frame.payload();
    let channel = || {
        payload
            .get(..2)
            .and_then(|bytes| Channel::from_mask_bytes([bytes[0], bytes[1]]))
    };

    match frame.command {
        CHECK => Some("Easy_Check sent.".to_string()),
        SEND => {
            let key = payload.get(2)?;
            Some(format!(
                "Easy_Send sent on channel {} with command 0x{key:02X}.",
                channel()?
            ))
        }
        INFO => Some(format!("Easy_Info sent on channel {}.", channel()?)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use easyctl_frame::{build_check, build_info, build_send, Action};

    use super::*;

    #[test]
    fn describes_each_request() {
        let channel = Channel::new(10).unwrap();

        assert_eq!(
            describe_sent(&build_check()).as_deref(),
            Some("Easy_Check sent.")
        );
        assert_eq!(
            describe_sent(&build_send(channel, Action::Intermediate.key_code())).as_deref(),
            Some("Easy_Send sent on channel 10 with command 0x44.")
        );
        assert_eq!(
            describe_sent(&build_info(channel)).as_deref(),
            Some("Easy_Info sent on channel 10.")
        );
    }
}
