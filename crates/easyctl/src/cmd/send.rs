use easyctl_frame::Action;

use crate::cmd::{channel_arg, SendArgs, Session};
use crate::exit::{exchange_error, frame_error, CliResult, SUCCESS};
use crate::output::render_sent;

pub fn run(args: SendArgs, session: &Session) -> CliResult<i32> {
    // Validate the command before touching the device.
    let channel = channel_arg(args.channel)?;
    let action: Action = args
        .command
        .parse()
        .map_err(|err| frame_error("invalid command", err))?;

    let mut client = session.connect()?;
    client
        .send(channel, action)
        .map_err(|err| exchange_error("send failed", err))?;

    if let Some(line) = render_sent(channel, action, session.format) {
        println!("{line}");
    }
    Ok(SUCCESS)
}
