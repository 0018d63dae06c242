use easyctl_exchange::ExchangeError;

use crate::cmd::{channel_arg, InfoArgs, Session};
use crate::exit::{exchange_error, CliResult, SUCCESS};
use crate::output::render_status;

pub fn run(args: InfoArgs, session: &Session) -> CliResult<i32> {
    let channel = channel_arg(args.channel)?;
    let mut client = session.connect()?;

    match client.info(channel) {
        Ok(status) => {
            println!(
                "{}",
                render_status(channel, status, session.verbose, session.format)
            );
            Ok(SUCCESS)
        }
        // Reported but not fatal: the receiver answered, just not usefully.
        Err(ExchangeError::ChannelNotLearned(channel)) => {
            eprintln!("Channel {channel} is not learned.");
            Ok(SUCCESS)
        }
        Err(err @ ExchangeError::InvalidResponse { .. }) => {
            eprintln!("warning: {err}");
            Ok(SUCCESS)
        }
        Err(err) => Err(exchange_error("info failed", err)),
    }
}
