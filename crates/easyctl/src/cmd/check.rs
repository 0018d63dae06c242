use crate::cmd::{CheckArgs, Session};
use crate::exit::{exchange_error, CliResult, SUCCESS};
use crate::output::render_channels;

pub fn run(_args: CheckArgs, session: &Session) -> CliResult<i32> {
    let mut client = session.connect()?;
    let mask = client
        .check()
        .map_err(|err| exchange_error("check failed", err))?;

    println!("{}", render_channels(mask, session.format));
    Ok(SUCCESS)
}
