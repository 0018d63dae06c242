mod cmd;
mod exit;
mod logging;
mod output;
mod verbose;

use std::path::PathBuf;

use clap::Parser;
use easyctl_transport::DEFAULT_DEVICE;

use crate::cmd::{Command, Session};
use crate::logging::{init_logging, LogFormat, LogLevel};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(
    name = "easyctl",
    version,
    about = "Control Easy protocol shutter and blind receivers"
)]
struct Cli {
    /// Serial device the receiver is attached to.
    #[arg(
        short = 'd',
        long,
        value_name = "PATH",
        env = "EASYCTL_DEVICE",
        default_value = DEFAULT_DEVICE,
        global = true
    )]
    device: PathBuf,

    /// Print frames as they are sent and raw responses as they arrive.
    #[arg(short = 'v', long, global = true)]
    verbose: bool,

    /// Output format.
    #[arg(long, value_name = "FORMAT", default_value = "pretty", global = true)]
    format: OutputFormat,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Minimum log level (stderr).
    #[arg(long, value_name = "LEVEL", default_value = "warn", global = true)]
    log_level: LogLevel,

    #[command(subcommand)]
    command: Command,
}

fn main() {
    // Usage errors exit with FAILURE rather than clap's default of 2.
    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(err) => {
            let code = if err.use_stderr() {
                exit::FAILURE
            } else {
                exit::SUCCESS
            };
            let _ = err.print();
            std::process::exit(code);
        }
    };
    init_logging(cli.log_format, cli.log_level);

    let session = Session {
        device: cli.device,
        verbose: cli.verbose,
        format: cli.format,
    };

    match cmd::run(cli.command, &session) {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}
