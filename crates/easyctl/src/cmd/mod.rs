use std::path::PathBuf;

use clap::{Args, Subcommand};
use easyctl_exchange::{connect_with_config, EasyClient, ExchangeConfig};
use easyctl_frame::Channel;
use easyctl_transport::{LinkConfig, SerialLink};

use crate::exit::{exchange_error, CliError, CliResult, FAILURE};
use crate::output::OutputFormat;
use crate::verbose::VerboseEcho;

pub mod check;
pub mod info;
pub mod send;
pub mod version;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List which channels are learned on the receiver.
    Check(CheckArgs),
    /// Send an actuator command on a channel.
    Send(SendArgs),
    /// Query the actuator status on a learned channel.
    Info(InfoArgs),
    /// Show version information.
    Version(VersionArgs),
}

/// Options shared by every command that talks to the receiver.
#[derive(Debug)]
pub struct Session {
    pub device: PathBuf,
    pub verbose: bool,
    pub format: OutputFormat,
}

impl Session {
    /// Open the serial device and build an exchange client for it.
    pub fn connect(&self) -> CliResult<EasyClient<SerialLink, SerialLink>> {
        let client = connect_with_config(
            &self.device,
            &LinkConfig::default(),
            ExchangeConfig::default(),
        )
        .map_err(|err| exchange_error("failed to configure serial device", err))?;

        if self.verbose {
            Ok(client.with_observer(VerboseEcho))
        } else {
            Ok(client)
        }
    }
}

pub fn run(command: Command, session: &Session) -> CliResult<i32> {
    match command {
        Command::Check(args) => check::run(args, session),
        Command::Send(args) => send::run(args, session),
        Command::Info(args) => info::run(args, session),
        Command::Version(args) => version::run(args),
    }
}

#[derive(Args, Debug, Default)]
pub struct CheckArgs {}

#[derive(Args, Debug)]
pub struct SendArgs {
    /// Channel to drive (1-16).
    #[arg(value_parser = clap::value_parser!(u8).range(1..=16))]
    pub channel: u8,
    /// Command: up, down, stop, tilt or intermediate.
    pub command: String,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    /// Channel to query (1-16).
    #[arg(value_parser = clap::value_parser!(u8).range(1..=16))]
    pub channel: u8,
}

#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Show extended build provenance.
    #[arg(long)]
    pub extended: bool,
}

/// Convert a parsed channel number into a [`Channel`].
pub fn channel_arg(number: u8) -> CliResult<Channel> {
    Channel::new(number).map_err(|err| CliError::new(FAILURE, err.to_string()))
}
