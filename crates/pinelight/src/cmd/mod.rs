use clap::{Args, Subcommand};

use crate::exit::CliResult;
use crate::output::OutputFormat;

pub mod fill;
pub mod info;
pub mod strip;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Connect and print device geometry.
    Info(InfoArgs),
    /// Fill the whole canvas with one color.
    Fill(FillArgs),
    /// Set every strip LED to one color.
    Strip(StripArgs),
}

pub async fn run(command: Command, format: OutputFormat) -> CliResult<i32> {
    match command {
        Command::Info(args) => info::run(args, format).await,
        Command::Fill(args) => fill::run(args).await,
        Command::Strip(args) => strip::run(args).await,
    }
}

/// Connection arguments shared by every subcommand.
#[derive(Args, Debug)]
pub struct ConnectArgs {
    /// Server host to connect to (host or host:port).
    pub addr: String,

    /// Authentication token.
    #[arg(long, env = "PINELIGHT_TOKEN", hide_env_values = true)]
    pub token: String,
}

#[derive(Args, Debug)]
pub struct InfoArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,
}

#[derive(Args, Debug)]
pub struct FillArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// Fill color as RRGGBB or RRGGBBAA hex.
    pub color: String,
}

#[derive(Args, Debug)]
pub struct StripArgs {
    #[command(flatten)]
    pub connect: ConnectArgs,

    /// LED color as RRGGBB hex.
    pub color: String,
}
