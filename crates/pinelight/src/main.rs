mod cmd;
mod color;
mod exit;
mod logging;
mod output;

use clap::Parser;

use crate::cmd::Command;
use crate::logging::{init_logging, LogFormat};
use crate::output::OutputFormat;

#[derive(Parser, Debug)]
#[command(name = "pinelight", version, about = "LED canvas client CLI")]
struct Cli {
    /// Output format.
    #[arg(long, value_name = "FORMAT", global = true)]
    format: Option<OutputFormat>,

    /// Log output format (stderr).
    #[arg(long, value_name = "FORMAT", default_value = "text", global = true)]
    log_format: LogFormat,

    /// Enable debug logging (stderr).
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logging(cli.log_format, cli.verbose);

    let format = cli.format.unwrap_or_else(OutputFormat::default_for_stdout);
    let result = cmd::run(cli.command, format).await;

    match result {
        Ok(code) => std::process::exit(code),
        Err(err) => {
            eprintln!("error: {err}");
            std::process::exit(err.code);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_info_subcommand() {
        let cli = Cli::try_parse_from(["pinelight", "info", "localhost:9000", "--token", "abc"])
            .expect("info args should parse");

        let Command::Info(args) = cli.command else {
            panic!("expected info subcommand");
        };
        assert_eq!(args.connect.addr, "localhost:9000");
        assert_eq!(args.connect.token, "abc");
    }

    #[test]
    fn parses_fill_subcommand() {
        let cli = Cli::try_parse_from([
            "pinelight",
            "fill",
            "tree.local",
            "--token",
            "abc",
            "ff0000",
        ])
        .expect("fill args should parse");

        let Command::Fill(args) = cli.command else {
            panic!("expected fill subcommand");
        };
        assert_eq!(args.color, "ff0000");
    }

    #[test]
    fn strip_requires_a_color() {
        let err = Cli::try_parse_from(["pinelight", "strip", "tree.local", "--token", "abc"])
            .expect_err("missing color should fail");
        assert_eq!(
            err.kind(),
            clap::error::ErrorKind::MissingRequiredArgument
        );
    }
}
