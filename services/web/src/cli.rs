use crate::check::{run_check, CheckArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use voter_status::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Voter Status",
    about = "Check age and voting obligation for the next election, over HTTP or from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service hosting the form (default command)
    Serve(ServeArgs),
    /// Run a single submission and print what the form would show
    Check(CheckArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Check(args) => run_check(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["voter-status"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn check_accepts_raw_inputs() {
        let cli = Cli::try_parse_from([
            "voter-status",
            "check",
            "--name",
            "Ana",
            "--birth-date",
            "2000-10-01",
            "--today",
            "2026-10-19",
        ])
        .expect("parses");

        match cli.command {
            Some(Command::Check(args)) => {
                assert_eq!(args.name, "Ana");
                assert_eq!(args.birth_date, "2000-10-01");
                assert!(args.today.is_some());
                assert!(!args.json);
            }
            other => panic!("expected check command, got {other:?}"),
        }
    }
}
