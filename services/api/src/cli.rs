use crate::demo::{
    run_batch, run_check, run_convert, run_demo, BatchArgs, CheckArgs, ConvertArgs, DemoArgs,
};
use crate::server;
use clap::{Args, Parser, Subcommand};
use subsidy_desk::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Subsidy Desk",
    about = "Check rent-subsidy eligibility and convert USD to CLP from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Evaluate rent-subsidy eligibility
    Eligibility {
        #[command(subcommand)]
        command: EligibilityCommand,
    },
    /// Convert a dollar amount to Chilean pesos
    Convert(ConvertArgs),
    /// Run the reference scenarios for both utilities
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum EligibilityCommand {
    /// Evaluate a single applicant and print the checklist
    Check(CheckArgs),
    /// Evaluate every applicant in a CSV export
    Batch(BatchArgs),
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
        Command::Eligibility {
            command: EligibilityCommand::Check(args),
        } => run_check(args),
        Command::Eligibility {
            command: EligibilityCommand::Batch(args),
        } => run_batch(args),
        Command::Convert(args) => run_convert(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_eligibility_check_with_raw_values() {
        let cli = Cli::try_parse_from([
            "subsidy-desk",
            "eligibility",
            "check",
            "--age",
            "abc",
            "--identity",
            "si",
        ])
        .expect("arguments parse");

        match cli.command {
            Some(Command::Eligibility {
                command: EligibilityCommand::Check(args),
            }) => {
                assert_eq!(args.age.as_deref(), Some("abc"));
                assert_eq!(args.identity.as_deref(), Some("si"));
                assert!(args.savings.is_none());
            }
            other => panic!("expected eligibility check, got {other:?}"),
        }
    }

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["subsidy-desk"]).expect("arguments parse");
        assert!(cli.command.is_none());
    }
}
