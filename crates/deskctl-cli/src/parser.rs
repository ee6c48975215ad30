//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Control the Deskbox desktop application from the command line.
#[derive(Parser)]
#[command(name = "deskctl")]
#[command(about = "Control the Deskbox desktop application")]
#[command(version)]
pub struct Cli {
    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_parser_builds() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_global_verbose_after_subcommand() {
        let cli = Cli::parse_from(["deskctl", "shutdown", "--verbose"]);
        assert!(cli.verbose);
    }

    #[test]
    fn test_subcommand_required() {
        assert!(Cli::try_parse_from(["deskctl"]).is_err());
    }
}
