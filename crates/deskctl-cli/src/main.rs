//! CLI entry point - the composition root.

use std::process::ExitCode;

use clap::Parser;
use deskctl_core::InitiatingCommand;

use deskctl_cli::error::exit_code_for;
use deskctl_cli::{Cli, Commands, handlers, logging};

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables (installation overrides, RUST_LOG)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    logging::init(cli.verbose);

    match run(cli.command).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::from(u8::try_from(exit_code_for(&e)).unwrap_or(1))
        }
    }
}

async fn run(command: Commands) -> anyhow::Result<()> {
    match command {
        Commands::Shutdown(args) => {
            handlers::shutdown::execute(InitiatingCommand::Shutdown, args).await
        }
        Commands::FactoryReset(args) => {
            handlers::shutdown::execute(InitiatingCommand::FactoryReset, args).await
        }
        Commands::Paths => handlers::paths::execute(),
    }
}
