//! Switchblade CLI - one-command context switching between project workspaces

use std::process::ExitCode;

use clap::Parser;
use switchblade_cli::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    match cli.run().await {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
