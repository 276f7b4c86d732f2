//! Agenda CLI entry point.

use clap::Parser;
use std::process::ExitCode;

use agenda::cli::Cli;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    agenda::cli::commands::generate::execute(cli).await
}
