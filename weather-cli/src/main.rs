//! Binary crate for the `weather` command-line tool.
//!
//! This crate focuses on:
//! - Parsing CLI arguments
//! - The interactive search session and its menus
//! - Human-friendly output formatting

use clap::Parser;

mod cli;
mod logging;
mod render;
mod repl;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cmd = cli::Cli::parse();
    logging::init_logging(&cmd.log_level);
    cmd.run().await
}
