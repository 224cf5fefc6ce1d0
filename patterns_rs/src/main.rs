use anyhow::Result;
use clap::Parser;

use rails_patterns::cli::{self, Cli};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr, stdout carries the command output
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| cli.log_level.parse().unwrap_or_default()),
        )
        .init();

    cli::run(cli)
}
