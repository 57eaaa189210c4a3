mod backend;
mod catalog;
mod cli;
mod cli_cmds;
mod config;
mod error;
mod metadata;
mod pywal;
mod scanner;
mod selector;
mod vote;

use anyhow::Result;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    cli::run()
}
