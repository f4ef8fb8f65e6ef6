mod cli;
mod client;
mod config;
mod envelope;
mod planner;

use anyhow::Result;
use clap::Parser;

use crate::config::Config;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = cli::Cli::parse();
    let config = Config::load()?;
    cli.run(config).await
}
