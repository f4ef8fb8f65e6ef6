use anyhow::Result;
use clap::Parser;

use crate::config::Config;

use super::task;

/// Entry point for the `autoplan` command-line interface.
#[derive(Debug, Parser)]
#[command(
    name = "autoplan",
    about = "Turns a natural-language task into a JSON automation plan",
    version,
    long_about = None
)]
pub struct Cli {
    /// Task description to plan for
    #[arg(long)]
    pub task: String,

    /// Enable verbose diagnostics on stderr
    #[arg(short = 'v', long = "verbose")]
    pub verbose: bool,
}

impl Cli {
    pub async fn run(self, config: Config) -> Result<()> {
        task::handle_task(&self.task, self.verbose, &config).await
    }
}
