use anyhow::{Context, Result};
use colored::Colorize;
use std::io;

use crate::client::ChatClient;
use crate::config::Config;
use crate::envelope::ResultEnvelope;
use crate::planner::{self, Plan};

use super::util::mask_api_token;

/// Run the full pipeline for one task and write exactly one result
/// envelope to stdout. All progress and error reporting goes to stderr;
/// stdout carries nothing but the envelope line.
pub(crate) async fn handle_task(task: &str, verbose: bool, config: &Config) -> Result<()> {
    eprintln!("Planning task: {task}");
    if verbose {
        eprintln!("Endpoint: {}", config.llm.endpoint);
        eprintln!("Planner model: {}", config.models.planner);
        eprintln!("API token: {}", mask_api_token(&config.llm.api_token));
        eprintln!("Timeout: {}s", config.llm.timeout_secs);
    }

    match generate_plan(task, config).await {
        Ok(plan) => {
            eprintln!(
                "{} {} commands, {} files",
                "Plan ready:".green(),
                plan.commands.len(),
                plan.files.len()
            );
            ResultEnvelope::success(plan)
                .write(io::stdout().lock())
                .context("Failed to write result envelope")?;
            Ok(())
        }
        Err(err) => {
            eprintln!("{} {err:#}", "Planning failed:".red().bold());
            ResultEnvelope::failure(format!("{err:#}"))
                .write(io::stdout().lock())
                .context("Failed to write result envelope")?;
            Err(err)
        }
    }
}

async fn generate_plan(task: &str, config: &Config) -> Result<Plan> {
    let client = ChatClient::new(&config.llm)?;
    planner::request_plan(
        &client,
        task,
        &config.models.planner,
        config.models.max_tokens,
    )
    .await
}
