use anyhow::{Result, anyhow};

use super::types::Config;

pub fn validate(config: &Config) -> Result<()> {
    if config.llm.api_token.trim().is_empty() {
        return Err(anyhow!(
            "API token is not set. Set AUTOPLAN_API_TOKEN or add llm.api_token to {}",
            Config::config_path()?.display()
        ));
    }

    if config.llm.endpoint.trim().is_empty() {
        return Err(anyhow!(
            "Endpoint is not set. Set AUTOPLAN_ENDPOINT or add llm.endpoint to {}",
            Config::config_path()?.display()
        ));
    }

    if config.models.planner.trim().is_empty() {
        return Err(anyhow!(
            "Planner model is not set. Set AUTOPLAN_MODEL or add models.planner to {}",
            Config::config_path()?.display()
        ));
    }

    Ok(())
}
