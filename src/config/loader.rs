use anyhow::{Context, Result, anyhow};
use dirs::home_dir;
use std::{
    env, fs,
    path::{Path, PathBuf},
};

use super::Config;
use super::builder::ConfigBuilder;
use super::constants::{HOME_CONFIG_DIR, HOME_CONFIG_FILE, LOCAL_CONFIG_FILE};
use super::environment::apply_env_overrides;
use super::types::FileConfig;
use super::validation::validate;

impl Config {
    pub fn config_path() -> Result<PathBuf> {
        let mut path = home_dir().context("Could not determine home directory")?;
        path.push(HOME_CONFIG_DIR);
        path.push(HOME_CONFIG_FILE);
        Ok(path)
    }

    pub fn local_config_path() -> Result<PathBuf> {
        let cwd = env::current_dir().context("Could not determine working directory")?;
        Ok(cwd.join(LOCAL_CONFIG_FILE))
    }

    /// Load configuration or fail. The config file is required: the home
    /// location is checked first, then the working directory.
    pub fn load() -> Result<Self> {
        let path = Self::discover_config_file()?;

        let mut builder = Self::apply_file(ConfigBuilder::new(), &path)?;
        builder = apply_env_overrides(builder)?;

        let config = builder.build()?;
        validate(&config)?;
        Ok(config)
    }

    fn discover_config_file() -> Result<PathBuf> {
        let home = Self::config_path()?;
        if home.exists() {
            return Ok(home);
        }

        let local = Self::local_config_path()?;
        if local.exists() {
            return Ok(local);
        }

        Err(anyhow!(
            "No configuration found at {} or {}",
            home.display(),
            local.display()
        ))
    }

    fn apply_file(builder: ConfigBuilder, path: &Path) -> Result<ConfigBuilder> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed reading config at {}", path.display()))?;

        if contents.trim().is_empty() {
            return Ok(builder);
        }

        let file: FileConfig = serde_json::from_str(&contents)
            .with_context(|| format!("Failed parsing JSON config at {}", path.display()))?;

        Ok(file.apply(builder))
    }
}

impl FileConfig {
    pub(super) fn apply(self, builder: ConfigBuilder) -> ConfigBuilder {
        builder
            .with_llm(|llm| {
                if let Some(api_token) = self.llm.api_token.clone() {
                    llm.api_token = api_token;
                }
                if let Some(endpoint) = self.llm.endpoint.clone() {
                    llm.endpoint = endpoint;
                }
                if let Some(timeout) = self.llm.timeout_secs {
                    llm.timeout_secs = timeout;
                }
                if let Some(user_agent) = self.llm.user_agent.clone() {
                    llm.user_agent = user_agent;
                }
            })
            .with_models(|models| {
                if let Some(planner) = self.models.planner.clone() {
                    models.planner = planner;
                }
                if let Some(max_tokens) = self.models.max_tokens {
                    models.max_tokens = max_tokens;
                }
            })
    }
}
