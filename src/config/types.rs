use serde::Deserialize;

#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmSettings,
    pub models: ModelSettings,
}

#[derive(Debug, Clone)]
pub struct LlmSettings {
    pub api_token: String,
    pub endpoint: String,
    pub timeout_secs: u64,
    pub user_agent: String,
}

#[derive(Debug, Clone)]
pub struct ModelSettings {
    pub planner: String,
    pub max_tokens: u32,
}

// File configuration shape: every field optional, defaults fill the rest.
#[derive(Debug, Deserialize)]
pub(super) struct FileConfig {
    #[serde(default)]
    pub llm: FileLlmSettings,
    #[serde(default)]
    pub models: FileModelSettings,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileLlmSettings {
    pub api_token: Option<String>,
    pub endpoint: Option<String>,
    pub timeout_secs: Option<u64>,
    pub user_agent: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub(super) struct FileModelSettings {
    pub planner: Option<String>,
    pub max_tokens: Option<u32>,
}
