use super::constants::{DEFAULT_MAX_TOKENS, DEFAULT_TIMEOUT_SECS};
use super::types::{LlmSettings, ModelSettings};

pub fn default_user_agent() -> String {
    format!("autoplan/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for LlmSettings {
    fn default() -> Self {
        Self {
            api_token: String::new(),
            endpoint: String::new(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: default_user_agent(),
        }
    }
}

impl Default for ModelSettings {
    fn default() -> Self {
        Self {
            planner: String::new(),
            max_tokens: DEFAULT_MAX_TOKENS,
        }
    }
}
