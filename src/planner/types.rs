use serde::{Deserialize, Serialize};

/// Parsed automation plan: commands in execution order, files in
/// first-encountered order. The two sequences are never interleaved.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Plan {
    pub commands: Vec<String>,
    pub files: Vec<PlanFile>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlanFile {
    pub path: String,
    pub content: String,
}

impl PlanFile {
    pub fn new(path: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            content: content.into(),
        }
    }
}
