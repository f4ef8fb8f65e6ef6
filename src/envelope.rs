//! The single JSON object a caller reads from stdout. Either a plan or
//! an error, never both.

use std::io::Write;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::planner::{Plan, PlanFile};

#[derive(Debug, PartialEq, Serialize, Deserialize)]
pub struct ResultEnvelope {
    pub commands: Vec<String>,
    pub files: Vec<PlanFile>,
    pub error: Option<String>,
}

impl ResultEnvelope {
    pub fn success(plan: Plan) -> Self {
        Self {
            commands: plan.commands,
            files: plan.files,
            error: None,
        }
    }

    pub fn failure(message: impl Into<String>) -> Self {
        Self {
            commands: Vec::new(),
            files: Vec::new(),
            error: Some(message.into()),
        }
    }

    /// Write the envelope as one line and flush. Callers parse this
    /// single line, so nothing else may be written to the same stream.
    pub fn write(&self, mut out: impl Write) -> Result<()> {
        serde_json::to_writer(&mut out, self).context("Failed to serialize result envelope")?;
        out.write_all(b"\n")?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::planner::Plan;

    #[test]
    fn success_envelope_round_trips() {
        let plan = Plan {
            commands: vec!["echo hi".to_string(), "mkdir -p out".to_string()],
            files: vec![
                PlanFile::new("/tmp/a.txt", "hello\nworld"),
                PlanFile::new("/tmp/b.txt", ""),
            ],
        };
        let envelope = ResultEnvelope::success(plan);

        let mut buffer = Vec::new();
        envelope.write(&mut buffer).unwrap();
        let line = String::from_utf8(buffer).unwrap();
        assert!(line.ends_with('\n'));
        assert_eq!(line.lines().count(), 1);

        let decoded: ResultEnvelope = serde_json::from_str(line.trim_end()).unwrap();
        assert_eq!(decoded, envelope);
        assert_eq!(decoded.error, None);
    }

    #[test]
    fn failure_envelope_has_empty_sequences_and_message() {
        let envelope = ResultEnvelope::failure("Planner completion call failed");

        let mut buffer = Vec::new();
        envelope.write(&mut buffer).unwrap();
        let decoded: ResultEnvelope =
            serde_json::from_slice(buffer.trim_ascii_end()).unwrap();

        assert!(decoded.commands.is_empty());
        assert!(decoded.files.is_empty());
        assert_eq!(
            decoded.error.as_deref(),
            Some("Planner completion call failed")
        );
    }

    #[test]
    fn files_encode_as_path_content_objects() {
        let envelope = ResultEnvelope::success(Plan {
            commands: vec![],
            files: vec![PlanFile::new("/etc/motd", "hi")],
        });

        let json = serde_json::to_value(&envelope).unwrap();
        assert_eq!(json["files"][0]["path"], "/etc/motd");
        assert_eq!(json["files"][0]["content"], "hi");
        assert!(json["error"].is_null());
    }
}
