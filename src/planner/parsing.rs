//! Line-oriented extraction of a [`Plan`] from a model reply.
//!
//! The reply format is only requested, never guaranteed, so parsing is
//! lenient by contract: lines that match no rule are skipped, and the
//! parser always returns a (possibly empty) plan rather than an error.
//! Over-rejecting would throw away usable partial plans.

use super::types::{Plan, PlanFile};

/// Which section header was seen most recently. Entries are only
/// recognized once their section is active.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Section {
    None,
    Commands,
    Files,
}

const COMMENT_MARKER: &str = "  #";

/// Scan the reply once, front to back. Section markers switch state and
/// are idempotent; an in-progress file entry is flushed when the next
/// dash entry starts or the input ends.
pub(crate) fn parse_reply(reply: &str) -> Plan {
    let mut plan = Plan::default();
    let mut section = Section::None;
    let mut open_file: Option<PlanFile> = None;

    for raw in reply.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }

        if line.starts_with("Commands:") {
            section = Section::Commands;
        } else if line.starts_with("Files:") {
            section = Section::Files;
        } else if section == Section::Commands && starts_with_digit(line) {
            if let Some(command) = command_text(line) {
                plan.commands.push(command.to_string());
            }
        } else if section == Section::Files && line.starts_with("- ") {
            if let Some(file) = open_file.take() {
                plan.files.push(file);
            }
            open_file = open_file_entry(&line[2..]);
        } else if section == Section::Files {
            if let Some(file) = open_file.as_mut() {
                if !file.content.is_empty() {
                    file.content.push('\n');
                }
                file.content.push_str(line);
            }
        }
    }

    if let Some(file) = open_file {
        plan.files.push(file);
    }

    plan
}

fn starts_with_digit(line: &str) -> bool {
    line.chars().next().is_some_and(|c| c.is_ascii_digit())
}

/// Text of a numbered command entry: everything after the first `". "`
/// separator, truncated at the comment marker, trimmed. Returns `None`
/// for malformed entries and for entries that are empty once the
/// trailing comment is stripped (e.g. `1.   # noop`).
fn command_text(line: &str) -> Option<&str> {
    let (_, rest) = line.split_once(". ")?;
    let text = match rest.find(COMMENT_MARKER) {
        Some(idx) => &rest[..idx],
        None => rest,
    };
    let text = text.trim();
    (!text.is_empty()).then_some(text)
}

/// Start a new file entry from the text after the dash. The remainder
/// splits once on the first colon into (path, inline content); without a
/// colon the whole remainder is the path. An inline content of `|` is
/// the block marker from the prompt template and starts the content
/// empty. Entries with an empty path are dropped.
fn open_file_entry(entry: &str) -> Option<PlanFile> {
    let (path, inline) = match entry.split_once(':') {
        Some((path, rest)) => (path.trim(), rest.trim()),
        None => (entry.trim(), ""),
    };
    if path.is_empty() {
        return None;
    }
    let content = if inline == "|" { "" } else { inline };
    Some(PlanFile::new(path, content))
}
