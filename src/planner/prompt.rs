pub(crate) const PLANNER_SYSTEM_PROMPT: &str =
    "Generate safe, OS-specific system commands and file changes";

/// Assemble the instruction prompt for one task. Pure string formatting:
/// the template names the two output sections the parser recognizes and
/// shows the exact entry formats expected in each.
pub(crate) fn build_prompt(task: &str, platform: &str) -> String {
    format!(
        r#"You are a cross-platform system automation expert. Generate safe, OS-specific commands using this format:

OS: {platform}
Commands:
1. command_1  # Comment explaining why
2. command_2

Files:
- /path/file.txt: |
    file content

Task: {task}

Guidelines:
- Prefer cross-platform tools where possible
- Never use rm -rf /
- Handle paths appropriately for OS
- Include error handling"#
    )
}

#[cfg(test)]
mod tests {
    use super::build_prompt;

    #[test]
    fn prompt_embeds_task_and_platform() {
        let prompt = build_prompt("install ripgrep", "macos-latest");
        assert!(prompt.contains("Task: install ripgrep"));
        assert!(prompt.contains("OS: macos-latest"));
    }

    #[test]
    fn prompt_names_both_sections_and_entry_formats() {
        let prompt = build_prompt("anything", "ubuntu-latest");
        assert!(prompt.contains("Commands:"));
        assert!(prompt.contains("Files:"));
        assert!(prompt.contains("1. command_1  # Comment explaining why"));
        assert!(prompt.contains("- /path/file.txt: |"));
    }

    #[test]
    fn prompt_is_deterministic() {
        assert_eq!(
            build_prompt("task", "ubuntu-latest"),
            build_prompt("task", "ubuntu-latest")
        );
    }
}
