/// Platform tag embedded in the prompt so the model emits OS-appropriate
/// commands. Unknown platforms fall back to the Linux tag.
pub(crate) fn platform_tag() -> &'static str {
    match std::env::consts::OS {
        "linux" => "ubuntu-latest",
        "macos" => "macos-latest",
        "windows" => "windows-latest",
        _ => "ubuntu-latest",
    }
}

#[cfg(test)]
mod tests {
    use super::platform_tag;

    #[test]
    fn tag_is_from_the_closed_set() {
        let tag = platform_tag();
        assert!(["ubuntu-latest", "macos-latest", "windows-latest"].contains(&tag));
    }
}
