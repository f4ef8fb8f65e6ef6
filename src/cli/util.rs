pub(crate) fn mask_api_token(token: &str) -> String {
    if token.is_empty() {
        return "(not set)".to_string();
    }

    let visible = token.len().min(8);
    format!("{}***", &token[..visible])
}
