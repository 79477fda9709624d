//! Text normalization — whitespace collapse and hard character caps.

/// Cap for the general preprocessing path. The tighter cap on text sent to
/// the remote summarization endpoint belongs to the remote client itself.
pub const PREPROCESS_CHARS: usize = 2000;

/// Collapse whitespace/newline runs to single spaces, trim, and truncate to
/// `max_chars`. The cap is a hard character cut, not sentence-aware.
/// Empty input yields empty output.
pub fn normalize(text: &str, max_chars: usize) -> String {
    let collapsed: Vec<&str> = text.split_whitespace().collect();
    let collapsed = collapsed.join(" ");
    match collapsed.char_indices().nth(max_chars) {
        Some((idx, _)) => collapsed[..idx].to_string(),
        None => collapsed,
    }
}

/// Normalize for the general preprocessing path (2000-char cap).
pub fn preprocess(text: &str) -> String {
    normalize(text, PREPROCESS_CHARS)
}
