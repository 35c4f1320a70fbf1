//! String helpers for console output

/// Truncate to at most `max_chars` characters, appending "..." when cut.
///
/// Counts characters rather than bytes, so multi-byte text never panics.
///
/// ```
/// use feedback_monitor_core::utils::string::truncate_at_char_boundary;
///
/// assert_eq!(truncate_at_char_boundary("refund request", 6), "refund...");
/// assert_eq!(truncate_at_char_boundary("short", 10), "short");
/// ```
pub fn truncate_at_char_boundary(s: &str, max_chars: usize) -> String {
    match s.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &s[..byte_idx]),
        None => s.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_ascii() {
        assert_eq!(truncate_at_char_boundary("hello", 5), "hello");
        assert_eq!(truncate_at_char_boundary("hello world", 5), "hello...");
        assert_eq!(truncate_at_char_boundary("", 5), "");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate_at_char_boundary("café au lait", 4), "café...");
        assert_eq!(truncate_at_char_boundary("→→→", 2), "→→...");
    }
}
