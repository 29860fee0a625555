//! UI helper functions

/// Word with an optional plural "s", for the summary line
pub fn pluralize(count: usize, word: &str) -> String {
    if count == 1 {
        format!("{} {}", count, word)
    } else {
        format!("{} {}s", count, word)
    }
}

/// Truncate to a character budget, appending "..." when cut
pub fn truncate(text: &str, max_chars: usize) -> String {
    let char_count = text.chars().count();
    if char_count <= max_chars {
        return text.to_string();
    }
    let take_chars = max_chars.saturating_sub(3);
    let cut: String = text.chars().take(take_chars).collect();
    format!("{}...", cut)
}
