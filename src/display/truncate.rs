//! Word-limit truncation

/// Keep the first `limit` whitespace-delimited words, joined by single spaces.
///
/// Inputs with fewer words keep all of them.
pub fn truncate_words(text: &str, limit: usize) -> String {
    text.split_whitespace()
        .take(limit)
        .collect::<Vec<_>>()
        .join(" ")
}
