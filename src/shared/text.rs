//! Small text helpers shared by the section components
//!
//! File-name sanitizing, preview truncation and publication date formatting.

use chrono::{DateTime, NaiveDate};
use std::sync::Arc;

/// Caller-supplied publication date formatter
pub type DateFormatter = Arc<dyn Fn(&str) -> String + Send + Sync>;

/// Default formatter used when the caller supplies none
pub fn default_date_formatter() -> DateFormatter {
    Arc::new(format_publication_date)
}

/// Make a string safe for use in a download file name.
///
/// Every character outside `[a-z0-9_-]` (case-insensitive) becomes one `-`,
/// then the result is lower-cased. Runs are not collapsed.
pub fn sanitize_file_stem(raw: &str) -> String {
    raw.chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '_' || c == '-' {
                c.to_ascii_lowercase()
            } else {
                '-'
            }
        })
        .collect()
}

/// Cut `text` to `max_chars` characters and append "..." when it was longer
pub fn truncate_with_ellipsis(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((byte_idx, _)) => format!("{}...", &text[..byte_idx]),
        None => text.to_string(),
    }
}

/// Render an ISO date (`2021-04-01` or RFC 3339) as `Apr 1, 2021`.
/// Anything unparseable is returned unchanged.
pub fn format_publication_date(raw: &str) -> String {
    let trimmed = raw.trim();

    let date = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(trimmed)
                .ok()
                .map(|dt| dt.date_naive())
        });

    match date {
        Some(date) => date.format("%b %-d, %Y").to_string(),
        None => raw.to_string(),
    }
}
