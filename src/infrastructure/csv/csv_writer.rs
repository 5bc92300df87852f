// ============================================================
// CSV WRITER
// ============================================================
// Serialize ordered rows into comma-separated text

use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::HashSet;

use crate::domain::csv::{CsvRow, CsvValue};

static LINE_BREAKS_PATTERN: Lazy<Regex> = Lazy::new(|| Regex::new(r"[\r\n]+").unwrap());

/// CSV writer with optional explicit headers
#[derive(Debug, Clone, Default)]
pub struct CsvWriter {
    /// Explicit header list; derived from the rows when absent or empty
    headers: Option<Vec<String>>,
}

impl CsvWriter {
    /// Create a writer that derives headers from the rows
    pub fn new() -> Self {
        Self::default()
    }

    /// Use an explicit header list
    pub fn with_headers<I, S>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.headers = Some(headers.into_iter().map(Into::into).collect());
        self
    }

    /// Headers that will be written for `rows`
    pub fn effective_headers(&self, rows: &[CsvRow]) -> Vec<String> {
        match &self.headers {
            Some(headers) if !headers.is_empty() => headers.clone(),
            _ => derive_headers(rows),
        }
    }

    /// Serialize rows. Empty input yields an empty string.
    pub fn write(&self, rows: &[CsvRow]) -> String {
        if rows.is_empty() {
            return String::new();
        }

        let headers = self.effective_headers(rows);

        let header_line = headers
            .iter()
            .map(|h| normalize_field(h))
            .collect::<Vec<_>>()
            .join(",");

        let data_lines = rows.iter().map(|row| {
            headers
                .iter()
                .map(|h| row.get(h).map(normalize_value).unwrap_or_default())
                .collect::<Vec<_>>()
                .join(",")
        });

        std::iter::once(header_line)
            .chain(data_lines)
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Serialize `rows`, using `headers` when given and non-empty
pub fn build_csv_content(rows: &[CsvRow], headers: Option<&[String]>) -> String {
    let writer = match headers {
        Some(headers) => CsvWriter::new().with_headers(headers.iter().cloned()),
        None => CsvWriter::new(),
    };
    writer.write(rows)
}

/// Union of all row keys in first-seen order
pub fn derive_headers(rows: &[CsvRow]) -> Vec<String> {
    let mut seen: HashSet<&str> = HashSet::new();
    let mut headers = Vec::new();

    for key in rows.iter().flat_map(|row| row.keys()) {
        if seen.insert(key) {
            headers.push(key.to_string());
        }
    }

    headers
}

/// Collapse every run of CR/LF into one space and trim.
///
/// Trimming uses Unicode `White_Space`, so U+0085 is stripped and U+FEFF is
/// kept; a browser `trim()` does the opposite for those two characters.
pub fn flatten_text(text: &str) -> String {
    LINE_BREAKS_PATTERN.replace_all(text, " ").trim().to_string()
}

/// Normalize a cell; `Null` becomes an empty cell
pub fn normalize_value(value: &CsvValue) -> String {
    match value.to_text() {
        Some(text) => normalize_field(&text),
        None => String::new(),
    }
}

/// Flatten line breaks, trim, and quote when the text holds `"`, `,` or a
/// line feed
pub fn normalize_field(text: &str) -> String {
    let flat = flatten_text(text);

    if flat.contains(['"', ',', '\n']) {
        format!("\"{}\"", flat.replace('"', "\"\""))
    } else {
        flat
    }
}
