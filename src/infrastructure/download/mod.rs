// ============================================================
// DOWNLOAD TRIGGER
// ============================================================
// Turn rows into a CSV payload and hand it to a download sink

mod file_sink;
mod memory_sink;

pub use file_sink::FileDownloadSink;
pub use memory_sink::{MemoryDownloadSink, StoredDownload};

use std::path::PathBuf;

use tracing::{debug, error, info};

use crate::domain::csv::{CsvRow, DownloadedFile, CSV_MEDIA_TYPE};
use crate::domain::error::Result;
use crate::infrastructure::csv::build_csv_content;

/// Byte-order mark so spreadsheet tools detect UTF-8
pub const UTF8_BOM: char = '\u{feff}';

/// Destination for a finished download payload
pub trait DownloadSink: Send + Sync {
    /// Persist `payload` under `file_name`, returning its location if it has one
    fn deliver(&self, file_name: &str, payload: &[u8]) -> Result<Option<PathBuf>>;
}

/// Append `.csv` unless the name already ends with it
pub fn ensure_csv_extension(filename: &str) -> String {
    if filename.ends_with(".csv") {
        filename.to_string()
    } else {
        format!("{}.csv", filename)
    }
}

/// BOM-prefixed UTF-8 payload for serialized CSV text
pub fn csv_payload(content: &str) -> Vec<u8> {
    let mut payload = String::with_capacity(content.len() + UTF8_BOM.len_utf8());
    payload.push(UTF8_BOM);
    payload.push_str(content);
    payload.into_bytes()
}

/// Serialize `rows` and deliver them as `<filename>.csv`.
///
/// Returns `Ok(None)` without touching the sink when there is nothing to
/// export.
pub fn download_csv(
    sink: &dyn DownloadSink,
    filename: &str,
    rows: &[CsvRow],
    headers: Option<&[String]>,
) -> Result<Option<DownloadedFile>> {
    if rows.is_empty() {
        debug!(filename, "No rows to export, skipping download");
        return Ok(None);
    }

    let content = build_csv_content(rows, headers);
    if content.is_empty() {
        debug!(filename, "Serialized CSV is empty, skipping download");
        return Ok(None);
    }

    let file_name = ensure_csv_extension(filename);
    let payload = csv_payload(&content);

    let path = sink.deliver(&file_name, &payload).map_err(|err| {
        error!(error = %err, file_name = %file_name, "Failed to deliver CSV download");
        err
    })?;

    info!(
        file_name = %file_name,
        rows = rows.len(),
        bytes = payload.len(),
        "CSV download delivered"
    );

    Ok(Some(DownloadedFile {
        file_name,
        media_type: CSV_MEDIA_TYPE.to_string(),
        byte_len: payload.len(),
        path,
    }))
}
