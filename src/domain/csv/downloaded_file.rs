use serde::Serialize;
use std::path::PathBuf;

/// Media type reported for every CSV download
pub const CSV_MEDIA_TYPE: &str = "text/csv;charset=utf-8;";

/// Receipt for a delivered download
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DownloadedFile {
    /// Final file name, always ending in `.csv`
    pub file_name: String,
    pub media_type: String,
    /// Payload size in bytes, byte-order mark included
    pub byte_len: usize,
    /// Location on disk, when the sink writes to the filesystem
    pub path: Option<PathBuf>,
}
