use std::path::PathBuf;
use std::sync::Mutex;

use super::{DownloadSink, UTF8_BOM};
use crate::domain::error::{AppError, Result};

/// A download kept in memory
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDownload {
    pub file_name: String,
    pub payload: Vec<u8>,
}

impl StoredDownload {
    /// Payload as text with the leading byte-order mark removed
    pub fn text_without_bom(&self) -> String {
        let text = String::from_utf8_lossy(&self.payload);
        text.strip_prefix(UTF8_BOM).unwrap_or(text.as_ref()).to_string()
    }
}

/// Sink that hands payloads back to the caller instead of writing files
#[derive(Debug, Default)]
pub struct MemoryDownloadSink {
    files: Mutex<Vec<StoredDownload>>,
}

impl MemoryDownloadSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// All downloads delivered so far, oldest first
    pub fn files(&self) -> Result<Vec<StoredDownload>> {
        let files = self
            .files
            .lock()
            .map_err(|e| AppError::Internal(format!("Download buffer poisoned: {}", e)))?;
        Ok(files.clone())
    }

    /// Most recent download, if any
    pub fn last(&self) -> Result<Option<StoredDownload>> {
        Ok(self.files()?.pop())
    }

    /// Remove and return everything delivered so far
    pub fn drain(&self) -> Result<Vec<StoredDownload>> {
        let mut files = self
            .files
            .lock()
            .map_err(|e| AppError::Internal(format!("Download buffer poisoned: {}", e)))?;
        Ok(std::mem::take(&mut *files))
    }
}

impl DownloadSink for MemoryDownloadSink {
    fn deliver(&self, file_name: &str, payload: &[u8]) -> Result<Option<PathBuf>> {
        let mut files = self
            .files
            .lock()
            .map_err(|e| AppError::Internal(format!("Download buffer poisoned: {}", e)))?;
        files.push(StoredDownload {
            file_name: file_name.to_string(),
            payload: payload.to_vec(),
        });
        Ok(None)
    }
}
