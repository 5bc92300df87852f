// ============================================================
// EXPORT CONFIGURATION
// ============================================================
// Tunables for section rendering and CSV downloads

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Configuration for rendering sections and writing exports
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ExportConfig {
    /// Directory downloads are written to (default: "downloads")
    pub download_dir: PathBuf,

    /// Character budget for abstract previews before "..." (default: 200)
    pub abstract_preview_chars: usize,

    /// Text shown and exported for absent fields (default: "N/A")
    pub placeholder: String,

    /// tracing filter used when RUST_LOG is unset (default: "info")
    pub log_filter: String,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            download_dir: PathBuf::from("downloads"),
            abstract_preview_chars: 200,
            placeholder: "N/A".to_string(),
            log_filter: "info".to_string(),
        }
    }
}

impl ExportConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), String> {
        if self.download_dir.as_os_str().is_empty() {
            return Err("download_dir must not be empty".to_string());
        }
        if self.abstract_preview_chars == 0 {
            return Err("abstract_preview_chars must be > 0".to_string());
        }
        if self.placeholder.trim().is_empty() {
            return Err("placeholder must not be empty".to_string());
        }
        Ok(())
    }
}
