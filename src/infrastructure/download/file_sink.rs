use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::debug;

use super::DownloadSink;
use crate::domain::error::{AppError, Result};
use crate::infrastructure::storage::ensure_download_dir;

/// Writes downloads into a directory on disk.
///
/// Each payload is staged in a temporary file inside the target directory
/// and renamed into place. The staged file is removed when it goes out of
/// scope without being persisted, so no partial files are left behind.
#[derive(Debug, Clone)]
pub struct FileDownloadSink {
    dir: PathBuf,
}

impl FileDownloadSink {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Target path for `file_name`, ignoring any directory components
    fn target_path(&self, file_name: &str) -> Result<PathBuf> {
        let name = Path::new(file_name)
            .file_name()
            .filter(|n| !n.is_empty())
            .ok_or_else(|| {
                AppError::ValidationError(format!("Invalid download file name: {:?}", file_name))
            })?;
        Ok(self.dir.join(name))
    }
}

impl DownloadSink for FileDownloadSink {
    fn deliver(&self, file_name: &str, payload: &[u8]) -> Result<Option<PathBuf>> {
        let target = self.target_path(file_name)?;
        ensure_download_dir(&self.dir)?;

        let mut staged = NamedTempFile::new_in(&self.dir)?;
        debug!(staged = %staged.path().display(), target = %target.display(), "Staging download");

        staged.write_all(payload)?;
        staged.flush()?;
        staged.persist(&target)?;

        Ok(Some(target))
    }
}
