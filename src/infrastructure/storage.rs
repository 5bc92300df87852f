use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::export_config::ExportConfig;

/// Download directory from config, relative paths resolved against the
/// current working directory, created if missing
pub fn resolve_download_dir(config: &ExportConfig) -> std::io::Result<PathBuf> {
    let dir = if config.download_dir.is_absolute() {
        config.download_dir.clone()
    } else {
        std::env::current_dir()?.join(&config.download_dir)
    };
    ensure_download_dir(&dir)?;
    Ok(dir)
}

pub fn ensure_download_dir(path: &Path) -> std::io::Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}
