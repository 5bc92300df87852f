use std::path::Path;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use tracing::{debug, warn};

use crate::domain::error::{AppError, Result};
use crate::domain::export_config::ExportConfig;

/// Default config file looked up in the working directory
pub const CONFIG_FILE: &str = "techscope.toml";

/// Prefix of environment overrides, e.g. `TECHSCOPE_DOWNLOAD_DIR`
pub const ENV_PREFIX: &str = "TECHSCOPE_";

pub struct ConfigService;

impl ConfigService {
    /// Load defaults <- `techscope.toml` <- `TECHSCOPE_*` env vars
    pub fn load() -> Result<ExportConfig> {
        if let Err(err) = dotenvy::dotenv() {
            if !err.not_found() {
                warn!(error = %err, "Failed to read .env file");
            }
        }
        Self::load_from(Path::new(CONFIG_FILE))
    }

    /// Same layering as [`ConfigService::load`] with an explicit config file
    pub fn load_from(path: &Path) -> Result<ExportConfig> {
        debug!(path = %path.display(), "Loading export config");
        let figment = Figment::from(Serialized::defaults(ExportConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed(ENV_PREFIX));
        Self::extract(figment)
    }

    /// Defaults overridden by an in-memory TOML document
    pub fn from_toml_str(toml: &str) -> Result<ExportConfig> {
        let figment = Figment::from(Serialized::defaults(ExportConfig::default()))
            .merge(Toml::string(toml));
        Self::extract(figment)
    }

    fn extract(figment: Figment) -> Result<ExportConfig> {
        let config: ExportConfig = figment.extract()?;
        config
            .validate()
            .map_err(|e| AppError::ValidationError(format!("Invalid export config: {}", e)))?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use figment::Jail;
    use std::path::PathBuf;

    #[test]
    fn test_defaults_without_sources() {
        Jail::expect_with(|_jail| {
            let config = ConfigService::load_from(Path::new("absent.toml")).unwrap();
            assert_eq!(config, ExportConfig::default());
            Ok(())
        });
    }

    #[test]
    fn test_file_then_env_layering() {
        Jail::expect_with(|jail| {
            jail.create_file(
                CONFIG_FILE,
                r#"
                    download_dir = "exports"
                    abstract_preview_chars = 120
                "#,
            )?;
            jail.set_env("TECHSCOPE_ABSTRACT_PREVIEW_CHARS", "80");
            jail.set_env("TECHSCOPE_PLACEHOLDER", "-");

            let config = ConfigService::load_from(Path::new(CONFIG_FILE)).unwrap();
            assert_eq!(config.download_dir, PathBuf::from("exports"));
            assert_eq!(config.abstract_preview_chars, 80);
            assert_eq!(config.placeholder, "-");
            assert_eq!(config.log_filter, "info");
            Ok(())
        });
    }

    #[test]
    fn test_from_toml_str() {
        let config = ConfigService::from_toml_str("log_filter = \"debug\"").unwrap();
        assert_eq!(config.log_filter, "debug");
        assert_eq!(config.abstract_preview_chars, 200);
    }

    #[test]
    fn test_invalid_values_are_rejected() {
        let err = ConfigService::from_toml_str("abstract_preview_chars = 0").unwrap_err();
        assert!(matches!(err, AppError::ValidationError(_)));

        let err = ConfigService::from_toml_str("abstract_preview_chars = \"many\"").unwrap_err();
        assert!(matches!(err, AppError::ConfigError(_)));
    }
}
