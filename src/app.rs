use std::sync::Arc;

use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use crate::application::SectionExportUseCase;
use crate::domain::error::Result;
use crate::domain::export_config::ExportConfig;
use crate::infrastructure::config::ConfigService;
use crate::infrastructure::download::{DownloadSink, FileDownloadSink};
use crate::infrastructure::storage::resolve_download_dir;
use crate::interfaces::components::DisplayOptions;

/// Install the global fmt subscriber. `RUST_LOG` wins over `default_filter`;
/// an already installed subscriber is left alone.
pub fn init_tracing(default_filter: &str) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    let _ = tracing_subscriber::fmt().with_env_filter(filter).try_init();
}

/// Wires configuration, the download sink and the export use case together
pub struct App {
    config: ExportConfig,
    exporter: SectionExportUseCase,
}

impl App {
    /// Load config from the environment, start logging and write downloads
    /// to the configured directory
    pub fn bootstrap() -> Result<Self> {
        let config = ConfigService::load()?;
        init_tracing(&config.log_filter);
        Self::with_config(config)
    }

    pub fn with_config(config: ExportConfig) -> Result<Self> {
        let download_dir = resolve_download_dir(&config).map_err(|err| {
            error!(
                error = %err,
                download_dir = %config.download_dir.display(),
                "Failed to prepare download dir"
            );
            err
        })?;
        info!(download_dir = %download_dir.display(), "Downloads enabled");

        Ok(Self::with_sink(
            config,
            Arc::new(FileDownloadSink::new(download_dir)),
        ))
    }

    /// Use a custom sink, e.g. an in-memory one when the host serves bytes itself
    pub fn with_sink(config: ExportConfig, sink: Arc<dyn DownloadSink>) -> Self {
        Self {
            config,
            exporter: SectionExportUseCase::new(sink),
        }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    pub fn display_options(&self) -> DisplayOptions {
        DisplayOptions::from_config(&self.config)
    }

    pub fn exporter(&self) -> &SectionExportUseCase {
        &self.exporter
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::{
        AnalysisStatusResponse, ComponentStatus, SectionKind, SectionStatus,
    };
    use crate::domain::technology::RelatedPaper;
    use crate::infrastructure::download::MemoryDownloadSink;
    use crate::interfaces::components::{RelatedPapersSection, SectionComponent};

    #[test]
    fn test_with_config_creates_download_dir() {
        let root = tempfile::tempdir().unwrap();
        let config = ExportConfig {
            download_dir: root.path().join("out"),
            ..ExportConfig::default()
        };

        let app = App::with_config(config).unwrap();
        assert!(app.config().download_dir.is_dir());
    }

    #[test]
    fn test_display_options_follow_config() {
        let sink = Arc::new(MemoryDownloadSink::new());
        let config = ExportConfig {
            placeholder: "-".to_string(),
            abstract_preview_chars: 5,
            ..ExportConfig::default()
        };
        let app = App::with_sink(config, sink.clone());

        let papers = vec![RelatedPaper {
            id: "1".to_string(),
            abstract_text: Some("abcdefgh".to_string()),
            ..RelatedPaper::default()
        }];
        let status = AnalysisStatusResponse::default().with_component(
            SectionKind::RelatedPapers,
            ComponentStatus::new(SectionStatus::Complete),
        );
        let section = RelatedPapersSection::new(Some(&status), &papers, true)
            .with_options(app.display_options());

        let rows = section.export_rows();
        assert_eq!(
            rows[0].get("Title").and_then(|v| v.to_text()).as_deref(),
            Some("-")
        );

        app.exporter().export(&section).unwrap();
        assert_eq!(sink.files().unwrap().len(), 1);
    }

    #[test]
    fn test_init_tracing_twice_is_harmless() {
        init_tracing("debug");
        init_tracing("info");
    }
}
