//! Section view models and CSV downloads for technology analysis reports.
//!
//! The host UI hands over the upstream analysis status and the records it
//! already fetched. Section components decide between the full view and a
//! skeleton placeholder, and the export use case turns what a section shows
//! into a BOM-prefixed CSV download.

mod app;

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod shared;

pub use app::{init_tracing, App};
pub use application::SectionExportUseCase;
pub use domain::csv::{CsvRow, CsvValue, DownloadedFile};
pub use domain::error::{AppError, Result};
pub use domain::export_config::ExportConfig;
pub use domain::section::{
    AnalysisStatusResponse, ComponentStatus, SectionKind, SectionStatus, SectionView,
};
pub use infrastructure::csv::{build_csv_content, CsvWriter};
pub use infrastructure::download::{
    download_csv, DownloadSink, FileDownloadSink, MemoryDownloadSink,
};
pub use interfaces::components::{
    ComparisonAxesSection, DisplayOptions, RelatedPapersSection, RelatedTechnologiesSection,
    SectionComponent,
};
