//! Section display components
//!
//! Each component is a pure function of the upstream status, the records it
//! shows and whether the page finished loading. A section renders its full
//! view only when its status is `complete` and the page is loaded; every
//! other combination renders the skeleton placeholder.

mod comparison_axes;
mod related_papers;
mod related_technologies;
mod skeleton;

pub use comparison_axes::ComparisonAxesSection;
pub use related_papers::RelatedPapersSection;
pub use related_technologies::RelatedTechnologiesSection;
pub use skeleton::section_skeleton;

use crate::domain::csv::CsvRow;
use crate::domain::export_config::ExportConfig;
use crate::domain::section::{
    AnalysisStatusResponse, ComponentStatus, FullSectionView, SectionBody, SectionKind,
    SectionStatus, SectionView,
};
use crate::shared::text::{default_date_formatter, DateFormatter};

/// Rendering knobs shared by all sections
#[derive(Clone)]
pub struct DisplayOptions {
    pub placeholder: String,
    pub abstract_preview_chars: usize,
    pub date_formatter: DateFormatter,
}

impl DisplayOptions {
    pub fn from_config(config: &ExportConfig) -> Self {
        Self {
            placeholder: config.placeholder.clone(),
            abstract_preview_chars: config.abstract_preview_chars,
            date_formatter: default_date_formatter(),
        }
    }

    pub fn with_date_formatter(mut self, formatter: DateFormatter) -> Self {
        self.date_formatter = formatter;
        self
    }

    /// `value` if present and non-empty, the placeholder otherwise
    pub fn or_placeholder(&self, value: Option<&str>) -> String {
        match value {
            Some(v) if !v.is_empty() => v.to_string(),
            _ => self.placeholder.clone(),
        }
    }

    pub fn format_date(&self, raw: &str) -> String {
        (self.date_formatter)(raw)
    }
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self::from_config(&ExportConfig::default())
    }
}

impl std::fmt::Debug for DisplayOptions {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DisplayOptions")
            .field("placeholder", &self.placeholder)
            .field("abstract_preview_chars", &self.abstract_preview_chars)
            .finish_non_exhaustive()
    }
}

/// A report section that can render itself and export what it shows
pub trait SectionComponent {
    fn kind(&self) -> SectionKind;

    fn analysis_status(&self) -> Option<&AnalysisStatusResponse>;

    fn is_loaded(&self) -> bool;

    /// Number of records currently held
    fn record_count(&self) -> usize;

    /// Body of the full view
    fn render_body(&self) -> SectionBody;

    fn caption(&self) -> Option<String> {
        None
    }

    /// Rows written to the CSV download
    fn export_rows(&self) -> Vec<CsvRow>;

    /// Download file name without the `.csv` suffix
    fn export_file_stem(&self) -> String;

    /// Status of this section; `pending` when upstream says nothing
    fn component_status(&self) -> ComponentStatus {
        self.analysis_status()
            .and_then(|status| status.component(self.kind()))
            .cloned()
            .unwrap_or_default()
    }

    fn shows_full_view(&self) -> bool {
        self.component_status().status == SectionStatus::Complete && self.is_loaded()
    }

    fn export_enabled(&self) -> bool {
        self.shows_full_view() && self.record_count() > 0
    }

    fn render(&self) -> SectionView {
        let status = self.component_status();
        match status.status {
            SectionStatus::Complete if self.is_loaded() => {
                SectionView::Full(self.render_full())
            }
            _ => SectionView::Placeholder(section_skeleton(self.kind(), &status)),
        }
    }

    fn render_full(&self) -> FullSectionView {
        let kind = self.kind();
        FullSectionView {
            anchor_id: kind.anchor_id().to_string(),
            title: kind.title().to_string(),
            description: kind.description().to_string(),
            icon: kind.icon(),
            export_enabled: self.record_count() > 0,
            caption: self.caption(),
            body: self.render_body(),
        }
    }
}

/// Subject name used in captions and file names, "technology" when blank
pub(crate) fn subject_name(name: &str) -> &str {
    if name.trim().is_empty() {
        "technology"
    } else {
        name
    }
}
