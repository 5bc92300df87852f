// ============================================================
// SECTION EXPORT USE CASE
// ============================================================
// Export the records a section is currently showing as a CSV download

use std::sync::Arc;

use tracing::debug;

use crate::domain::csv::DownloadedFile;
use crate::domain::error::Result;
use crate::infrastructure::download::{download_csv, DownloadSink};
use crate::interfaces::components::SectionComponent;

/// Runs the "Download CSV" action of a section
#[derive(Clone)]
pub struct SectionExportUseCase {
    sink: Arc<dyn DownloadSink>,
}

impl SectionExportUseCase {
    pub fn new(sink: Arc<dyn DownloadSink>) -> Self {
        Self { sink }
    }

    /// Export `section`'s records.
    ///
    /// A no-op returning `Ok(None)` unless the section shows its full view
    /// and holds at least one record.
    pub fn export(&self, section: &dyn SectionComponent) -> Result<Option<DownloadedFile>> {
        if !section.export_enabled() {
            debug!(section = ?section.kind(), "Export disabled, nothing to download");
            return Ok(None);
        }

        let rows = section.export_rows();
        let file_stem = section.export_file_stem();
        download_csv(self.sink.as_ref(), &file_stem, &rows, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::{
        AnalysisStatusResponse, ComponentStatus, SectionKind, SectionStatus,
    };
    use crate::domain::technology::{ComparisonAxis, RelatedPaper};
    use crate::infrastructure::download::{FileDownloadSink, MemoryDownloadSink};
    use crate::interfaces::components::{ComparisonAxesSection, RelatedPapersSection};

    fn axes() -> Vec<ComparisonAxis> {
        vec![ComparisonAxis {
            id: 1,
            axis_name: "Maturity".to_string(),
            extreme1: "Lab".to_string(),
            extreme2: "Mass market".to_string(),
            weight: 2.0,
        }]
    }

    fn status(kind: SectionKind, status: SectionStatus) -> AnalysisStatusResponse {
        AnalysisStatusResponse::default().with_component(kind, ComponentStatus::new(status))
    }

    #[test]
    fn test_export_complete_section() {
        let sink = Arc::new(MemoryDownloadSink::new());
        let use_case = SectionExportUseCase::new(sink.clone());

        let axes = axes();
        let status = status(SectionKind::ComparisonAxes, SectionStatus::Complete);
        let section = ComparisonAxesSection::new(Some(&status), &axes, "My Tech! 2.0", true);

        let file = use_case.export(&section).unwrap().unwrap();

        assert_eq!(file.file_name, "comparison-axes-my-tech--2-0.csv");
        let stored = sink.last().unwrap().unwrap();
        assert_eq!(
            stored.text_without_bom(),
            "Axis Name,Extreme 1,Extreme 2,Weight\nMaturity,Lab,Mass market,2"
        );
    }

    #[test]
    fn test_export_skipped_while_processing() {
        let sink = Arc::new(MemoryDownloadSink::new());
        let use_case = SectionExportUseCase::new(sink.clone());

        let axes = axes();
        let status = status(SectionKind::ComparisonAxes, SectionStatus::Processing);
        let section = ComparisonAxesSection::new(Some(&status), &axes, "X", true);

        assert!(use_case.export(&section).unwrap().is_none());
        assert!(sink.files().unwrap().is_empty());
    }

    #[test]
    fn test_export_skipped_for_empty_records() {
        let sink = Arc::new(MemoryDownloadSink::new());
        let use_case = SectionExportUseCase::new(sink.clone());

        let status = status(SectionKind::RelatedPapers, SectionStatus::Complete);
        let section = RelatedPapersSection::new(Some(&status), &[], true);

        assert!(use_case.export(&section).unwrap().is_none());
        assert!(sink.files().unwrap().is_empty());
    }

    #[test]
    fn test_export_to_disk() {
        let root = tempfile::tempdir().unwrap();
        let use_case = SectionExportUseCase::new(Arc::new(FileDownloadSink::new(root.path())));

        let papers = vec![RelatedPaper {
            id: "1".to_string(),
            paper_id: Some("abc".to_string()),
            title: Some("Title".to_string()),
            ..RelatedPaper::default()
        }];
        let status = status(SectionKind::RelatedPapers, SectionStatus::Complete);
        let section = RelatedPapersSection::new(Some(&status), &papers, true);

        let file = use_case.export(&section).unwrap().unwrap();
        let path = file.path.unwrap();

        assert_eq!(path, root.path().join("related-papers-abc.csv"));
        let bytes = std::fs::read(&path).unwrap();
        assert!(bytes.starts_with("\u{feff}#,Title".as_bytes()));
        assert_eq!(bytes.len(), file.byte_len);
    }
}
