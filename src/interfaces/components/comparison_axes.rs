use super::{subject_name, DisplayOptions, SectionComponent};
use crate::domain::csv::{CsvRow, CsvValue};
use crate::domain::section::{AnalysisStatusResponse, SectionBody, SectionKind};
use crate::domain::technology::ComparisonAxis;
use crate::shared::text::sanitize_file_stem;

const COLUMNS: [&str; 4] = ["Axis Name", "Extreme 1", "Extreme 2", "Weight"];

/// Table of the axes a technology is compared along
#[derive(Debug, Clone)]
pub struct ComparisonAxesSection<'a> {
    analysis_status: Option<&'a AnalysisStatusResponse>,
    comparison_axes: &'a [ComparisonAxis],
    technology_name: &'a str,
    is_loaded: bool,
    options: DisplayOptions,
}

impl<'a> ComparisonAxesSection<'a> {
    pub fn new(
        analysis_status: Option<&'a AnalysisStatusResponse>,
        comparison_axes: &'a [ComparisonAxis],
        technology_name: &'a str,
        is_loaded: bool,
    ) -> Self {
        Self {
            analysis_status,
            comparison_axes,
            technology_name,
            is_loaded,
            options: DisplayOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }
}

fn format_weight(weight: f64) -> String {
    CsvValue::Float(weight).to_text().unwrap_or_default()
}

impl SectionComponent for ComparisonAxesSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::ComparisonAxes
    }

    fn analysis_status(&self) -> Option<&AnalysisStatusResponse> {
        self.analysis_status
    }

    fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    fn record_count(&self) -> usize {
        self.comparison_axes.len()
    }

    fn caption(&self) -> Option<String> {
        Some(format!(
            "Comparison axes for the technology: {}",
            self.technology_name
        ))
    }

    fn render_body(&self) -> SectionBody {
        let rows = self
            .comparison_axes
            .iter()
            .map(|axis| {
                vec![
                    self.options.or_placeholder(Some(&axis.axis_name)),
                    self.options.or_placeholder(Some(&axis.extreme1)),
                    self.options.or_placeholder(Some(&axis.extreme2)),
                    format_weight(axis.weight),
                ]
            })
            .collect();

        SectionBody::Table {
            columns: COLUMNS.iter().map(|c| c.to_string()).collect(),
            rows,
        }
    }

    fn export_rows(&self) -> Vec<CsvRow> {
        self.comparison_axes
            .iter()
            .map(|axis| {
                CsvRow::new()
                    .with("Axis Name", axis.axis_name.as_str())
                    .with("Extreme 1", axis.extreme1.as_str())
                    .with("Extreme 2", axis.extreme2.as_str())
                    .with("Weight", axis.weight)
            })
            .collect()
    }

    fn export_file_stem(&self) -> String {
        format!(
            "comparison-axes-{}",
            sanitize_file_stem(subject_name(self.technology_name))
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::section::{ComponentStatus, SectionStatus, SectionView};
    use crate::infrastructure::csv::CsvWriter;

    fn axes() -> Vec<ComparisonAxis> {
        vec![
            ComparisonAxis {
                id: 1,
                axis_name: "Energy density".to_string(),
                extreme1: "Low".to_string(),
                extreme2: "High".to_string(),
                weight: 1.0,
            },
            ComparisonAxis {
                id: 2,
                axis_name: "Cost, per kWh".to_string(),
                extreme1: String::new(),
                extreme2: "Expensive".to_string(),
                weight: 0.5,
            },
        ]
    }

    fn status(status: SectionStatus) -> AnalysisStatusResponse {
        AnalysisStatusResponse::default()
            .with_component(SectionKind::ComparisonAxes, ComponentStatus::new(status))
    }

    #[test]
    fn test_complete_and_loaded_renders_table() {
        let axes = axes();
        let status = status(SectionStatus::Complete);
        let section = ComparisonAxesSection::new(Some(&status), &axes, "Solid-state battery", true);

        let SectionView::Full(view) = section.render() else {
            panic!("expected full view");
        };

        assert_eq!(view.anchor_id, "comparison-axes");
        assert!(view.export_enabled);
        assert_eq!(
            view.caption.as_deref(),
            Some("Comparison axes for the technology: Solid-state battery")
        );
        match view.body {
            SectionBody::Table { columns, rows } => {
                assert_eq!(columns, COLUMNS);
                assert_eq!(rows[0], vec!["Energy density", "Low", "High", "1"]);
                assert_eq!(rows[1], vec!["Cost, per kWh", "N/A", "Expensive", "0.5"]);
            }
            other => panic!("unexpected body {:?}", other),
        }
    }

    #[test]
    fn test_not_loaded_renders_skeleton() {
        let axes = axes();
        let status = status(SectionStatus::Complete);
        let section = ComparisonAxesSection::new(Some(&status), &axes, "X", false);

        assert!(!section.render().is_full());
        assert!(!section.export_enabled());
    }

    #[test]
    fn test_missing_status_is_pending() {
        let axes = axes();
        let section = ComparisonAxesSection::new(None, &axes, "X", true);

        match section.render() {
            SectionView::Placeholder(skeleton) => {
                assert_eq!(skeleton.status, SectionStatus::Pending);
                assert_eq!(skeleton.title, "Comparison Axes");
            }
            other => panic!("unexpected view {:?}", other),
        }
    }

    #[test]
    fn test_export_disabled_without_axes() {
        let status = status(SectionStatus::Complete);
        let section = ComparisonAxesSection::new(Some(&status), &[], "X", true);

        assert!(section.render().is_full());
        assert!(!section.export_enabled());
    }

    #[test]
    fn test_export_rows_and_csv() {
        let axes = axes();
        let section = ComparisonAxesSection::new(None, &axes, "X", true);

        let csv = CsvWriter::new().write(&section.export_rows());
        assert_eq!(
            csv,
            "Axis Name,Extreme 1,Extreme 2,Weight\n\
             Energy density,Low,High,1\n\
             \"Cost, per kWh\",,Expensive,0.5"
        );
    }

    #[test]
    fn test_file_stem_is_sanitized() {
        let section = ComparisonAxesSection::new(None, &[], "My Tech! 2.0", true);
        assert_eq!(section.export_file_stem(), "comparison-axes-my-tech--2-0");

        let unnamed = ComparisonAxesSection::new(None, &[], "  ", true);
        assert_eq!(unnamed.export_file_stem(), "comparison-axes-technology");
    }
}
