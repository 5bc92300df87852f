use super::{subject_name, DisplayOptions, SectionComponent};
use crate::domain::csv::{CsvRow, CsvValue};
use crate::domain::section::{
    AnalysisStatusResponse, CardDetail, CardLink, RecordCard, SectionBody, SectionKind,
};
use crate::domain::technology::{non_empty, RelatedTechnology};
use crate::shared::text::{sanitize_file_stem, truncate_with_ellipsis};

const EMPTY_MESSAGE: &str = "No related technologies found for this technology.";

/// Cards for patents and similar technologies
#[derive(Debug, Clone)]
pub struct RelatedTechnologiesSection<'a> {
    analysis_status: Option<&'a AnalysisStatusResponse>,
    technologies: &'a [RelatedTechnology],
    technology_name: &'a str,
    is_loaded: bool,
    options: DisplayOptions,
}

impl<'a> RelatedTechnologiesSection<'a> {
    pub fn new(
        analysis_status: Option<&'a AnalysisStatusResponse>,
        technologies: &'a [RelatedTechnology],
        technology_name: &'a str,
        is_loaded: bool,
    ) -> Self {
        Self {
            analysis_status,
            technologies,
            technology_name,
            is_loaded,
            options: DisplayOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    fn render_card(&self, tech: &RelatedTechnology) -> RecordCard {
        let mut badges = vec![non_empty(&tech.kind).unwrap_or("Technology").to_string()];
        if let Some(document_id) = non_empty(&tech.document_id) {
            badges.push(format!("ID: {}", document_id));
        }
        if let Some(cluster) = tech.cluster {
            badges.push(format!("Cluster {}", cluster));
        }

        let mut details = Vec::new();
        if let Some(date) = non_empty(&tech.publication_date) {
            details.push(CardDetail::new("Published", self.options.format_date(date)));
        }
        if let Some(inventors) = non_empty(&tech.inventors) {
            details.push(CardDetail::new("Inventors", inventors));
        }
        if let Some(assignees) = non_empty(&tech.assignees) {
            details.push(CardDetail::new("Assignees", assignees));
        }

        RecordCard {
            key: tech.id.clone(),
            title: self.options.or_placeholder(Some(&tech.name)),
            badges,
            abstract_preview: non_empty(&tech.abstract_text)
                .map(|text| truncate_with_ellipsis(text, self.options.abstract_preview_chars)),
            details,
            link: non_empty(&tech.url).map(|url| CardLink {
                label: "View Document".to_string(),
                href: url.to_string(),
            }),
        }
    }
}

impl SectionComponent for RelatedTechnologiesSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::RelatedTechnologies
    }

    fn analysis_status(&self) -> Option<&AnalysisStatusResponse> {
        self.analysis_status
    }

    fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    fn record_count(&self) -> usize {
        self.technologies.len()
    }

    fn render_body(&self) -> SectionBody {
        if self.technologies.is_empty() {
            return SectionBody::Empty(EMPTY_MESSAGE.to_string());
        }
        SectionBody::Cards(
            self.technologies
                .iter()
                .map(|t| self.render_card(t))
                .collect(),
        )
    }

    fn export_rows(&self) -> Vec<CsvRow> {
        let opts = &self.options;
        self.technologies
            .iter()
            .enumerate()
            .map(|(idx, tech)| {
                let published = match non_empty(&tech.publication_date) {
                    Some(date) => opts.format_date(date),
                    None => opts.placeholder.clone(),
                };
                let cluster = match tech.cluster {
                    Some(cluster) => CsvValue::from(cluster),
                    None => CsvValue::from(opts.placeholder.as_str()),
                };

                CsvRow::new()
                    .with("#", CsvValue::from(idx + 1))
                    .with("Name", opts.or_placeholder(Some(&tech.name)))
                    .with("Type", opts.or_placeholder(tech.kind.as_deref()))
                    .with("Document ID", opts.or_placeholder(tech.document_id.as_deref()))
                    .with("Publication Date", published)
                    .with("Inventors", opts.or_placeholder(tech.inventors.as_deref()))
                    .with("Assignees", opts.or_placeholder(tech.assignees.as_deref()))
                    .with("Cluster", cluster)
                    .with("Summary", opts.or_placeholder(tech.abstract_text.as_deref()))
                    .with("Link", opts.or_placeholder(tech.url.as_deref()))
            })
            .collect()
    }

    fn export_file_stem(&self) -> String {
        format!(
            "related-technologies-{}",
            sanitize_file_stem(subject_name(self.technology_name))
        )
    }
}
