use super::{DisplayOptions, SectionComponent};
use crate::domain::csv::{CsvRow, CsvValue};
use crate::domain::section::{
    AnalysisStatusResponse, CardDetail, CardLink, Icon, RecordCard, SectionBody, SectionKind,
};
use crate::domain::technology::{non_empty, RelatedPaper};
use crate::shared::text::{sanitize_file_stem, truncate_with_ellipsis};

const EMPTY_MESSAGE: &str = "No related papers found for this technology.";

/// Cards for the academic papers found for a technology
#[derive(Debug, Clone)]
pub struct RelatedPapersSection<'a> {
    analysis_status: Option<&'a AnalysisStatusResponse>,
    papers: &'a [RelatedPaper],
    is_loaded: bool,
    options: DisplayOptions,
}

impl<'a> RelatedPapersSection<'a> {
    pub fn new(
        analysis_status: Option<&'a AnalysisStatusResponse>,
        papers: &'a [RelatedPaper],
        is_loaded: bool,
    ) -> Self {
        Self {
            analysis_status,
            papers,
            is_loaded,
            options: DisplayOptions::default(),
        }
    }

    pub fn with_options(mut self, options: DisplayOptions) -> Self {
        self.options = options;
        self
    }

    fn render_card(&self, paper: &RelatedPaper) -> RecordCard {
        let mut badges = vec!["Paper".to_string()];
        if let Some(paper_id) = non_empty(&paper.paper_id) {
            badges.push(format!("ID: {}", paper_id));
        }

        let mut details = Vec::new();
        if let Some(date) = non_empty(&paper.publication_date) {
            details.push(CardDetail::new("Published", self.options.format_date(date)));
        }
        if let Some(authors) = non_empty(&paper.authors) {
            details.push(CardDetail::new("Authors", authors));
        }
        if let Some(journal) = non_empty(&paper.journal) {
            details.push(CardDetail::new("Journal", journal));
        }
        if let Some(citations) = paper.citation_count.filter(|c| *c > 0) {
            details.push(CardDetail {
                icon: Some(Icon::Award),
                ..CardDetail::new("Citations", citations.to_string())
            });
        }

        RecordCard {
            key: paper.id.clone(),
            title: self.options.or_placeholder(paper.title.as_deref()),
            badges,
            abstract_preview: non_empty(&paper.abstract_text)
                .map(|text| truncate_with_ellipsis(text, self.options.abstract_preview_chars)),
            details,
            link: non_empty(&paper.url).map(|url| CardLink {
                label: "View Paper".to_string(),
                href: url.to_string(),
            }),
        }
    }
}

impl SectionComponent for RelatedPapersSection<'_> {
    fn kind(&self) -> SectionKind {
        SectionKind::RelatedPapers
    }

    fn analysis_status(&self) -> Option<&AnalysisStatusResponse> {
        self.analysis_status
    }

    fn is_loaded(&self) -> bool {
        self.is_loaded
    }

    fn record_count(&self) -> usize {
        self.papers.len()
    }

    fn render_body(&self) -> SectionBody {
        if self.papers.is_empty() {
            return SectionBody::Empty(EMPTY_MESSAGE.to_string());
        }
        SectionBody::Cards(self.papers.iter().map(|p| self.render_card(p)).collect())
    }

    fn export_rows(&self) -> Vec<CsvRow> {
        let opts = &self.options;
        self.papers
            .iter()
            .enumerate()
            .map(|(idx, paper)| {
                let published = match non_empty(&paper.publication_date) {
                    Some(date) => opts.format_date(date),
                    None => opts.placeholder.clone(),
                };
                let citations = match paper.citation_count {
                    Some(count) => count.to_string(),
                    None => opts.placeholder.clone(),
                };

                CsvRow::new()
                    .with("#", CsvValue::from(idx + 1))
                    .with("Title", opts.or_placeholder(paper.title.as_deref()))
                    .with("Publication Date", published)
                    .with("Authors", opts.or_placeholder(paper.authors.as_deref()))
                    .with("Journal", opts.or_placeholder(paper.journal.as_deref()))
                    .with("Citations", citations)
                    .with("Summary", opts.or_placeholder(paper.abstract_text.as_deref()))
                    .with("Paper Link", opts.or_placeholder(paper.url.as_deref()))
                    .with("Paper ID", opts.or_placeholder(paper.paper_id.as_deref()))
            })
            .collect()
    }

    fn export_file_stem(&self) -> String {
        let suffix = self
            .papers
            .first()
            .and_then(|p| non_empty(&p.paper_id).or_else(|| non_empty(&p.title)))
            .unwrap_or("related-papers");
        format!("related-papers-{}", sanitize_file_stem(suffix))
    }
}
