use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Progress of one analysis section as reported upstream
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase", from = "Option<String>")]
pub enum SectionStatus {
    Pending,
    Processing,
    Complete,
    Error,
}

impl Default for SectionStatus {
    fn default() -> Self {
        Self::Pending
    }
}

impl SectionStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionStatus::Pending => "pending",
            SectionStatus::Processing => "processing",
            SectionStatus::Complete => "complete",
            SectionStatus::Error => "error",
        }
    }
}

// Unknown statuses are treated as not started yet
impl From<&str> for SectionStatus {
    fn from(value: &str) -> Self {
        match value.trim().to_ascii_lowercase().as_str() {
            "processing" => SectionStatus::Processing,
            "complete" => SectionStatus::Complete,
            "error" => SectionStatus::Error,
            _ => SectionStatus::Pending,
        }
    }
}

impl From<String> for SectionStatus {
    fn from(value: String) -> Self {
        SectionStatus::from(value.as_str())
    }
}

// Upstream sends `null` for sections that have not started
impl From<Option<String>> for SectionStatus {
    fn from(value: Option<String>) -> Self {
        value.map(SectionStatus::from).unwrap_or_default()
    }
}

impl fmt::Display for SectionStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-section entry of the upstream status object
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ComponentStatus {
    #[serde(default)]
    pub status: SectionStatus,
    #[serde(default)]
    pub error_message: Option<String>,
}

impl ComponentStatus {
    pub fn new(status: SectionStatus) -> Self {
        Self {
            status,
            error_message: None,
        }
    }

    pub fn failed(message: impl Into<String>) -> Self {
        Self {
            status: SectionStatus::Error,
            error_message: Some(message.into()),
        }
    }

    /// Error message, with empty strings treated as absent
    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref().filter(|m| !m.is_empty())
    }
}

/// Upstream analysis status, keyed by section
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisStatusResponse {
    #[serde(default)]
    pub components: HashMap<String, ComponentStatus>,
}

impl AnalysisStatusResponse {
    pub fn with_component(mut self, kind: SectionKind, status: ComponentStatus) -> Self {
        self.components.insert(kind.status_key().to_string(), status);
        self
    }

    pub fn component(&self, kind: SectionKind) -> Option<&ComponentStatus> {
        self.components.get(kind.status_key())
    }
}

/// The report sections that have a display component
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum SectionKind {
    ComparisonAxes,
    RelatedPapers,
    RelatedTechnologies,
}

impl SectionKind {
    /// Key of this section in `AnalysisStatusResponse::components`
    pub fn status_key(&self) -> &'static str {
        match self {
            SectionKind::ComparisonAxes => "comparisonAxes",
            SectionKind::RelatedPapers => "relatedPapers",
            SectionKind::RelatedTechnologies => "relatedTechnologies",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionKind::ComparisonAxes => "Comparison Axes",
            SectionKind::RelatedPapers => "Related Papers",
            SectionKind::RelatedTechnologies => "Related Technologies",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            SectionKind::ComparisonAxes => "Detailed analysis of comparison axes",
            SectionKind::RelatedPapers => "Review relevant academic papers and research",
            SectionKind::RelatedTechnologies => "Explore patents and similar technologies",
        }
    }

    pub fn icon(&self) -> Icon {
        match self {
            SectionKind::ComparisonAxes => Icon::Scale,
            SectionKind::RelatedPapers => Icon::FileText,
            SectionKind::RelatedTechnologies => Icon::Cpu,
        }
    }

    /// Page anchor of the rendered section
    pub fn anchor_id(&self) -> &'static str {
        match self {
            SectionKind::ComparisonAxes => "comparison-axes",
            SectionKind::RelatedPapers => "papers",
            SectionKind::RelatedTechnologies => "related-technologies",
        }
    }
}

/// Icon token; the UI maps it to an actual glyph
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum Icon {
    Scale,
    FileText,
    Cpu,
    Award,
}

// ============================================================
// RENDERED VIEWS
// ============================================================

/// What a section component renders to
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "view", rename_all = "camelCase")]
pub enum SectionView {
    Full(FullSectionView),
    Placeholder(SectionSkeleton),
}

impl SectionView {
    pub fn is_full(&self) -> bool {
        matches!(self, SectionView::Full(_))
    }

    pub fn title(&self) -> &str {
        match self {
            SectionView::Full(view) => &view.title,
            SectionView::Placeholder(skeleton) => &skeleton.title,
        }
    }
}

/// Loading / error stand-in for a section that cannot be shown yet
#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct SectionSkeleton {
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub status: SectionStatus,
    pub error_message: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct FullSectionView {
    pub anchor_id: String,
    pub title: String,
    pub description: String,
    pub icon: Icon,
    pub export_enabled: bool,
    pub caption: Option<String>,
    pub body: SectionBody,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(tag = "kind", content = "content", rename_all = "camelCase")]
pub enum SectionBody {
    Table {
        columns: Vec<String>,
        rows: Vec<Vec<String>>,
    },
    Cards(Vec<RecordCard>),
    Empty(String),
}

/// One record rendered as a card (papers, patents)
#[derive(Debug, Serialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RecordCard {
    pub key: String,
    pub title: String,
    pub badges: Vec<String>,
    pub abstract_preview: Option<String>,
    pub details: Vec<CardDetail>,
    pub link: Option<CardLink>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardDetail {
    pub label: String,
    pub value: String,
    pub icon: Option<Icon>,
}

impl CardDetail {
    pub fn new(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            value: value.into(),
            icon: None,
        }
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CardLink {
    pub label: String,
    pub href: String,
}
