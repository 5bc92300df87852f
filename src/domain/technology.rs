use serde::de::{self, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

// Records arrive from the analysis API in camelCase; the snake_case aliases
// accept payloads taken straight from the backend schemas.

fn default_weight() -> f64 {
    1.0
}

// The backend sends integer ids, the analysis API sends strings
fn deserialize_record_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match JsonValue::deserialize(deserializer)? {
        JsonValue::String(id) => Ok(id),
        JsonValue::Number(id) => Ok(id.to_string()),
        other => Err(de::Error::custom(format!(
            "invalid record id {other}, expected a string or number"
        ))),
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonAxis {
    pub id: i64,
    #[serde(alias = "axis_name")]
    pub axis_name: String,
    pub extreme1: String,
    pub extreme2: String,
    #[serde(default = "default_weight")]
    pub weight: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelatedPaper {
    #[serde(deserialize_with = "deserialize_record_id")]
    pub id: String,
    #[serde(alias = "paper_id", default)]
    pub paper_id: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(alias = "publication_date", default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub authors: Option<String>,
    #[serde(default)]
    pub journal: Option<String>,
    #[serde(alias = "citation_count", default)]
    pub citation_count: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Default)]
#[serde(rename_all = "camelCase")]
pub struct RelatedTechnology {
    #[serde(deserialize_with = "deserialize_record_id")]
    pub id: String,
    pub name: String,
    #[serde(rename = "abstract", default)]
    pub abstract_text: Option<String>,
    #[serde(alias = "document_id", default)]
    pub document_id: Option<String>,
    #[serde(rename = "type", default)]
    pub kind: Option<String>,
    #[serde(default)]
    pub cluster: Option<i64>,
    #[serde(default)]
    pub url: Option<String>,
    #[serde(alias = "publication_date", default)]
    pub publication_date: Option<String>,
    #[serde(default)]
    pub inventors: Option<String>,
    #[serde(default)]
    pub assignees: Option<String>,
}

/// Returns the string if it is present and non-empty
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_weight_defaults_to_one() {
        let axis: ComparisonAxis = serde_json::from_str(
            r#"{"id": 1, "axisName": "Cost", "extreme1": "Cheap", "extreme2": "Expensive"}"#,
        )
        .unwrap();
        assert_eq!(axis.weight, 1.0);
        assert_eq!(axis.axis_name, "Cost");
    }

    #[test]
    fn test_paper_accepts_backend_field_names() {
        let paper: RelatedPaper = serde_json::from_str(
            r#"{
                "id": "7",
                "paper_id": "abc123",
                "title": "Solid-state batteries",
                "abstract": "We study...",
                "publication_date": "2021-04-01",
                "citation_count": 12
            }"#,
        )
        .unwrap();

        assert_eq!(paper.paper_id.as_deref(), Some("abc123"));
        assert_eq!(paper.abstract_text.as_deref(), Some("We study..."));
        assert_eq!(paper.citation_count, Some(12));
        assert_eq!(paper.journal, None);
    }

    #[test]
    fn test_technology_type_field() {
        let tech: RelatedTechnology = serde_json::from_str(
            r#"{"id": "3", "name": "Widget", "type": "patent", "documentId": "US123"}"#,
        )
        .unwrap();
        assert_eq!(tech.kind.as_deref(), Some("patent"));
        assert_eq!(tech.document_id.as_deref(), Some("US123"));
    }

    #[test]
    fn test_integer_ids_from_backend() {
        let paper: RelatedPaper =
            serde_json::from_str(r#"{"id": 7, "paper_id": "abc", "title": "T"}"#).unwrap();
        assert_eq!(paper.id, "7");
        assert_eq!(paper.paper_id.as_deref(), Some("abc"));

        let tech: RelatedTechnology =
            serde_json::from_str(r#"{"id": 3, "name": "Widget"}"#).unwrap();
        assert_eq!(tech.id, "3");
    }

    #[test]
    fn test_rejects_non_scalar_id() {
        let result = serde_json::from_str::<RelatedPaper>(r#"{"id": null, "title": "T"}"#);
        assert!(result.is_err());

        let result = serde_json::from_str::<RelatedTechnology>(r#"{"id": [1], "name": "W"}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_non_empty_filters_blank() {
        assert_eq!(non_empty(&Some(String::new())), None);
        assert_eq!(non_empty(&Some("x".to_string())), Some("x"));
        assert_eq!(non_empty(&None), None);
    }
}
