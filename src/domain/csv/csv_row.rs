// ============================================================
// CSV ROW TYPES
// ============================================================
// Ordered column-name -> value mapping handed to the CSV writer

use serde::ser::SerializeMap;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map as JsonMap, Value as JsonValue};

use super::CsvValue;
use crate::domain::error::AppError;

/// A single export row.
///
/// Columns keep insertion order. Re-inserting a column replaces its value
/// without moving it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(from = "JsonMap<String, JsonValue>")]
pub struct CsvRow {
    cells: Vec<(String, CsvValue)>,
}

impl CsvRow {
    /// Create an empty row
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, key: impl Into<String>, value: impl Into<CsvValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Insert or replace a column, returning the previous value if any
    pub fn insert(
        &mut self,
        key: impl Into<String>,
        value: impl Into<CsvValue>,
    ) -> Option<CsvValue> {
        let key = key.into();
        let value = value.into();

        match self.cells.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => Some(std::mem::replace(existing, value)),
            None => {
                self.cells.push((key, value));
                None
            }
        }
    }

    pub fn get(&self, key: &str) -> Option<&CsvValue> {
        self.cells.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    /// Column names in insertion order
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.cells.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CsvValue)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v))
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Build a row from a JSON object, keeping the object's key order
    pub fn from_json_object(object: &JsonMap<String, JsonValue>) -> Self {
        object
            .iter()
            .map(|(k, v)| (k.clone(), CsvValue::from(v)))
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for CsvRow
where
    K: Into<String>,
    V: Into<CsvValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = CsvRow::new();
        for (k, v) in iter {
            row.insert(k, v);
        }
        row
    }
}

impl From<JsonMap<String, JsonValue>> for CsvRow {
    fn from(object: JsonMap<String, JsonValue>) -> Self {
        CsvRow::from_json_object(&object)
    }
}

impl TryFrom<&JsonValue> for CsvRow {
    type Error = AppError;

    fn try_from(value: &JsonValue) -> Result<Self, Self::Error> {
        match value {
            JsonValue::Object(object) => Ok(CsvRow::from_json_object(object)),
            other => Err(AppError::ValidationError(format!(
                "CSV row must be a JSON object, got {}",
                other
            ))),
        }
    }
}

impl Serialize for CsvRow {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.cells.len()))?;
        for (k, v) in &self.cells {
            map.serialize_entry(k, v)?;
        }
        map.end()
    }
}
