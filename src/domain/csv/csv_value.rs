// ============================================================
// CSV VALUE
// ============================================================
// A single scalar cell as handed over by the UI layer

use serde::{Deserialize, Serialize};
use serde_json::Value as JsonValue;

/// Scalar value stored in a CSV cell.
///
/// `Null` stands for both "null" and "absent"; it always exports as an empty
/// cell.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CsvValue {
    Null,
    Bool(bool),
    Integer(i64),
    Float(f64),
    Text(String),
}

impl CsvValue {
    /// Text form of the value, `None` for `Null`.
    ///
    /// Numbers print the way the UI prints them: integral floats drop the
    /// fractional part and infinities are spelled out.
    pub fn to_text(&self) -> Option<String> {
        match self {
            CsvValue::Null => None,
            CsvValue::Bool(b) => Some(b.to_string()),
            CsvValue::Integer(i) => Some(i.to_string()),
            CsvValue::Float(f) => Some(format_float(*f)),
            CsvValue::Text(s) => Some(s.clone()),
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, CsvValue::Null)
    }
}

fn format_float(value: f64) -> String {
    if value.is_nan() {
        "NaN".to_string()
    } else if value.is_infinite() {
        if value.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if value == 0.0 {
        // -0.0 prints as "0" too
        "0".to_string()
    } else if value.abs() >= 1e21 || value.abs() < 1e-6 {
        exponent_text(value)
    } else {
        value.to_string()
    }
}

// Shortest mantissa with a signed exponent: 1e21 -> "1e+21", 1.5e-7 -> "1.5e-7"
fn exponent_text(value: f64) -> String {
    let text = format!("{value:e}");
    match text.split_once('e') {
        Some((mantissa, exponent)) if !exponent.starts_with('-') => {
            format!("{mantissa}e+{exponent}")
        }
        _ => text,
    }
}

impl Default for CsvValue {
    fn default() -> Self {
        CsvValue::Null
    }
}

impl From<&str> for CsvValue {
    fn from(value: &str) -> Self {
        CsvValue::Text(value.to_string())
    }
}

impl From<String> for CsvValue {
    fn from(value: String) -> Self {
        CsvValue::Text(value)
    }
}

impl From<&String> for CsvValue {
    fn from(value: &String) -> Self {
        CsvValue::Text(value.clone())
    }
}

impl From<bool> for CsvValue {
    fn from(value: bool) -> Self {
        CsvValue::Bool(value)
    }
}

impl From<i32> for CsvValue {
    fn from(value: i32) -> Self {
        CsvValue::Integer(value as i64)
    }
}

impl From<u32> for CsvValue {
    fn from(value: u32) -> Self {
        CsvValue::Integer(value as i64)
    }
}

impl From<i64> for CsvValue {
    fn from(value: i64) -> Self {
        CsvValue::Integer(value)
    }
}

impl From<u64> for CsvValue {
    fn from(value: u64) -> Self {
        match i64::try_from(value) {
            Ok(v) => CsvValue::Integer(v),
            Err(_) => CsvValue::Float(value as f64),
        }
    }
}

impl From<usize> for CsvValue {
    fn from(value: usize) -> Self {
        CsvValue::from(value as u64)
    }
}

impl From<f32> for CsvValue {
    fn from(value: f32) -> Self {
        CsvValue::Float(value as f64)
    }
}

impl From<f64> for CsvValue {
    fn from(value: f64) -> Self {
        CsvValue::Float(value)
    }
}

impl<T: Into<CsvValue>> From<Option<T>> for CsvValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(CsvValue::Null)
    }
}

impl From<&JsonValue> for CsvValue {
    fn from(value: &JsonValue) -> Self {
        match value {
            JsonValue::Null => CsvValue::Null,
            JsonValue::Bool(b) => CsvValue::Bool(*b),
            JsonValue::Number(n) => match n.as_i64() {
                Some(i) => CsvValue::Integer(i),
                None => CsvValue::Float(n.as_f64().unwrap_or(f64::NAN)),
            },
            JsonValue::String(s) => CsvValue::Text(s.clone()),
            // Nested structures export as their compact JSON text
            other => CsvValue::Text(other.to_string()),
        }
    }
}

impl From<JsonValue> for CsvValue {
    fn from(value: JsonValue) -> Self {
        CsvValue::from(&value)
    }
}
