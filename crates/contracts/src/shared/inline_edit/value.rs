use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Flat string-keyed record edited by the nested-object and list renderers.
pub type Record = BTreeMap<String, String>;

/// Committed or working value of a scalar field.
///
/// `Empty` is the "no value" state (`null` on the wire). It is kept apart from
/// `Bool(false)` so a checkbox with no answer never displays as "No".
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ScalarValue {
    #[default]
    Empty,
    Bool(bool),
    Number(f64),
    Text(String),
}

impl ScalarValue {
    pub fn text(value: impl Into<String>) -> Self {
        Self::Text(value.into())
    }

    pub fn from_option(value: Option<String>) -> Self {
        value.map(Self::Text).unwrap_or_default()
    }

    /// True for `Empty` and for whitespace-only text.
    pub fn is_blank(&self) -> bool {
        match self {
            Self::Empty => true,
            Self::Text(s) => s.trim().is_empty(),
            Self::Bool(_) | Self::Number(_) => false,
        }
    }

    /// String bound to an `<input>` while editing.
    pub fn as_text(&self) -> String {
        match self {
            Self::Empty => String::new(),
            Self::Bool(b) => b.to_string(),
            Self::Number(n) => n.to_string(),
            Self::Text(s) => s.clone(),
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Text value with blank collapsed to `None`, the shape DTOs store.
    pub fn to_option(&self) -> Option<String> {
        if self.is_blank() {
            None
        } else {
            Some(self.as_text())
        }
    }
}

/// Value of any field shape handled by the renderers.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    Scalar(ScalarValue),
    Record(Record),
    Records(Vec<Record>),
    Strings(Vec<String>),
}

impl FieldValue {
    pub fn shape(&self) -> &'static str {
        match self {
            Self::Scalar(_) => "scalar",
            Self::Record(_) => "record",
            Self::Records(_) => "records",
            Self::Strings(_) => "strings",
        }
    }

    pub fn as_scalar(&self) -> Option<&ScalarValue> {
        match self {
            Self::Scalar(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_record(&self) -> Option<&Record> {
        match self {
            Self::Record(r) => Some(r),
            _ => None,
        }
    }

    pub fn as_records(&self) -> Option<&[Record]> {
        match self {
            Self::Records(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_strings(&self) -> Option<&[String]> {
        match self {
            Self::Strings(items) => Some(items),
            _ => None,
        }
    }

    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or(serde_json::Value::Null)
    }
}

impl From<ScalarValue> for FieldValue {
    fn from(value: ScalarValue) -> Self {
        Self::Scalar(value)
    }
}

impl From<Record> for FieldValue {
    fn from(value: Record) -> Self {
        Self::Record(value)
    }
}

impl From<Vec<Record>> for FieldValue {
    fn from(value: Vec<Record>) -> Self {
        Self::Records(value)
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(value: Vec<String>) -> Self {
        Self::Strings(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_blank_covers_empty_and_whitespace() {
        assert!(ScalarValue::Empty.is_blank());
        assert!(ScalarValue::text("  ").is_blank());
        assert!(!ScalarValue::Bool(false).is_blank());
        assert!(!ScalarValue::Number(0.0).is_blank());
    }

    #[test]
    fn test_scalar_wire_shape() {
        assert_eq!(serde_json::to_value(ScalarValue::Empty).unwrap(), json!(null));
        assert_eq!(serde_json::to_value(ScalarValue::Bool(true)).unwrap(), json!(true));
        let parsed: ScalarValue = serde_json::from_value(json!("Ana")).unwrap();
        assert_eq!(parsed, ScalarValue::text("Ana"));
        let parsed: ScalarValue = serde_json::from_value(json!(null)).unwrap();
        assert_eq!(parsed, ScalarValue::Empty);
    }

    #[test]
    fn test_field_value_serializes_without_tags() {
        let mut address = Record::new();
        address.insert("city".into(), "Sevilla".into());
        let value = FieldValue::Record(address);
        assert_eq!(value.to_json(), json!({ "city": "Sevilla" }));

        let tags = FieldValue::Strings(vec!["late checkout".into()]);
        assert_eq!(tags.to_json(), json!(["late checkout"]));
    }

    #[test]
    fn test_to_option_collapses_blank() {
        assert_eq!(ScalarValue::text("").to_option(), None);
        assert_eq!(ScalarValue::text("x").to_option(), Some("x".to_string()));
    }
}
