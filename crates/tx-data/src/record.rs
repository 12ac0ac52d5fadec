//! Open, schema-flexible records
//!
//! A record is one row of the loaded dataset. The field set is open:
//! values may be primitives, nested objects, or lists of objects (the
//! `sources` list, for instance). Records are immutable for the life of
//! the session and every accessor is total -- a missing or null field
//! reads as the empty string, never an error.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Field holding a record's category.
pub const CATEGORY_FIELD: &str = "categoria";

/// Fields holding a record's topic, first non-empty wins.
///
/// The dataset carries both names across schema versions, so the
/// fallback is preserved rather than picking one as canonical.
pub const TOPIC_FIELDS: [&str; 2] = ["nombre_topico", "topico"];

/// One row of the loaded dataset.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record(Map<String, Value>);

impl Record {
    /// Build a record from a JSON value. Only objects qualify.
    pub fn from_value(value: Value) -> Option<Self> {
        match value {
            Value::Object(map) => Some(Self(map)),
            _ => None,
        }
    }

    /// Raw field access.
    pub fn get(&self, field: &str) -> Option<&Value> {
        self.0.get(field)
    }

    /// Display text of a field. Missing and null fields read as `""`.
    pub fn text(&self, field: &str) -> String {
        self.0.get(field).map(text_of).unwrap_or_default()
    }

    /// The record's category, possibly empty.
    pub fn category(&self) -> String {
        self.text(CATEGORY_FIELD)
    }

    /// The record's topic: first non-empty of [`TOPIC_FIELDS`].
    pub fn topic(&self) -> String {
        TOPIC_FIELDS
            .iter()
            .map(|field| self.text(field))
            .find(|topic| !topic.is_empty())
            .unwrap_or_default()
    }
}

/// Display text of a JSON value.
///
/// Strings render without quoting; nested objects and arrays render as
/// canonical JSON so search can still match inside them; null renders
/// as the empty string.
pub fn text_of(value: &Value) -> String {
    match value {
        Value::Null => String::new(),
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}
