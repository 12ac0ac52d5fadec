//! Column projection registry
//!
//! An ordered list of named extraction rules, each mapping a record to
//! its display text for one column. The same projection feeds both cell
//! rendering and search matching, so what is shown is exactly what can
//! be searched. Projections are total: unresolvable fields and unknown
//! column names project to the empty string.

use indexmap::IndexMap;
use serde_json::Value;

use crate::record::{text_of, Record};

/// A single column: header label plus its text projection.
pub struct Column {
    label: String,
    extract: Box<dyn Fn(&Record) -> String + Send + Sync>,
}

impl Column {
    /// Create a column from an arbitrary projection function.
    pub fn new(
        label: impl Into<String>,
        extract: impl Fn(&Record) -> String + Send + Sync + 'static,
    ) -> Self {
        Self {
            label: label.into(),
            extract: Box::new(extract),
        }
    }

    /// Create a column that projects a single field as text.
    pub fn field(label: impl Into<String>, field: &'static str) -> Self {
        Self::new(label, move |record| record.text(field))
    }

    /// Header label.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Project a record to this column's text.
    pub fn text(&self, record: &Record) -> String {
        (self.extract)(record)
    }
}

/// Ordered, name-addressable set of columns.
///
/// Order determines render order; search treats the columns as an
/// unordered "any column matches" set.
#[derive(Default)]
pub struct ColumnRegistry {
    columns: IndexMap<String, Column>,
}

impl ColumnRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column. Re-using a name replaces the earlier column.
    pub fn push(&mut self, name: impl Into<String>, column: Column) {
        self.columns.insert(name.into(), column);
    }

    /// Project a record to one column's text; `""` for unknown columns.
    pub fn project(&self, record: &Record, name: &str) -> String {
        self.columns
            .get(name)
            .map(|column| column.text(record))
            .unwrap_or_default()
    }

    /// Project a record to its ordered cell texts.
    pub fn project_row(&self, record: &Record) -> Vec<String> {
        self.columns
            .values()
            .map(|column| column.text(record))
            .collect()
    }

    /// Iterate columns in render order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Column)> {
        self.columns.iter().map(|(name, column)| (name.as_str(), column))
    }

    /// Header labels in render order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.columns.values().map(Column::label)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }
}

/// First non-empty `webpage` entry among a record's sources.
///
/// `sources` may be a list of source objects, a single object, or
/// absent; anything else projects to the empty string.
fn first_webpage(sources: &Value) -> String {
    match sources {
        Value::Array(entries) => entries
            .iter()
            .filter_map(|entry| entry.get("webpage"))
            .map(text_of)
            .find(|url| !url.is_empty())
            .unwrap_or_default(),
        Value::Object(map) => map.get("webpage").map(text_of).unwrap_or_default(),
        _ => String::new(),
    }
}

/// The fixed column set of the chart manifest table.
pub fn manifest_columns() -> ColumnRegistry {
    let mut registry = ColumnRegistry::new();
    registry.push("categoria", Column::field("Categoría", "categoria"));
    registry.push("topico", Column::field("Tópico", "nombre_topico"));
    registry.push("titulo", Column::field("Título gráfico", "titulo"));
    registry.push("bajada", Column::field("Sub-título", "bajada"));
    registry.push(
        "webpage",
        Column::new("URL gráfico", |record| {
            record.get("sources").map(first_webpage).unwrap_or_default()
        }),
    );
    registry.push("dataset", Column::field("Dataset", "nombre_archivo"));
    registry.push("fuente", Column::field("Fuente", "fuente"));
    registry.push("nota", Column::field("Nota", "nota"));
    registry
}
