//! Record loading and column projection for the table explorer

pub mod columns;
pub mod record;
pub mod sources;

use thiserror::Error;

// Re-exports
pub use columns::{manifest_columns, Column, ColumnRegistry};
pub use record::Record;
pub use sources::{ManifestSource, RecordSource};

/// Errors that can occur while loading records.
///
/// Callers that want degrade-to-empty behavior go through
/// [`sources::load_or_empty`] instead of handling these directly.
#[derive(Error, Debug)]
pub enum DataError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),
}
