//! Manifest file source
//!
//! The manifest is a JSON document of the form `{"items": [...]}` where
//! each item is one record object.

use std::path::{Path, PathBuf};

use async_trait::async_trait;
use serde_json::Value;
use tracing::{debug, info, warn};

use super::RecordSource;
use crate::{DataError, Record};

/// Record source backed by a manifest JSON file.
pub struct ManifestSource {
    path: PathBuf,
}

impl ManifestSource {
    /// Create a source for the given manifest path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Path of the backing file.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[async_trait]
impl RecordSource for ManifestSource {
    async fn load(&self) -> Result<Vec<Record>, DataError> {
        let text = tokio::fs::read_to_string(&self.path).await?;
        let records = parse_manifest(&text)?;
        info!(
            source = self.source_name(),
            records = records.len(),
            "manifest loaded"
        );
        Ok(records)
    }

    fn source_name(&self) -> &str {
        self.path
            .file_name()
            .and_then(|name| name.to_str())
            .unwrap_or("manifest.json")
    }
}

/// Parse a manifest document into records.
///
/// A document without an `items` array is treated as empty, not as an
/// error; only syntactically invalid JSON fails. Items that are not
/// objects are skipped.
pub fn parse_manifest(text: &str) -> Result<Vec<Record>, DataError> {
    let document: Value = serde_json::from_str(text)?;

    let Some(items) = document.get("items").and_then(Value::as_array) else {
        warn!("manifest has no items array, treating as empty");
        return Ok(Vec::new());
    };

    let records: Vec<Record> = items
        .iter()
        .filter_map(|item| Record::from_value(item.clone()))
        .collect();

    let skipped = items.len() - records.len();
    if skipped > 0 {
        debug!(skipped, "skipped non-object manifest items");
    }

    Ok(records)
}
