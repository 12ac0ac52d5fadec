//! Record sources
//!
//! A source loads the full collection exactly once; everything after
//! the load works on the in-memory records.

mod manifest_source;

pub use manifest_source::{parse_manifest, ManifestSource};

use async_trait::async_trait;
use tracing::warn;

use crate::{DataError, Record};

/// Trait for record sources.
#[async_trait]
pub trait RecordSource: Send + Sync {
    /// Load the full collection.
    async fn load(&self) -> Result<Vec<Record>, DataError>;

    /// Name of the source for logs and messages.
    fn source_name(&self) -> &str;
}

/// Load a source, degrading any failure to an empty collection.
///
/// An unreachable or unparsable document renders as the normal empty
/// state rather than an error, so load failures never reach the user
/// as a fault.
pub async fn load_or_empty(source: &dyn RecordSource) -> Vec<Record> {
    match source.load().await {
        Ok(records) => records,
        Err(error) => {
            warn!(
                source = source.source_name(),
                %error,
                "load failed, continuing with an empty collection"
            );
            Vec::new()
        }
    }
}
