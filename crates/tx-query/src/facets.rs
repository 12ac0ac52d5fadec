//! Facet option sets
//!
//! Categories and topics are the two selectable filter dimensions. Both
//! option sets are distinct, non-empty values sorted ascending; the
//! topic set is additionally restricted to the records of the selected
//! category, and a topic selection that disappears from the recomputed
//! set must be cleared.

use ahash::AHashSet;

use tx_data::Record;

/// Recomputed topic options plus the revalidation verdict for the
/// current selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopicOptions {
    /// Distinct non-empty topics, sorted ascending.
    pub options: Vec<String>,
    /// True when the current topic selection is no longer offered and
    /// the topic filter should be reset to empty.
    pub clear_selection: bool,
}

/// Distinct non-empty categories across all records, sorted ascending.
pub fn category_options(records: &[Record]) -> Vec<String> {
    sorted_distinct(records.iter().map(Record::category))
}

/// Topic options for the given category selection (all records when the
/// category is empty), revalidating the current topic selection.
pub fn topic_options(records: &[Record], category: &str, current_topic: &str) -> TopicOptions {
    let options = sorted_distinct(
        records
            .iter()
            .filter(|record| category.is_empty() || record.category() == category)
            .map(Record::topic),
    );

    let clear_selection =
        !current_topic.is_empty() && !options.iter().any(|topic| topic == current_topic);

    TopicOptions {
        options,
        clear_selection,
    }
}

fn sorted_distinct(values: impl Iterator<Item = String>) -> Vec<String> {
    let mut seen = AHashSet::new();
    let mut options: Vec<String> = values
        .filter(|value| !value.is_empty())
        .filter(|value| seen.insert(value.clone()))
        .collect();
    options.sort();
    options
}
