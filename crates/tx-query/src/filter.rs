//! Filter-chain evaluation
//!
//! Narrows the raw collection in three steps: category, then topic,
//! then the committed search pattern. Category and topic are exact,
//! case-sensitive matches; the pattern matches case-insensitively
//! against every column projection, keeping a record when any column
//! matches. Evaluation is pure and always starts from the full raw
//! collection.

use tracing::debug;

use tx_core::QueryState;
use tx_data::{ColumnRegistry, Record};

use crate::search::{compile_pattern, PatternError};

/// Result of one filter-chain evaluation.
#[derive(Debug, Clone, Default)]
pub struct FilterOutcome {
    /// Matching records, in collection order.
    pub rows: Vec<Record>,
    /// Set when the pattern failed to compile; `rows` is empty then, so
    /// a bad pattern never shows stale rows.
    pub error: Option<PatternError>,
}

/// Apply the category -> topic -> pattern chain to the collection.
pub fn evaluate(
    records: &[Record],
    columns: &ColumnRegistry,
    state: &QueryState,
) -> FilterOutcome {
    let mut rows: Vec<Record> = records
        .iter()
        .filter(|record| state.category.is_empty() || record.category() == state.category)
        .filter(|record| state.topic.is_empty() || record.topic() == state.topic)
        .cloned()
        .collect();

    // A whitespace-only pattern is no search at all.
    let pattern = state.pattern.trim();
    if pattern.is_empty() {
        return FilterOutcome { rows, error: None };
    }

    let matcher = match compile_pattern(pattern) {
        Ok(matcher) => matcher,
        Err(error) => {
            debug!(pattern, %error, "search pattern rejected");
            return FilterOutcome {
                rows: Vec::new(),
                error: Some(error),
            };
        }
    };

    rows.retain(|record| {
        columns
            .iter()
            .any(|(_, column)| matcher.is_match(&column.text(record)))
    });
    debug!(pattern, matched = rows.len(), "search applied");

    FilterOutcome { rows, error: None }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tx_data::manifest_columns;

    fn records() -> Vec<Record> {
        [
            json!({"categoria": "Salud", "nombre_topico": "Casos", "titulo": "Casos diarios"}),
            json!({"categoria": "Salud", "nombre_topico": "Camas", "titulo": "Camas UCI"}),
            json!({"categoria": "Movilidad", "topico": "Tránsito", "titulo": "Flujo vehicular"}),
            json!({"categoria": "Economía", "nombre_topico": "Empleo", "titulo": "Tasa de desempleo"}),
        ]
        .into_iter()
        .filter_map(Record::from_value)
        .collect()
    }

    fn state() -> QueryState {
        QueryState::new()
    }

    #[test]
    fn test_no_filters_returns_everything() {
        let outcome = evaluate(&records(), &manifest_columns(), &state());
        assert_eq!(outcome.rows.len(), 4);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_category_filter_is_exact() {
        let mut state = state();
        state.category = "Salud".to_string();

        let outcome = evaluate(&records(), &manifest_columns(), &state);
        assert_eq!(outcome.rows.len(), 2);

        // Exact match, not a substring or case-folded search.
        state.category = "salud".to_string();
        let outcome = evaluate(&records(), &manifest_columns(), &state);
        assert!(outcome.rows.is_empty());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_topic_filter_uses_field_fallback() {
        let mut state = state();
        state.topic = "Tránsito".to_string();

        // Matches through the legacy `topico` field.
        let outcome = evaluate(&records(), &manifest_columns(), &state);
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].category(), "Movilidad");
    }

    #[test]
    fn test_filters_cascade() {
        let mut state = state();
        state.category = "Salud".to_string();
        state.topic = "Empleo".to_string();

        // The topic exists, but not inside the selected category.
        let outcome = evaluate(&records(), &manifest_columns(), &state);
        assert!(outcome.rows.is_empty());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_whitespace_pattern_is_no_search() {
        let mut state = state();
        state.pattern = "   ".to_string();

        let outcome = evaluate(&records(), &manifest_columns(), &state);
        assert_eq!(outcome.rows.len(), 4);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_pattern_matches_any_column_case_insensitively() {
        let mut state = state();
        state.pattern = "uci".to_string();

        let outcome = evaluate(&records(), &manifest_columns(), &state);
        assert_eq!(outcome.rows.len(), 1);
        assert_eq!(outcome.rows[0].text("titulo"), "Camas UCI");

        // Matches in the category column, not just the title.
        state.pattern = "movilidad".to_string();
        let outcome = evaluate(&records(), &manifest_columns(), &state);
        assert_eq!(outcome.rows.len(), 1);
    }

    #[test]
    fn test_every_result_matches_and_every_excluded_does_not() {
        let mut state = state();
        state.pattern = "casos|camas".to_string();

        let all = records();
        let columns = manifest_columns();
        let outcome = evaluate(&all, &columns, &state);
        let matcher = compile_pattern(&state.pattern).unwrap();

        assert_eq!(outcome.rows.len(), 2);
        for record in &all {
            let matches_somewhere = columns
                .iter()
                .any(|(_, column)| matcher.is_match(&column.text(record)));
            assert_eq!(matches_somewhere, outcome.rows.contains(record));
        }
    }

    #[test]
    fn test_invalid_pattern_yields_empty_rows_and_error() {
        let mut state = state();
        state.pattern = "[".to_string();

        let outcome = evaluate(&records(), &manifest_columns(), &state);
        assert!(outcome.rows.is_empty());
        assert!(outcome.error.is_some());

        // Independent of the other filters.
        state.category = "Salud".to_string();
        state.topic = "Casos".to_string();
        let outcome = evaluate(&records(), &manifest_columns(), &state);
        assert!(outcome.rows.is_empty());
        assert!(outcome.error.is_some());
    }

    #[test]
    fn test_empty_collection() {
        let outcome = evaluate(&[], &manifest_columns(), &state());
        assert!(outcome.rows.is_empty());
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_evaluation_is_idempotent() {
        let mut state = state();
        state.category = "Salud".to_string();
        state.pattern = "casos".to_string();

        let all = records();
        let columns = manifest_columns();
        let first = evaluate(&all, &columns, &state);
        let second = evaluate(&all, &columns, &state);
        assert_eq!(first.rows, second.rows);
        assert_eq!(first.error, second.error);
    }
}
