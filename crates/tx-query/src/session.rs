//! Table session
//!
//! The one mutable owner of the loaded collection and the query state.
//! The view layer dispatches user actions into the session and renders
//! the snapshot it gets back; all recomputation happens synchronously
//! inside those two calls.

use tracing::{debug, info};

use tx_core::{QueryAction, QueryState};
use tx_data::{manifest_columns, ColumnRegistry, Record};

use crate::facets;
use crate::filter;
use crate::pagination::{self, Pager};

/// A loaded collection plus the live query state.
pub struct TableSession {
    records: Vec<Record>,
    columns: ColumnRegistry,
    state: QueryState,
    category_options: Vec<String>,
    topic_options: Vec<String>,
}

/// Everything the view layer needs to render the table.
#[derive(Debug, Clone)]
pub struct TableSnapshot {
    /// The current page of matching records.
    pub rows: Vec<Record>,
    /// The same page projected to cell texts, in column order.
    pub cells: Vec<Vec<String>>,
    /// Pager metadata for the filtered result.
    pub pager: Pager,
    /// Search error message; empty when the pattern is fine.
    pub error: String,
    /// Selectable categories.
    pub category_options: Vec<String>,
    /// Selectable topics under the current category.
    pub topic_options: Vec<String>,
}

impl TableSession {
    /// Create an empty session over the given columns.
    pub fn new(columns: ColumnRegistry) -> Self {
        Self {
            records: Vec::new(),
            columns,
            state: QueryState::new(),
            category_options: Vec::new(),
            topic_options: Vec::new(),
        }
    }

    /// Create an empty session with the manifest column set.
    pub fn with_manifest_columns() -> Self {
        Self::new(manifest_columns())
    }

    /// Replace the collection, usually right after the one-time load.
    ///
    /// Rebuilds both facet option sets and revalidates the topic
    /// selection against the new data.
    pub fn load(&mut self, records: Vec<Record>) {
        self.records = records;
        self.category_options = facets::category_options(&self.records);
        self.rebuild_topic_options();
        info!(records = self.records.len(), "collection loaded");
    }

    /// Apply one user action.
    ///
    /// A category change also recomputes the topic options and clears
    /// the topic filter when the selection is no longer offered.
    pub fn dispatch(&mut self, action: QueryAction) {
        let category_changed = matches!(action, QueryAction::SetCategory(_));
        debug!(?action, "dispatch");
        self.state.apply(action);
        if category_changed {
            self.rebuild_topic_options();
        }
    }

    /// Run the filter chain and pagination for the current state.
    pub fn snapshot(&self) -> TableSnapshot {
        let outcome = filter::evaluate(&self.records, &self.columns, &self.state);
        let error = outcome
            .error
            .map(|error| error.to_string())
            .unwrap_or_default();

        let page = pagination::paginate(&outcome.rows, self.state.page, self.state.page_size);
        let cells = page
            .rows
            .iter()
            .map(|record| self.columns.project_row(record))
            .collect();

        TableSnapshot {
            rows: page.rows,
            cells,
            pager: page.pager,
            error,
            category_options: self.category_options.clone(),
            topic_options: self.topic_options.clone(),
        }
    }

    pub fn state(&self) -> &QueryState {
        &self.state
    }

    pub fn columns(&self) -> &ColumnRegistry {
        &self.columns
    }

    pub fn record_count(&self) -> usize {
        self.records.len()
    }

    fn rebuild_topic_options(&mut self) {
        let topics =
            facets::topic_options(&self.records, &self.state.category, &self.state.topic);
        if topics.clear_selection {
            debug!(topic = %self.state.topic, "topic no longer offered, clearing selection");
            self.state.topic.clear();
        }
        self.topic_options = topics.options;
    }
}
