//! Interactive query state

use serde::{Deserialize, Serialize};

/// Default number of rows per page.
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// The interactive query parameters for the table.
///
/// There is exactly one live value of this per table; the view layer owns
/// it and mutates it only through [`crate::QueryAction`]s. Everything
/// downstream (filtering, pagination) is a pure function of this state
/// plus the loaded collection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryState {
    /// Requested page, 1-based. May exceed the page count; pagination
    /// clamps it.
    pub page: usize,

    /// Rows per page, always > 0.
    pub page_size: usize,

    /// Committed search pattern. Applied by the filter chain.
    pub pattern: String,

    /// Search text as typed so far. Copied into `pattern` on commit;
    /// keystrokes alone never trigger a search.
    pub staged_pattern: String,

    /// Exact-match topic filter; empty means "all topics".
    pub topic: String,

    /// Exact-match category filter; empty means "all categories".
    pub category: String,
}

impl Default for QueryState {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_PAGE_SIZE,
            pattern: String::new(),
            staged_pattern: String::new(),
            topic: String::new(),
            category: String::new(),
        }
    }
}

impl QueryState {
    /// Create the initial state.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = QueryState::new();
        assert_eq!(state.page, 1);
        assert_eq!(state.page_size, DEFAULT_PAGE_SIZE);
        assert!(state.pattern.is_empty());
        assert!(state.staged_pattern.is_empty());
        assert!(state.topic.is_empty());
        assert!(state.category.is_empty());
    }
}
