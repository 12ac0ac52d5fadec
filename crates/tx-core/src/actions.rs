//! User actions and the state transition table
//!
//! Every way the user can change the query is one variant here, applied
//! by [`QueryState::apply`]. Keeping this a plain transition function
//! (instead of a pile of UI callbacks) makes the reset-to-page-1 rule
//! testable in isolation.

use crate::state::QueryState;

/// A user action that mutates the query state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QueryAction {
    /// Select a category, or clear the filter with an empty string.
    SetCategory(String),
    /// Select a topic, or clear the filter with an empty string.
    SetTopic(String),
    /// Buffer search text as typed. Does not run the search.
    StagePattern(String),
    /// Apply the staged search text (Enter key or search button).
    CommitSearch,
    /// Change the number of rows per page.
    SetPageSize(usize),
    /// Navigate to a page (pagination buttons).
    GotoPage(usize),
}

impl QueryState {
    /// Apply one action to the state.
    ///
    /// Every change that can alter the result set resets the page to 1;
    /// page navigation and keystroke buffering do not. Topic
    /// revalidation after a category change is the caller's job, since
    /// it needs the loaded collection.
    pub fn apply(&mut self, action: QueryAction) {
        match action {
            QueryAction::SetCategory(category) => {
                self.category = category;
                self.page = 1;
            }
            QueryAction::SetTopic(topic) => {
                self.topic = topic;
                self.page = 1;
            }
            QueryAction::StagePattern(pattern) => {
                self.staged_pattern = pattern;
            }
            QueryAction::CommitSearch => {
                self.pattern = self.staged_pattern.clone();
                self.page = 1;
            }
            QueryAction::SetPageSize(size) => {
                self.page_size = size.max(1);
                self.page = 1;
            }
            QueryAction::GotoPage(page) => {
                self.page = page.max(1);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_change_resets_page() {
        let mut state = QueryState::new();
        state.page = 7;

        state.apply(QueryAction::SetCategory("Salud".to_string()));

        assert_eq!(state.category, "Salud");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_topic_change_resets_page() {
        let mut state = QueryState::new();
        state.page = 3;

        state.apply(QueryAction::SetTopic("Vacunas".to_string()));

        assert_eq!(state.topic, "Vacunas");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_staging_does_not_commit_or_reset() {
        let mut state = QueryState::new();
        state.page = 4;

        state.apply(QueryAction::StagePattern("covid".to_string()));

        assert_eq!(state.staged_pattern, "covid");
        assert!(state.pattern.is_empty());
        assert_eq!(state.page, 4);
    }

    #[test]
    fn test_commit_applies_staged_pattern() {
        let mut state = QueryState::new();
        state.page = 4;
        state.apply(QueryAction::StagePattern("covid".to_string()));

        state.apply(QueryAction::CommitSearch);

        assert_eq!(state.pattern, "covid");
        assert_eq!(state.page, 1);
    }

    #[test]
    fn test_page_size_floors_at_one() {
        let mut state = QueryState::new();
        state.apply(QueryAction::SetPageSize(0));
        assert_eq!(state.page_size, 1);

        state.apply(QueryAction::SetPageSize(50));
        assert_eq!(state.page_size, 50);
    }

    #[test]
    fn test_goto_page_keeps_filters() {
        let mut state = QueryState::new();
        state.apply(QueryAction::SetCategory("Salud".to_string()));
        state.apply(QueryAction::GotoPage(5));

        assert_eq!(state.page, 5);
        assert_eq!(state.category, "Salud");

        state.apply(QueryAction::GotoPage(0));
        assert_eq!(state.page, 1);
    }
}
