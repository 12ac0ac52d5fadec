//! The tabular query engine
//!
//! Takes the in-memory collection plus the interactive query state and
//! deterministically produces the matching rows, one bounded page of
//! them, and the pagination metadata. The pipeline is pure: raw records
//! flow through the filter chain, then the pagination calculator, and
//! the view layer renders the resulting snapshot.

pub mod facets;
pub mod filter;
pub mod pagination;
pub mod search;
pub mod session;

// Re-export commonly used types
pub use facets::{category_options, topic_options, TopicOptions};
pub use filter::{evaluate, FilterOutcome};
pub use pagination::{paginate, Page, Pager, PAGE_WINDOW};
pub use search::{compile_pattern, PatternError};
pub use session::{TableSession, TableSnapshot};
