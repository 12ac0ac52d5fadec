//! Core query-state management for the table explorer
//!
//! This crate provides the interactive query parameters and the
//! transition table that maps user actions onto them. It knows nothing
//! about records, rendering, or where the actions come from.

pub mod actions;
pub mod state;

// Re-export commonly used types
pub use actions::QueryAction;
pub use state::QueryState;
