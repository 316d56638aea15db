//! Typed search errors.
//!
//! `SearchError` covers fail-fast structural failures only. A search that
//! finds no path is not an error - it resolves to
//! [`SearchOutcome::Exhausted`](crate::search::SearchOutcome::Exhausted).

use crate::core::TransitionError;
use thiserror::Error;

/// Failures surfaced by search construction or execution.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SearchError {
    /// An unknown strategy name was given at construction time.
    #[error("search algorithm '{name}' is not supported (use 'depth-first' or 'breadth-first')")]
    UnsupportedAlgorithm { name: String },

    /// The state handed to transition generation was structurally unusable.
    #[error(transparent)]
    Transition(#[from] TransitionError),
}
