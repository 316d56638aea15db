//! Puzzle definition error types.

use thiserror::Error;

/// Errors that can occur when loading or validating a puzzle definition.
#[derive(Debug, Error)]
pub enum PuzzleError {
    /// The definition text was not valid JSON for the puzzle shape.
    #[error("puzzle definition is not valid JSON: {0}")]
    Malformed(#[from] serde_json::Error),

    /// A state carries the wrong number of substates. The transition model
    /// supports exactly two.
    #[error("{which} state has {count} substates; exactly two are required")]
    NotBinary { which: &'static str, count: usize },

    /// The facilitator does not appear anywhere in the start state.
    #[error("facilitator '{facilitator}' does not appear in the start state")]
    FacilitatorAbsent { facilitator: String },
}
