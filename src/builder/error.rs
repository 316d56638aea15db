//! Build errors for the puzzle builder.

use crate::puzzle::PuzzleError;
use thiserror::Error;

/// Errors that can occur when building a puzzle.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Start state not specified. Call .start(state) before .build()")]
    MissingStartState,

    #[error("Goal state not specified. Call .goal(state) before .build()")]
    MissingGoalState,

    #[error("Facilitator not specified. Call .facilitator(item) before .build()")]
    MissingFacilitator,

    /// All fields were present but the assembled definition is unusable.
    #[error(transparent)]
    InvalidDefinition(#[from] PuzzleError),
}
