//! Builder API for constructing puzzles programmatically.
//!
//! The JSON loader covers puzzles that arrive as data; this fluent builder
//! covers puzzles assembled in code, with the same validation applied at
//! `build()` time.

pub mod error;

pub use error::BuildError;

use crate::core::SystemState;
use crate::puzzle::Puzzle;

/// Builder for constructing puzzles with a fluent API.
///
/// # Example
///
/// ```rust
/// use crossway::builder::PuzzleBuilder;
/// use crossway::search::Strategy;
/// use crossway::system_state;
///
/// let puzzle = PuzzleBuilder::new()
///     .start(system_state! { "bank1": ["boat", "goose"], "bank2": [] })
///     .goal(system_state! { "bank1": [], "bank2": ["boat", "goose"] })
///     .facilitator("boat")
///     .capacity(1)
///     .build()
///     .unwrap();
///
/// assert!(puzzle.solve(Strategy::DepthFirst).unwrap().is_found());
/// ```
#[derive(Debug, Default)]
pub struct PuzzleBuilder {
    start: Option<SystemState>,
    goal: Option<SystemState>,
    facilitator: Option<String>,
    capacity: usize,
    rules: Vec<String>,
}

impl PuzzleBuilder {
    /// Create a new builder. Capacity defaults to 0 (facilitator-only
    /// crossings) and the rule list starts empty.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the start state (required).
    pub fn start(mut self, state: SystemState) -> Self {
        self.start = Some(state);
        self
    }

    /// Set the goal state (required).
    pub fn goal(mut self, state: SystemState) -> Self {
        self.goal = Some(state);
        self
    }

    /// Set the facilitator item (required).
    pub fn facilitator(mut self, item: impl Into<String>) -> Self {
        self.facilitator = Some(item.into());
        self
    }

    /// Set the transition capacity.
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity;
        self
    }

    /// Add one disallowed-configuration rule.
    pub fn rule(mut self, text: impl Into<String>) -> Self {
        self.rules.push(text.into());
        self
    }

    /// Add several rules at once.
    pub fn rules<I, S>(mut self, texts: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.rules.extend(texts.into_iter().map(Into::into));
        self
    }

    /// Build the puzzle.
    /// Returns an error if required fields are missing or the assembled
    /// definition fails validation.
    pub fn build(self) -> Result<Puzzle, BuildError> {
        let start = self.start.ok_or(BuildError::MissingStartState)?;
        let goal = self.goal.ok_or(BuildError::MissingGoalState)?;
        let facilitator = self.facilitator.ok_or(BuildError::MissingFacilitator)?;

        let puzzle = Puzzle {
            start,
            goal,
            facilitator,
            capacity: self.capacity,
            rules: self.rules,
        };
        puzzle.validate()?;
        Ok(puzzle)
    }
}
