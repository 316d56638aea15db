//! Puzzle definitions: the data layer in front of the core engine.
//!
//! A [`Puzzle`] bundles everything a search call needs - start and goal
//! states, the facilitator, the capacity, and the rule texts - as one serde
//! value, so whole problems can be written as JSON. The core never sees
//! this type; it is read once at the edge and handed in as plain values.

use crate::core::{Rule, SystemState};
use crate::search::{SearchError, SearchReport, Searcher, Strategy};
use serde::{Deserialize, Serialize};

pub mod error;

pub use error::PuzzleError;

/// A complete state-transition problem.
///
/// Rule texts may use either `!x` or the more readable `NOT x`; the latter
/// is normalized away when rules are compiled.
///
/// # Example
///
/// ```rust
/// use crossway::puzzle::Puzzle;
/// use crossway::search::Strategy;
///
/// let puzzle = Puzzle::from_json(
///     r#"{
///         "start": { "bank1": ["boat", "goose"], "bank2": [] },
///         "goal": { "bank1": [], "bank2": ["boat", "goose"] },
///         "facilitator": "boat",
///         "capacity": 1
///     }"#,
/// )
/// .unwrap();
///
/// let report = puzzle.solve(Strategy::BreadthFirst).unwrap();
/// assert!(report.is_found());
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Puzzle {
    /// The initial configuration.
    pub start: SystemState,

    /// The configuration to reach.
    pub goal: SystemState,

    /// The item that must accompany every transition.
    pub facilitator: String,

    /// Maximum number of non-facilitator items moved per transition.
    pub capacity: usize,

    /// Disallowed-configuration rule texts (may be empty).
    #[serde(default)]
    pub rules: Vec<String>,
}

impl Puzzle {
    /// Load and validate a puzzle from its JSON text.
    pub fn from_json(text: &str) -> Result<Self, PuzzleError> {
        let puzzle: Puzzle = serde_json::from_str(text)?;
        puzzle.validate()?;
        Ok(puzzle)
    }

    /// Check the usage invariants a definition must satisfy before any
    /// search: both states carry exactly two substates, and the facilitator
    /// is somewhere in the start state.
    pub fn validate(&self) -> Result<(), PuzzleError> {
        for (which, state) in [("start", &self.start), ("goal", &self.goal)] {
            if state.substate_count() != 2 {
                return Err(PuzzleError::NotBinary {
                    which,
                    count: state.substate_count(),
                });
            }
        }
        if self.start.locate(&self.facilitator).is_none() {
            return Err(PuzzleError::FacilitatorAbsent {
                facilitator: self.facilitator.clone(),
            });
        }
        Ok(())
    }

    /// Parse the rule texts, normalizing `NOT ` to `!`.
    pub fn compiled_rules(&self) -> Vec<Rule> {
        self.rules
            .iter()
            .map(|text| Rule::new(text.replace("NOT ", "!")))
            .collect()
    }

    /// Solve the puzzle with a freshly configured searcher.
    pub fn solve(&self, strategy: Strategy) -> Result<SearchReport, SearchError> {
        self.solve_with(&Searcher::new(strategy))
    }

    /// Solve the puzzle with an existing searcher (e.g. one with global
    /// memoization enabled).
    pub fn solve_with(&self, searcher: &Searcher) -> Result<SearchReport, SearchError> {
        searcher.search(
            &self.start,
            &self.goal,
            &self.facilitator,
            self.capacity,
            &self.compiled_rules(),
        )
    }

    /// The classic river crossing: ferry beans, fox, and goose across
    /// without ever leaving fox with goose or goose with beans unattended.
    pub fn fox_goose_beans() -> Self {
        Self {
            start: crate::system_state! {
                "bank1": ["beans", "boat", "fox", "goose"],
                "bank2": [],
            },
            goal: crate::system_state! {
                "bank1": [],
                "bank2": ["beans", "boat", "fox", "goose"],
            },
            facilitator: "boat".to_string(),
            capacity: 1,
            rules: vec![
                "(fox AND goose) AND NOT boat".to_string(),
                "(goose AND beans) AND NOT boat".to_string(),
            ],
        }
    }
}
