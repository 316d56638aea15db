//! Crossway: a puzzle-agnostic engine for state-transition search problems.
//!
//! Crossway solves problems of the river-crossing family: given a start
//! configuration, a goal configuration, a designated *facilitator* item that
//! must accompany every move, a capacity limit, and a set of
//! disallowed-configuration rules, it finds a sequence of legal transitions
//! from start to goal.
//!
//! The engine is a pure core driven by an imperative-free search loop:
//! states are immutable value snapshots, rules are pure predicates over item
//! sets, and every search call owns its tree and frontier exclusively.
//!
//! # Core Concepts
//!
//! - **SystemState**: the complete configuration - items partitioned across
//!   exactly two named substates
//! - **Rule**: a boolean expression over item membership; a match disallows
//!   the configuration
//! - **Searcher**: depth-first or breadth-first tree search with per-path
//!   loop detection and path reconstruction
//! - **Puzzle**: a whole problem as one serde value, loadable from JSON
//!
//! # Example
//!
//! ```rust
//! use crossway::puzzle::Puzzle;
//! use crossway::search::Strategy;
//!
//! let puzzle = Puzzle::fox_goose_beans();
//! let report = puzzle.solve(Strategy::BreadthFirst).unwrap();
//!
//! let path = report.path().expect("the classic puzzle has a solution");
//! assert_eq!(path.len(), 8); // 7 crossings
//! assert_eq!(&path[0], &puzzle.start);
//! assert_eq!(path.last().unwrap(), &puzzle.goal);
//! ```

pub mod builder;
pub mod core;
mod macros;
pub mod puzzle;
pub mod search;

// Re-export commonly used types
pub use crate::builder::PuzzleBuilder;
pub use crate::core::{Rule, SystemState};
pub use crate::puzzle::Puzzle;
pub use crate::search::{SearchError, SearchOutcome, SearchReport, Searcher, Strategy};
