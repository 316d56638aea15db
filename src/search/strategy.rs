//! Search strategies: frontier-driven tree construction.
//!
//! A [`Searcher`] holds only durable configuration - the strategy kind and
//! whether global memoization is enabled. Everything mutable during a run
//! (the tree, the frontier, the memo table, counters) is created fresh
//! inside [`Searcher::search`], so one searcher can serve any number of
//! independent, fully isolated calls.
//!
//! A run moves `Searching -> Found | Exhausted -> Done`; the returned
//! [`SearchReport`] is only ever built in a terminal state.

use crate::core::{successors, Rule, SystemState};
use crate::search::error::SearchError;
use crate::search::node::{NodeId, SearchTree};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, VecDeque};
use std::str::FromStr;
use std::time::Duration;

/// The frontier traversal order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Strategy {
    /// Newly discovered children are explored first (LIFO frontier).
    DepthFirst,
    /// Children are explored in discovery order (FIFO frontier).
    BreadthFirst,
}

impl Strategy {
    /// The canonical name accepted by [`Strategy::from_str`].
    pub fn name(&self) -> &'static str {
        match self {
            Self::DepthFirst => "depth-first",
            Self::BreadthFirst => "breadth-first",
        }
    }
}

impl FromStr for Strategy {
    type Err = SearchError;

    /// Parse a strategy kind. Anything but the two supported names fails
    /// immediately - there is no silent default.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crossway::search::{SearchError, Strategy};
    ///
    /// let dfs: Strategy = "depth-first".parse().unwrap();
    /// assert_eq!(dfs, Strategy::DepthFirst);
    ///
    /// let err = "random".parse::<Strategy>().unwrap_err();
    /// assert!(matches!(err, SearchError::UnsupportedAlgorithm { .. }));
    /// ```
    fn from_str(s: &str) -> Result<Self, SearchError> {
        match s {
            "depth-first" => Ok(Self::DepthFirst),
            "breadth-first" => Ok(Self::BreadthFirst),
            other => Err(SearchError::UnsupportedAlgorithm {
                name: other.to_string(),
            }),
        }
    }
}

/// How a finished search resolved.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum SearchOutcome {
    /// A path from start to goal, inclusive of both
    /// (`path.len() == transitions + 1`).
    Found { path: Vec<SystemState> },
    /// The frontier emptied without reaching the goal. This is a normal
    /// resolution, not an error.
    Exhausted,
}

impl SearchOutcome {
    /// Whether the goal was reached.
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// The found path, if any.
    pub fn path(&self) -> Option<&[SystemState]> {
        match self {
            Self::Found { path } => Some(path),
            Self::Exhausted => None,
        }
    }
}

/// Measurements of one search run.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchStats {
    /// When the run began.
    pub started_at: DateTime<Utc>,
    /// When the run resolved.
    pub finished_at: DateTime<Utc>,
    /// Nodes popped from the frontier and expanded.
    pub nodes_expanded: usize,
    /// Successor states produced by transition generation (pre-dedup).
    pub states_generated: usize,
    /// Nodes in the tree when the run resolved.
    pub tree_size: usize,
}

impl SearchStats {
    /// Wall-clock time from start to resolution.
    pub fn duration(&self) -> Option<Duration> {
        self.finished_at
            .signed_duration_since(self.started_at)
            .to_std()
            .ok()
    }
}

/// Outcome plus measurements for one search call.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SearchReport {
    pub outcome: SearchOutcome,
    pub stats: SearchStats,
}

impl SearchReport {
    /// Whether the goal was reached.
    pub fn is_found(&self) -> bool {
        self.outcome.is_found()
    }

    /// The found path, if any.
    pub fn path(&self) -> Option<&[SystemState]> {
        self.outcome.path()
    }
}

/// A configured search, reusable across calls.
///
/// # Example
///
/// ```rust
/// use crossway::search::{Searcher, Strategy};
/// use crossway::system_state;
///
/// let start = system_state! { "bank1": ["boat", "goose"], "bank2": [] };
/// let goal = system_state! { "bank1": [], "bank2": ["boat", "goose"] };
///
/// let searcher = Searcher::new(Strategy::DepthFirst);
/// let report = searcher.search(&start, &goal, "boat", 1, &[]).unwrap();
///
/// let path = report.path().unwrap();
/// assert_eq!(path.len(), 2); // one crossing
/// assert_eq!(&path[0], &start);
/// assert_eq!(&path[1], &goal);
/// ```
#[derive(Debug, Clone)]
pub struct Searcher {
    strategy: Strategy,
    global_memoization: bool,
}

impl Searcher {
    /// Create a searcher with the given traversal order.
    pub fn new(strategy: Strategy) -> Self {
        Self {
            strategy,
            global_memoization: false,
        }
    }

    /// Create a searcher from a strategy name, validating it up front.
    pub fn from_name(name: &str) -> Result<Self, SearchError> {
        Ok(Self::new(name.parse()?))
    }

    /// Enable global memoization of expanded states.
    ///
    /// This is an extension beyond the baseline path-local loop detection:
    /// with it enabled, a state expanded on one branch is never expanded
    /// again on any other, which bounds re-exploration on cyclic state
    /// graphs at the cost of a per-call visited table. Off by default.
    pub fn with_global_memoization(mut self) -> Self {
        self.global_memoization = true;
        self
    }

    /// The configured traversal order.
    pub fn strategy(&self) -> Strategy {
        self.strategy
    }

    /// Search for a path of legal transitions from `start` to `goal`.
    ///
    /// Returns the first path found in the configured traversal order (not
    /// necessarily the shortest), or [`SearchOutcome::Exhausted`] when the
    /// frontier empties. Structural [`TransitionError`]s propagate
    /// immediately; if `start == goal` the search succeeds with a
    /// one-element path before any transition is generated.
    ///
    /// [`TransitionError`]: crate::core::TransitionError
    pub fn search(
        &self,
        start: &SystemState,
        goal: &SystemState,
        facilitator: &str,
        capacity: usize,
        rules: &[Rule],
    ) -> Result<SearchReport, SearchError> {
        let started_at = Utc::now();
        let mut tree = SearchTree::new(start.clone());
        let mut frontier: VecDeque<NodeId> = VecDeque::new();
        frontier.push_back(tree.root());
        let mut expanded: BTreeSet<SystemState> = BTreeSet::new();
        let mut nodes_expanded = 0;
        let mut states_generated = 0;

        while let Some(current) = frontier.pop_front() {
            if tree.state(current) == goal {
                let path = tree.path_from_root(current);
                return Ok(self.report(
                    SearchOutcome::Found { path },
                    started_at,
                    nodes_expanded,
                    states_generated,
                    tree.len(),
                ));
            }

            if self.global_memoization && !expanded.insert(tree.state(current).clone()) {
                continue;
            }

            let next_states = successors(tree.state(current), facilitator, capacity, rules)?;
            nodes_expanded += 1;
            states_generated += next_states.len();

            let added = tree.add_children(current, next_states);
            match self.strategy {
                // Front insertion: the most recently discovered child is
                // explored first, true LIFO among same-level siblings.
                Strategy::DepthFirst => {
                    for id in added {
                        frontier.push_front(id);
                    }
                }
                Strategy::BreadthFirst => frontier.extend(added),
            }
        }

        Ok(self.report(
            SearchOutcome::Exhausted,
            started_at,
            nodes_expanded,
            states_generated,
            tree.len(),
        ))
    }

    fn report(
        &self,
        outcome: SearchOutcome,
        started_at: DateTime<Utc>,
        nodes_expanded: usize,
        states_generated: usize,
        tree_size: usize,
    ) -> SearchReport {
        SearchReport {
            outcome,
            stats: SearchStats {
                started_at,
                finished_at: Utc::now(),
                nodes_expanded,
                states_generated,
                tree_size,
            },
        }
    }
}
