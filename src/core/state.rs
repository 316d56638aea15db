//! The system state: a partition of items across named substates.
//!
//! A `SystemState` is the complete picture of one configuration in a
//! state-transition problem: every item, assigned to exactly one named
//! substate (for a river puzzle, the two banks). States are immutable value
//! snapshots - transitions produce new states via [`SystemState::with_moved`]
//! rather than mutating in place.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};
use std::fmt;

/// One full configuration of the system.
///
/// Substates and their item sets are stored in sorted containers, so two
/// states compare equal exactly when their substate-to-item-set mappings are
/// equal, independent of the order items were inserted. The same property
/// makes printing and serialization deterministic.
///
/// The transition model assumes exactly two substates; a state with any
/// other number can be constructed (and is useful for exercising the
/// structural error paths) but is a usage error for solving.
///
/// # Example
///
/// ```rust
/// use crossway::system_state;
///
/// let state = system_state! {
///     "bank1": ["beans", "boat", "fox", "goose"],
///     "bank2": [],
/// };
///
/// assert_eq!(state.substate_count(), 2);
/// assert_eq!(state.locate("boat"), Some("bank1"));
/// assert!(state.contains("bank1", "fox"));
/// assert!(!state.contains("bank2", "fox"));
/// ```
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Debug, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SystemState {
    substates: BTreeMap<String, BTreeSet<String>>,
}

impl SystemState {
    /// Create a state from a substate-to-item-set mapping.
    pub fn from_substates(substates: BTreeMap<String, BTreeSet<String>>) -> Self {
        Self { substates }
    }

    /// The full substate mapping.
    pub fn substates(&self) -> &BTreeMap<String, BTreeSet<String>> {
        &self.substates
    }

    /// Number of substates in this configuration.
    pub fn substate_count(&self) -> usize {
        self.substates.len()
    }

    /// Substate labels in sorted order.
    pub fn labels(&self) -> impl Iterator<Item = &str> {
        self.substates.keys().map(String::as_str)
    }

    /// The item set of one substate, if the label exists.
    pub fn items(&self, label: &str) -> Option<&BTreeSet<String>> {
        self.substates.get(label)
    }

    /// Whether `item` is present in the substate named `label`.
    pub fn contains(&self, label: &str, item: &str) -> bool {
        self.substates
            .get(label)
            .is_some_and(|items| items.contains(item))
    }

    /// The first substate (in label order) containing `item`, if any.
    ///
    /// For well-formed states an item lives in exactly one substate, so
    /// "first" and "only" coincide.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crossway::system_state;
    ///
    /// let state = system_state! {
    ///     "east": ["boat", "goose"],
    ///     "west": ["fox"],
    /// };
    ///
    /// assert_eq!(state.locate("goose"), Some("east"));
    /// assert_eq!(state.locate("fox"), Some("west"));
    /// assert_eq!(state.locate("dragon"), None);
    /// ```
    pub fn locate(&self, item: &str) -> Option<&str> {
        self.substates
            .iter()
            .find(|(_, items)| items.contains(item))
            .map(|(label, _)| label.as_str())
    }

    /// Produce a new state with `items` moved from `source` to `target`.
    ///
    /// This is the structural copy-and-modify at the heart of transition
    /// generation: the receiver is untouched and a fresh snapshot is
    /// returned. Items absent from `source` are ignored.
    ///
    /// # Example
    ///
    /// ```rust
    /// use crossway::system_state;
    ///
    /// let before = system_state! {
    ///     "bank1": ["boat", "goose"],
    ///     "bank2": [],
    /// };
    ///
    /// let after = before.with_moved("bank1", "bank2", ["boat", "goose"]);
    ///
    /// assert_eq!(before.locate("goose"), Some("bank1")); // original unchanged
    /// assert_eq!(after.locate("goose"), Some("bank2"));
    /// assert_eq!(after.items("bank1").unwrap().len(), 0);
    /// ```
    pub fn with_moved<I, S>(&self, source: &str, target: &str, items: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut substates = self.substates.clone();
        for item in items {
            let item = item.as_ref();
            let moved = substates
                .get_mut(source)
                .map(|set| set.remove(item))
                .unwrap_or(false);
            if moved {
                if let Some(set) = substates.get_mut(target) {
                    set.insert(item.to_string());
                }
            }
        }
        Self { substates }
    }

    /// Count of each item across all substates.
    ///
    /// For a state produced by legal transitions every count is 1; the
    /// census exists so conservation can be checked, not assumed.
    pub fn item_census(&self) -> BTreeMap<String, usize> {
        let mut census = BTreeMap::new();
        for items in self.substates.values() {
            for item in items {
                *census.entry(item.clone()).or_insert(0) += 1;
            }
        }
        census
    }
}

impl fmt::Display for SystemState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (label, items)) in self.substates.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{label:?}: [")?;
            for (j, item) in items.iter().enumerate() {
                if j > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{item:?}")?;
            }
            write!(f, "]")?;
        }
        write!(f, "}}")
    }
}
