//! Transition generation: every legal one-crossing successor of a state.
//!
//! A transition moves the facilitator from the substate holding it (the
//! source) to the other substate (the target), together with up to
//! `capacity` additional items. Candidates that violate any safety rule are
//! discarded before they are ever seen by the search.

use crate::core::rule::{state_is_allowed, Rule};
use crate::core::state::SystemState;
use thiserror::Error;

/// Structural failures of transition generation.
///
/// These are fail-fast usage errors, not search outcomes: each one means
/// the state handed in cannot support the facilitator-and-target model at
/// all, so no enumeration is attempted.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TransitionError {
    /// The facilitator is absent from every substate.
    #[error("no substate contains the facilitator '{facilitator}'")]
    NoSourceSubstate { facilitator: String },

    /// Every substate contains the facilitator, so nothing can receive it.
    #[error("every substate contains the facilitator '{facilitator}'; no target to move to")]
    NoTargetSubstate { facilitator: String },

    /// More than one substate lacks the facilitator. Only reachable once a
    /// state carries more than the two supported substates.
    #[error("{count} substates lack the facilitator '{facilitator}'; target is ambiguous")]
    AmbiguousTargetSubstate { facilitator: String, count: usize },
}

/// Enumerate every legal successor of `state` reachable in one crossing.
///
/// The facilitator always moves; for each cargo size `k` in `0..=capacity`,
/// every `k`-combination of the remaining source items accompanies it. The
/// result keeps only candidates that violate none of `rules`, ordered by
/// increasing cargo size and then by combination order over the sorted
/// source items. At most `capacity + 1` items move per transition (the
/// facilitator plus its cargo).
///
/// # Example
///
/// ```rust
/// use crossway::core::{successors, Rule};
/// use crossway::system_state;
///
/// let state = system_state! {
///     "bank1": ["boat", "goose"],
///     "bank2": [],
/// };
///
/// let next = successors(&state, "boat", 1, &[]).unwrap();
///
/// // Either the boat crosses alone, or it ferries the goose.
/// assert_eq!(next.len(), 2);
/// assert_eq!(next[0].locate("goose"), Some("bank1"));
/// assert_eq!(next[1].locate("goose"), Some("bank2"));
/// ```
pub fn successors(
    state: &SystemState,
    facilitator: &str,
    capacity: usize,
    rules: &[Rule],
) -> Result<Vec<SystemState>, TransitionError> {
    let source = state
        .locate(facilitator)
        .ok_or_else(|| TransitionError::NoSourceSubstate {
            facilitator: facilitator.to_string(),
        })?
        .to_string();

    let candidates: Vec<&str> = state
        .labels()
        .filter(|label| !state.contains(label, facilitator))
        .collect();
    let target = match candidates.as_slice() {
        [] => {
            return Err(TransitionError::NoTargetSubstate {
                facilitator: facilitator.to_string(),
            })
        }
        [only] => only.to_string(),
        many => {
            return Err(TransitionError::AmbiguousTargetSubstate {
                facilitator: facilitator.to_string(),
                count: many.len(),
            })
        }
    };

    // The facilitator moves first; cargo is drawn from what it leaves behind.
    let base = state.with_moved(&source, &target, [facilitator]);
    let cargo_pool: Vec<String> = base
        .items(&source)
        .map(|items| items.iter().cloned().collect())
        .unwrap_or_default();

    let mut found = Vec::new();
    for size in 0..=capacity {
        for cargo in combinations(&cargo_pool, size) {
            let trial = base.with_moved(&source, &target, cargo);
            if state_is_allowed(&trial, rules) {
                found.push(trial);
            }
        }
    }
    Ok(found)
}

/// All `size`-combinations of `pool`, in lexicographic index order.
fn combinations<'a>(pool: &'a [String], size: usize) -> Vec<Vec<&'a str>> {
    let mut out = Vec::new();
    let mut current = Vec::with_capacity(size);
    combine(pool, size, 0, &mut current, &mut out);
    out
}

fn combine<'a>(
    pool: &'a [String],
    size: usize,
    start: usize,
    current: &mut Vec<&'a str>,
    out: &mut Vec<Vec<&'a str>>,
) {
    if current.len() == size {
        out.push(current.clone());
        return;
    }
    let needed = size - current.len();
    if needed > pool.len().saturating_sub(start) {
        return;
    }
    for i in start..=(pool.len() - needed) {
        current.push(&pool[i]);
        combine(pool, size, i + 1, current, out);
        current.pop();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system_state;

    #[test]
    fn facilitator_alone_is_the_only_move_at_capacity_zero() {
        let state = system_state! {
            "bank1": ["beans", "boat", "fox", "goose"],
            "bank2": [],
        };

        let next = successors(&state, "boat", 0, &[]).unwrap();

        assert_eq!(next.len(), 1);
        let expected = system_state! {
            "bank1": ["beans", "fox", "goose"],
            "bank2": ["boat"],
        };
        assert_eq!(next[0], expected);
    }

    #[test]
    fn capacity_bounds_cargo_not_total() {
        let state = system_state! {
            "bank1": ["a", "b", "boat"],
            "bank2": [],
        };

        // capacity 1: boat alone, boat+a, boat+b
        let next = successors(&state, "boat", 1, &[]).unwrap();
        assert_eq!(next.len(), 3);

        // capacity 2 adds boat+a+b
        let next = successors(&state, "boat", 2, &[]).unwrap();
        assert_eq!(next.len(), 4);
    }

    #[test]
    fn results_ordered_by_cargo_size_then_combination_order() {
        let state = system_state! {
            "bank1": ["a", "b", "boat"],
            "bank2": [],
        };

        let next = successors(&state, "boat", 2, &[]).unwrap();

        let cargo_sets: Vec<Vec<&str>> = next
            .iter()
            .map(|s| {
                s.items("bank2")
                    .unwrap()
                    .iter()
                    .filter(|i| *i != "boat")
                    .map(String::as_str)
                    .collect()
            })
            .collect();
        assert_eq!(
            cargo_sets,
            vec![vec![], vec!["a"], vec!["b"], vec!["a", "b"]]
        );
    }

    #[test]
    fn capacity_beyond_available_items_is_harmless() {
        let state = system_state! {
            "bank1": ["boat", "goose"],
            "bank2": [],
        };

        let next = successors(&state, "boat", 5, &[]).unwrap();

        // boat alone, boat+goose; no size-2+ combinations exist
        assert_eq!(next.len(), 2);
    }

    #[test]
    fn rules_filter_unsafe_candidates() {
        let rules = vec![
            Rule::new("(fox AND goose) AND !boat"),
            Rule::new("(goose AND beans) AND !boat"),
        ];
        let state = system_state! {
            "bank1": ["beans", "boat", "fox", "goose"],
            "bank2": [],
        };

        let next = successors(&state, "boat", 1, &rules).unwrap();

        // Only the goose may cross first; anything else leaves a forbidden
        // pair alone on bank1.
        assert_eq!(next.len(), 1);
        assert_eq!(next[0].locate("goose"), Some("bank2"));
    }

    #[test]
    fn missing_facilitator_is_a_source_error() {
        let state = system_state! {
            "bank1": ["fox"],
            "bank2": ["goose"],
        };

        let err = successors(&state, "boat", 1, &[]).unwrap_err();
        assert_eq!(
            err,
            TransitionError::NoSourceSubstate {
                facilitator: "boat".to_string()
            }
        );
    }

    #[test]
    fn facilitator_everywhere_is_a_target_error() {
        let state = system_state! {
            "bank1": ["boat"],
            "bank2": ["boat"],
        };

        let err = successors(&state, "boat", 1, &[]).unwrap_err();
        assert_eq!(
            err,
            TransitionError::NoTargetSubstate {
                facilitator: "boat".to_string()
            }
        );
    }

    #[test]
    fn extra_substates_make_the_target_ambiguous() {
        let state = system_state! {
            "left": ["boat"],
            "mid": ["fox"],
            "right": [],
        };

        let err = successors(&state, "boat", 1, &[]).unwrap_err();
        assert_eq!(
            err,
            TransitionError::AmbiguousTargetSubstate {
                facilitator: "boat".to_string(),
                count: 2,
            }
        );
    }

    #[test]
    fn successors_conserve_items() {
        let state = system_state! {
            "bank1": ["beans", "boat", "fox", "goose"],
            "bank2": [],
        };

        for next in successors(&state, "boat", 1, &[]).unwrap() {
            assert_eq!(next.item_census(), state.item_census());
        }
    }

    #[test]
    fn combinations_enumerate_lexicographically() {
        let pool: Vec<String> = ["a", "b", "c"].iter().map(|s| s.to_string()).collect();

        assert_eq!(combinations(&pool, 0), vec![Vec::<&str>::new()]);
        assert_eq!(
            combinations(&pool, 2),
            vec![vec!["a", "b"], vec!["a", "c"], vec!["b", "c"]]
        );
        assert!(combinations(&pool, 4).is_empty());
    }
}
