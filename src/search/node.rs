//! The search tree: owned nodes in an arena, addressed by index.
//!
//! Nodes own their state snapshot and their child list; the parent link is
//! a plain index used only for ancestor walks and path reconstruction, so
//! ownership stays strictly tree-shaped. Nodes are append-only: once
//! created, a node only ever gains children.

use crate::core::SystemState;

/// Index of a node within its [`SearchTree`].
pub type NodeId = usize;

#[derive(Debug, Clone)]
struct Node {
    state: SystemState,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A tree of visited states, grown during one search call and discarded
/// with it.
///
/// # Example
///
/// ```rust
/// use crossway::search::SearchTree;
/// use crossway::system_state;
///
/// let root_state = system_state! { "bank1": ["boat"], "bank2": [] };
/// let next_state = system_state! { "bank1": [], "bank2": ["boat"] };
///
/// let mut tree = SearchTree::new(root_state.clone());
/// let root = tree.root();
///
/// let added = tree.add_children(root, vec![next_state.clone()]);
/// assert_eq!(added.len(), 1);
///
/// // The same state again is a duplicate child; the root state would loop.
/// assert!(tree.add_children(root, vec![next_state, root_state]).is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct SearchTree {
    nodes: Vec<Node>,
}

impl SearchTree {
    /// Create a tree containing only the root node.
    pub fn new(root_state: SystemState) -> Self {
        Self {
            nodes: vec![Node {
                state: root_state,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// The root node's id.
    pub fn root(&self) -> NodeId {
        0
    }

    /// The state snapshot owned by `id`.
    ///
    /// Ids are only ever produced by this tree, so an out-of-range id is a
    /// caller bug and panics.
    pub fn state(&self, id: NodeId) -> &SystemState {
        &self.nodes[id].state
    }

    /// The parent of `id`, or `None` for the root.
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id].parent
    }

    /// Total number of nodes in the tree.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// A tree always holds at least its root.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `state` equals the state of an existing child of `id`.
    ///
    /// Prevents duplicate edges when the same successor is proposed twice.
    pub fn is_child(&self, id: NodeId, state: &SystemState) -> bool {
        self.nodes[id]
            .children
            .iter()
            .any(|&child| self.nodes[child].state == *state)
    }

    /// Whether `state` equals the state of `id` or any of its ancestors.
    ///
    /// This finds loops where a search path doubles back on itself; it is
    /// deliberately path-local and says nothing about other branches.
    pub fn detect_loop(&self, id: NodeId, state: &SystemState) -> bool {
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            if self.nodes[node].state == *state {
                return true;
            }
            cursor = self.nodes[node].parent;
        }
        false
    }

    /// Attach each candidate state that is neither a duplicate child of
    /// `id` nor a repeat of an ancestor state. Returns the ids of the
    /// newly created nodes only; skipped candidates leave no trace.
    pub fn add_children(&mut self, id: NodeId, states: Vec<SystemState>) -> Vec<NodeId> {
        let mut added = Vec::new();
        for state in states {
            if self.detect_loop(id, &state) || self.is_child(id, &state) {
                continue;
            }
            let child = self.nodes.len();
            self.nodes.push(Node {
                state,
                parent: Some(id),
                children: Vec::new(),
            });
            self.nodes[id].children.push(child);
            added.push(child);
        }
        added
    }

    /// The state sequence from the root down to `id`, inclusive.
    pub fn path_from_root(&self, id: NodeId) -> Vec<SystemState> {
        let mut path = Vec::new();
        let mut cursor = Some(id);
        while let Some(node) = cursor {
            path.push(self.nodes[node].state.clone());
            cursor = self.nodes[node].parent;
        }
        path.reverse();
        path
    }
}
