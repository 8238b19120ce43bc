//! Adjacency representation of the search space. States are interned into
//! [`StateId`]s so the engines work over indices rather than strings.

use std::collections::HashMap;

/// Index of a state in the graph's name table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StateId(pub(crate) usize);

/// An outgoing edge. Edges are directed as stored: a symmetric connection
/// must be declared in both directions by whoever builds the graph, it is
/// never derived at traversal time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub target: StateId,
    pub cost: f64,
}

#[derive(Debug, Clone, Default)]
pub struct Graph {
    names: Vec<String>,
    ids: HashMap<String, StateId>,
    adjacency: Vec<Vec<Edge>>,
}

impl Graph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Intern a state name, returning the existing id if it was added before.
    pub fn add_state(&mut self, name: &str) -> StateId {
        if let Some(&id) = self.ids.get(name) {
            return id;
        }
        let id = StateId(self.names.len());
        self.names.push(name.to_string());
        self.ids.insert(name.to_string(), id);
        self.adjacency.push(Vec::new());
        id
    }

    /// Add a directed edge with the given positive cost. Both endpoints are
    /// interned if they were not already.
    pub fn add_edge(&mut self, from: &str, to: &str, cost: f64) {
        debug_assert!(cost > 0.0, "edge costs must be positive");
        let from = self.add_state(from);
        let to = self.add_state(to);
        self.adjacency[from.0].push(Edge { target: to, cost });
    }

    /// Add a directed edge with unit cost, for the unweighted exercises.
    pub fn add_unit_edge(&mut self, from: &str, to: &str) {
        self.add_edge(from, to, 1.0);
    }

    pub fn state_id(&self, name: &str) -> Option<StateId> {
        self.ids.get(name).copied()
    }

    pub fn state_name(&self, id: StateId) -> &str {
        &self.names[id.0]
    }

    /// Outgoing edges of `id`, in declaration order. Declaration order is
    /// what makes the engines' tie-breaking deterministic.
    pub fn neighbours(&self, id: StateId) -> &[Edge] {
        &self.adjacency[id.0]
    }

    pub fn num_states(&self) -> usize {
        self.names.len()
    }
}
