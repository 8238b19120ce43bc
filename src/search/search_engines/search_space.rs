use crate::search::{
    search_engines::{SearchNode, SearchNodeStatus},
    Graph, Route, StateId,
};
use segvec::{Linear, SegVec};
use std::collections::HashMap;

/// Index of a node within one [`SearchSpace`]. Node ids are only meaningful
/// inside the space that allocated them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

pub const NO_NODE: NodeId = NodeId(usize::MAX);

/// Per-invocation node arena. Each graph state gets at most one node; the
/// registration map is what gives BFS its O(1) duplicate check and A* its
/// best-known-g lookup.
#[derive(Debug)]
pub struct SearchSpace {
    root_id: NodeId,
    nodes: SegVec<SearchNode, Linear>,
    registered_states: HashMap<StateId, NodeId>,
}

impl SearchSpace {
    pub fn new(initial_state: StateId) -> Self {
        let mut nodes = SegVec::new();
        let mut registered_states = HashMap::new();

        let root_id = NodeId(0);
        nodes.push(SearchNode::new_root(initial_state));
        registered_states.insert(initial_state, root_id);

        Self {
            root_id,
            nodes,
            registered_states,
        }
    }

    /// Get the node registered for `state`, creating it as a child of
    /// `parent_id` if the state has never been seen. An existing node is
    /// returned untouched; callers decide whether to re-open it.
    pub fn insert_or_get_node(&mut self, state: StateId, parent_id: NodeId) -> (NodeId, &mut SearchNode) {
        match self.registered_states.get(&state) {
            Some(&node_id) => (node_id, self.get_node_mut(node_id)),
            None => {
                let depth = self.get_node(parent_id).get_depth() + 1;
                let node_id = NodeId(self.nodes.len());
                self.nodes.push(SearchNode::new_child(state, parent_id, depth));
                self.registered_states.insert(state, node_id);
                (node_id, self.get_node_mut(node_id))
            }
        }
    }

    /// Walk parent links from `goal_id` back to the root, then reverse.
    /// Nodes never store their full path, this walk is the only place the
    /// path is materialised.
    pub fn extract_route(&self, goal_id: NodeId, graph: &Graph) -> Route {
        let cost = self.get_node(goal_id).get_g();
        let mut states = vec![];
        let mut current = goal_id;
        loop {
            let node = self.get_node(current);
            states.push(graph.state_name(node.get_state()).to_string());
            if node.get_parent() == NO_NODE {
                break;
            }
            current = node.get_parent();
        }
        states.reverse();
        Route::new(states, cost)
    }

    pub fn get_root_id(&self) -> NodeId {
        self.root_id
    }

    pub fn get_node(&self, node_id: NodeId) -> &SearchNode {
        self.nodes.get(node_id.0).expect("Invalid node id")
    }

    pub fn get_node_mut(&mut self, node_id: NodeId) -> &mut SearchNode {
        self.nodes.get_mut(node_id.0).expect("Invalid node id")
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Whether `state` already has a node that is open or closed, i.e. it is
    /// on the frontier or among the expanded states.
    pub fn is_reached(&self, state: StateId) -> bool {
        self.registered_states
            .get(&state)
            .map(|&node_id| self.get_node(node_id).get_status() != SearchNodeStatus::New)
            .unwrap_or(false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn route_reconstruction_walks_parents() {
        let mut graph = Graph::new();
        graph.add_unit_edge("A", "B");
        graph.add_unit_edge("B", "C");
        let a = graph.state_id("A").unwrap();
        let b = graph.state_id("B").unwrap();
        let c = graph.state_id("C").unwrap();

        let mut space = SearchSpace::new(a);
        let root = space.get_root_id();
        space.get_node_mut(root).open(0.0, 0.0);
        let (b_id, b_node) = space.insert_or_get_node(b, root);
        b_node.open(1.0, 0.0);
        let (c_id, c_node) = space.insert_or_get_node(c, b_id);
        c_node.open(2.0, 0.0);

        let route = space.extract_route(c_id, &graph);
        assert_eq!(route.states(), ["A", "B", "C"]);
        assert_eq!(route.cost(), 2.0);
        assert_eq!(route.edges(), 2);
    }

    #[test]
    fn states_are_registered_once() {
        let mut graph = Graph::new();
        graph.add_unit_edge("A", "B");
        let a = graph.state_id("A").unwrap();
        let b = graph.state_id("B").unwrap();

        let mut space = SearchSpace::new(a);
        let root = space.get_root_id();
        let (first, _) = space.insert_or_get_node(b, root);
        let (second, _) = space.insert_or_get_node(b, root);
        assert_eq!(first, second);
        assert_eq!(space.len(), 2);
    }
}
