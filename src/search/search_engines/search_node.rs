use crate::search::{
    search_engines::{NodeId, NO_NODE},
    StateId,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchNodeStatus {
    /// New node, not yet opened
    New,
    /// Node is in the open list
    Open,
    /// Node has been expanded
    Closed,
}

#[derive(Debug, Clone)]
pub struct SearchNode {
    /// The graph state this node wraps
    state: StateId,
    /// Status of the node
    status: SearchNodeStatus,
    /// F-value of the node, g + h for A*, equal to g for the uninformed
    /// engines.
    f: f64,
    /// G-value of the node, i.e. the cost to reach this node from the root.
    g: f64,
    /// H-value of the node, zero for the uninformed engines.
    h: f64,
    /// Number of edges from the root to this node.
    depth: usize,
    /// Node that generated this one, NO_NODE at the root. Only ever walked
    /// backwards, at route-reconstruction time.
    parent: NodeId,
}

impl SearchNode {
    pub fn new_root(state: StateId) -> Self {
        Self {
            state,
            status: SearchNodeStatus::New,
            f: f64::INFINITY,
            g: f64::INFINITY,
            h: f64::INFINITY,
            depth: 0,
            parent: NO_NODE,
        }
    }

    pub fn new_child(state: StateId, parent: NodeId, depth: usize) -> Self {
        Self {
            state,
            status: SearchNodeStatus::New,
            f: f64::INFINITY,
            g: f64::INFINITY,
            h: f64::INFINITY,
            depth,
            parent,
        }
    }

    pub fn open(&mut self, g: f64, h: f64) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.h = h;
        self.f = g + h;
    }

    /// Re-open a closed or open node through a cheaper parent. The parent
    /// link has to move too, otherwise route reconstruction would walk the
    /// dominated path.
    pub fn reopen(&mut self, g: f64, parent: NodeId, depth: usize) {
        self.status = SearchNodeStatus::Open;
        self.g = g;
        self.f = g + self.h;
        self.parent = parent;
        self.depth = depth;
    }

    pub fn close(&mut self) {
        debug_assert_eq!(
            self.status,
            SearchNodeStatus::Open,
            "Node must be open to close it"
        );
        self.status = SearchNodeStatus::Closed;
    }

    pub fn get_status(&self) -> SearchNodeStatus {
        self.status
    }

    pub fn get_state(&self) -> StateId {
        self.state
    }

    pub fn get_parent(&self) -> NodeId {
        self.parent
    }

    pub fn get_depth(&self) -> usize {
        self.depth
    }

    pub fn get_f(&self) -> f64 {
        self.f
    }

    pub fn get_g(&self) -> f64 {
        self.g
    }

    pub fn get_h(&self) -> f64 {
        self.h
    }
}
