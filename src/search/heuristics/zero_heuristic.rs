use crate::search::{
    heuristics::{Heuristic, HeuristicValue},
    StateId,
};
use ordered_float::OrderedFloat;

/// The zero heuristic. Turns A* into uniform-cost search; trivially
/// admissible and consistent.
#[derive(Debug, Clone, Copy, Default)]
pub struct ZeroHeuristic;

impl ZeroHeuristic {
    pub fn new() -> Self {
        Self
    }
}

impl Heuristic for ZeroHeuristic {
    fn evaluate(&mut self, _state: StateId) -> HeuristicValue {
        OrderedFloat(0.)
    }
}
