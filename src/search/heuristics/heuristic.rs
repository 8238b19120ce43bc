use crate::search::StateId;
use ordered_float::OrderedFloat;
use std::fmt::Debug;

pub type HeuristicValue = OrderedFloat<f64>;

pub trait Heuristic: Debug {
    /// Estimate the remaining cost from `state` to the goal.
    ///
    /// A* is only optimal when the estimate is admissible (never
    /// overestimates the true remaining cost) and consistent (never drops by
    /// more than the cost of an edge). Neither property is checked at
    /// runtime; a heuristic that violates them silently forfeits the
    /// optimality guarantee.
    fn evaluate(&mut self, state: StateId) -> HeuristicValue;
}
