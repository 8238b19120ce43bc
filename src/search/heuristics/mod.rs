mod heuristic;
mod straight_line;
mod zero_heuristic;

pub use heuristic::{Heuristic, HeuristicValue};
pub use straight_line::StraightLine;
pub use zero_heuristic::ZeroHeuristic;
