mod graph;
pub mod heuristics;
mod maps;
mod problem;
mod route;
pub mod search_engines;
mod verbosity;

pub use graph::{Edge, Graph, StateId};
pub use heuristics::{Heuristic, HeuristicValue};
pub use maps::MapName;
pub use problem::{ProblemError, SearchProblem};
pub use route::Route;
pub use verbosity::Verbosity;
