mod astar;
mod bfs;
mod instrumented;
mod iterative_deepening;
mod search_engine;
mod search_node;
mod search_space;
mod search_statistics;
mod termination_condition;

use astar::AStar;
use bfs::Bfs;
use iterative_deepening::IterativeDeepening;

pub use instrumented::{run_instrumented, SearchReport};
pub use search_engine::{SearchEngine, SearchEngineName, SearchResult};
pub use search_node::{SearchNode, SearchNodeStatus};
pub use search_space::{NodeId, SearchSpace, NO_NODE};
pub use search_statistics::SearchStatistics;
pub use termination_condition::TerminationCondition;
