use crate::search::{
    search_engines::{AStar, Bfs, IterativeDeepening, SearchStatistics, TerminationCondition},
    Heuristic, Route, SearchProblem,
};
use clap;

#[derive(Debug, Clone, PartialEq)]
pub enum SearchResult {
    /// The search reached the goal
    Success(Route),
    /// The search exhausted every reachable state without finding the goal
    Unsolvable,
    /// The search engine ran out of time
    TimeLimitExceeded,
    /// The search engine ran out of memory
    MemoryLimitExceeded,
}

pub trait SearchEngine {
    fn search(
        &mut self,
        problem: &SearchProblem,
        heuristic: &mut dyn Heuristic,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics);
}

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum SearchEngineName {
    #[clap(
        name = "bfs",
        help = "Breadth-first search. Minimum edge count on unit-cost graphs."
    )]
    Bfs,
    #[clap(
        name = "ids",
        help = "Iterative deepening: depth-limited search with an increasing \
        depth bound. Same edge-count guarantee as BFS at a lower memory \
        footprint, at the price of re-exploration."
    )]
    Ids,
    #[clap(
        name = "astar",
        help = "A* search. Optimal on weighted graphs given an admissible, \
        consistent heuristic."
    )]
    AStar,
}

impl SearchEngineName {
    pub fn create(&self) -> Box<dyn SearchEngine> {
        match self {
            SearchEngineName::Bfs => Box::new(Bfs::new()),
            SearchEngineName::Ids => Box::new(IterativeDeepening::new()),
            SearchEngineName::AStar => Box::new(AStar::new()),
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            SearchEngineName::Bfs => "Breadth-First Search (BFS)",
            SearchEngineName::Ids => "Iterative Deepening Search (IDS)",
            SearchEngineName::AStar => "A* Search",
        }
    }
}

impl SearchResult {
    pub fn route(&self) -> Option<&Route> {
        match self {
            SearchResult::Success(route) => Some(route),
            _ => None,
        }
    }

    pub fn describe(&self) -> &'static str {
        match self {
            SearchResult::Success(_) => "success",
            SearchResult::Unsolvable => "unsolvable",
            SearchResult::TimeLimitExceeded => "time limit exceeded",
            SearchResult::MemoryLimitExceeded => "memory limit exceeded",
        }
    }
}
