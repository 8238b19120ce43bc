//! A* search over weighted graphs.

use crate::search::{
    search_engines::{
        NodeId, SearchEngine, SearchNodeStatus, SearchResult, SearchSpace, SearchStatistics,
        TerminationCondition,
    },
    Heuristic, HeuristicValue, Route, SearchProblem,
};
use ordered_float::OrderedFloat;
use priority_queue::PriorityQueue;
use std::cmp::Reverse;

pub struct AStar {}

impl AStar {
    pub fn new() -> Self {
        Self {}
    }
}

/// Queue priority: lowest f first, then first-in first-out among equal f.
/// The insertion sequence number makes tie-breaking deterministic, so two
/// runs over the same problem produce the same route.
type Priority = Reverse<(HeuristicValue, usize)>;

impl SearchEngine for AStar {
    fn search(
        &mut self,
        problem: &SearchProblem,
        heuristic: &mut dyn Heuristic,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let graph = problem.graph();
        let mut frontier: PriorityQueue<NodeId, Priority> = PriorityQueue::new();
        let mut insertion_seq: usize = 0;
        let mut search_space = SearchSpace::new(problem.initial());
        let root_id = search_space.get_root_id();

        if problem.is_goal(problem.initial()) {
            let route = Route::trivial(graph.state_name(problem.initial()));
            return (SearchResult::Success(route), statistics);
        }

        let root_h = heuristic.evaluate(problem.initial());
        let root_node = search_space.get_node_mut(root_id);
        root_node.open(0., root_h.into_inner());
        frontier.push(root_id, Reverse((OrderedFloat(root_node.get_f()), insertion_seq)));

        while let Some((node_id, _)) = frontier.pop() {
            if let Some(result) = termination.should_terminate() {
                return (result, statistics);
            }

            let node = search_space.get_node_mut(node_id);
            if node.get_status() == SearchNodeStatus::Closed {
                continue;
            }
            node.close();
            let state = node.get_state();
            let g_value = node.get_g();
            let depth = node.get_depth();

            if problem.is_goal(state) {
                return (
                    SearchResult::Success(search_space.extract_route(node_id, graph)),
                    statistics,
                );
            }
            statistics.increment_expanded_nodes();

            for edge in graph.neighbours(state) {
                let tentative_g = g_value + edge.cost;
                let (child_id, child_status, child_g) = {
                    let (child_id, child_node) =
                        search_space.insert_or_get_node(edge.target, node_id);
                    (child_id, child_node.get_status(), child_node.get_g())
                };

                match child_status {
                    SearchNodeStatus::New => {
                        let h_value = heuristic.evaluate(edge.target);
                        let child_node = search_space.get_node_mut(child_id);
                        child_node.open(tentative_g, h_value.into_inner());
                        statistics.increment_generated_nodes(1);
                        insertion_seq += 1;
                        frontier.push(
                            child_id,
                            Reverse((OrderedFloat(child_node.get_f()), insertion_seq)),
                        );
                    }
                    SearchNodeStatus::Open | SearchNodeStatus::Closed => {
                        // Re-opening a closed node only happens when the
                        // heuristic is inconsistent; with a consistent one
                        // this branch fires for frontier nodes reached on a
                        // cheaper path.
                        if tentative_g < child_g {
                            statistics.increment_reopened_nodes();
                            let child_node = search_space.get_node_mut(child_id);
                            child_node.reopen(tentative_g, node_id, depth + 1);
                            insertion_seq += 1;
                            frontier.push(
                                child_id,
                                Reverse((OrderedFloat(child_node.get_f()), insertion_seq)),
                            );
                        }
                    }
                }
            }
        }

        (SearchResult::Unsolvable, statistics)
    }
}
