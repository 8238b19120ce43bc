//! Iterative deepening: depth-limited depth-first search driven with an
//! increasing depth bound.

use crate::search::{
    search_engines::{SearchEngine, SearchResult, SearchStatistics, TerminationCondition},
    Heuristic, Route, SearchProblem, StateId,
};
use std::collections::HashSet;

pub struct IterativeDeepening {}

impl IterativeDeepening {
    pub fn new() -> Self {
        Self {}
    }
}

/// Outcome of a single depth-limited descent. `Cutoff` and `Exhausted` are
/// deliberately distinct: the driver keeps deepening after a cutoff but
/// stops after an exhaustion, otherwise an unreachable goal in a finite
/// graph would loop forever.
enum DepthLimitedOutcome {
    Found(Vec<StateId>),
    /// The limit was hit with unexplored nodes beyond it.
    Cutoff,
    /// Every reachable state lies within the limit; deepening cannot help.
    Exhausted,
    Terminated(SearchResult),
}

impl SearchEngine for IterativeDeepening {
    fn search(
        &mut self,
        problem: &SearchProblem,
        _heuristic: &mut dyn Heuristic,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();

        if problem.is_goal(problem.initial()) {
            let route = Route::trivial(problem.graph().state_name(problem.initial()));
            return (SearchResult::Success(route), statistics);
        }

        for limit in 0.. {
            statistics.record_depth_limit(limit);
            let mut path = vec![problem.initial()];
            let mut on_path = HashSet::from([problem.initial()]);
            let outcome = depth_limited(
                problem,
                problem.initial(),
                limit,
                &mut path,
                &mut on_path,
                &mut statistics,
                termination,
            );
            match outcome {
                DepthLimitedOutcome::Found(path) => {
                    let route = route_from_path(problem, &path);
                    return (SearchResult::Success(route), statistics);
                }
                DepthLimitedOutcome::Exhausted => return (SearchResult::Unsolvable, statistics),
                DepthLimitedOutcome::Terminated(result) => return (result, statistics),
                DepthLimitedOutcome::Cutoff => {}
            }
        }
        unreachable!("the deepening loop only exits by returning");
    }
}

/// One recursive descent. `path`/`on_path` hold the states on the branch
/// currently being explored, nothing else: a state is pushed when the
/// descent enters it and popped on backtrack, so revisiting an ancestor is
/// rejected while reaching the same state through a sibling branch is not.
/// Keeping the set per-branch, not global, is what preserves completeness
/// across deepening rounds.
fn depth_limited(
    problem: &SearchProblem,
    state: StateId,
    limit: usize,
    path: &mut Vec<StateId>,
    on_path: &mut HashSet<StateId>,
    statistics: &mut SearchStatistics,
    termination: &mut TerminationCondition,
) -> DepthLimitedOutcome {
    statistics.increment_expanded_nodes();

    if problem.is_goal(state) {
        return DepthLimitedOutcome::Found(path.clone());
    }
    if let Some(result) = termination.should_terminate() {
        return DepthLimitedOutcome::Terminated(result);
    }
    if limit == 0 {
        return DepthLimitedOutcome::Cutoff;
    }

    let mut cutoff_occurred = false;
    for edge in problem.graph().neighbours(state) {
        if on_path.contains(&edge.target) {
            continue;
        }
        path.push(edge.target);
        on_path.insert(edge.target);
        statistics.increment_generated_nodes(1);
        let outcome = depth_limited(
            problem,
            edge.target,
            limit - 1,
            path,
            on_path,
            statistics,
            termination,
        );
        path.pop();
        on_path.remove(&edge.target);
        match outcome {
            DepthLimitedOutcome::Found(found) => return DepthLimitedOutcome::Found(found),
            DepthLimitedOutcome::Terminated(result) => {
                return DepthLimitedOutcome::Terminated(result)
            }
            DepthLimitedOutcome::Cutoff => cutoff_occurred = true,
            DepthLimitedOutcome::Exhausted => {}
        }
    }

    if cutoff_occurred {
        DepthLimitedOutcome::Cutoff
    } else {
        DepthLimitedOutcome::Exhausted
    }
}

/// The recursion only records states, so the cost is recovered by summing
/// the weights of the edges the path traversed. On unit-cost maps this is
/// the edge count.
fn route_from_path(problem: &SearchProblem, path: &[StateId]) -> Route {
    let graph = problem.graph();
    let cost = path
        .windows(2)
        .map(|pair| {
            graph
                .neighbours(pair[0])
                .iter()
                .find(|edge| edge.target == pair[1])
                .expect("route follows graph edges")
                .cost
        })
        .sum();
    let states = path
        .iter()
        .map(|&state| graph.state_name(state).to_string())
        .collect::<Vec<_>>();
    Route::new(states, cost)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::heuristics::ZeroHeuristic;
    use crate::search::search_engines::Bfs;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn run_ids(problem: &SearchProblem) -> (SearchResult, SearchStatistics) {
        IterativeDeepening::new().search(
            problem,
            &mut ZeroHeuristic::new(),
            &mut TerminationCondition::unbounded(),
        )
    }

    #[test]
    fn metro_a_to_j_is_three_edges() {
        let problem = metro_problem("A", "J");
        let (result, statistics) = run_ids(&problem);
        let route = result.route().expect("metro A to J is solvable");
        assert_eq!(route.states(), ["A", "C", "F", "J"]);
        assert_eq!(route.edges(), 3);
        assert_eq!(statistics.deepest_limit(), Some(3));
    }

    #[test]
    fn matches_bfs_edge_count_but_expands_more() {
        let problem = metro_problem("A", "J");
        let (ids_result, ids_statistics) = run_ids(&problem);
        let (bfs_result, bfs_statistics) = Bfs::new().search(
            &problem,
            &mut ZeroHeuristic::new(),
            &mut TerminationCondition::unbounded(),
        );
        let ids_route = ids_result.route().unwrap();
        let bfs_route = bfs_result.route().unwrap();
        assert_eq!(ids_route.edges(), bfs_route.edges());
        // Re-exploration across deepening rounds shows up in the counter.
        assert!(ids_statistics.expanded_nodes() >= bfs_statistics.expanded_nodes());
    }

    #[test]
    fn weighted_map_cost_sums_edge_weights() {
        // The depth-first descent reaches Bucharest through Sibiu and
        // Fagaras at limit 3; the cost must be the 450 km that path
        // measures, not its edge count.
        let problem = romania_problem("Arad", "Bucharest");
        let (result, _) = run_ids(&problem);
        let route = result.route().expect("Arad to Bucharest is solvable");
        assert_eq!(route.states(), ["Arad", "Sibiu", "Fagaras", "Bucharest"]);
        assert_approx_eq!(route.cost(), 450.0);
    }

    #[test]
    fn initial_equals_goal_expands_nothing() {
        let problem = metro_problem("J", "J");
        let (result, statistics) = run_ids(&problem);
        assert_eq!(result.route().unwrap().edges(), 0);
        assert_eq!(statistics.expanded_nodes(), 0);
    }

    #[test]
    fn disconnected_goal_exhausts_and_stops() {
        // The goal is in another component; every deepening round must end
        // in Exhausted rather than Cutoff, or this would never return.
        let problem = disconnected_problem("A", "C");
        let (result, _) = run_ids(&problem);
        assert_eq!(result, SearchResult::Unsolvable);
    }

    #[test]
    fn state_reachable_through_sibling_branches() {
        // Diamond: D is reachable through both B and C. The per-branch path
        // set must allow the second visit while still rejecting cycles.
        let problem = diamond_problem("A", "E");
        let (result, _) = run_ids(&problem);
        let route = result.route().expect("diamond A to E is solvable");
        assert_eq!(route.edges(), 3);
        assert_eq!(route.states().first().map(String::as_str), Some("A"));
        assert_eq!(route.states().last().map(String::as_str), Some("E"));
    }
}
