//! Breadth first search

use crate::search::{
    search_engines::{
        SearchEngine, SearchResult, SearchSpace, SearchStatistics, TerminationCondition,
    },
    Heuristic, Route, SearchProblem,
};
use std::collections::VecDeque;

/// Minimum edge-count search. The returned route's cost still sums the real
/// weights of the traversed edges, so reports on weighted maps stay in the
/// map's units.
pub struct Bfs {}

impl Bfs {
    pub fn new() -> Self {
        Self {}
    }
}

impl SearchEngine for Bfs {
    fn search(
        &mut self,
        problem: &SearchProblem,
        _heuristic: &mut dyn Heuristic,
        termination: &mut TerminationCondition,
    ) -> (SearchResult, SearchStatistics) {
        let mut statistics = SearchStatistics::new();
        let graph = problem.graph();
        let mut queue = VecDeque::new();
        let mut search_space = SearchSpace::new(problem.initial());
        let root_id = search_space.get_root_id();

        search_space.get_node_mut(root_id).open(0., 0.);

        if problem.is_goal(problem.initial()) {
            let route = Route::trivial(graph.state_name(problem.initial()));
            return (SearchResult::Success(route), statistics);
        }

        queue.push_back(root_id);

        while let Some(node_id) = queue.pop_front() {
            if let Some(result) = termination.should_terminate() {
                return (result, statistics);
            }

            let node = search_space.get_node_mut(node_id);
            node.close();
            let state = node.get_state();
            let g_value = node.get_g();
            statistics.increment_expanded_nodes();

            for edge in graph.neighbours(state) {
                // A state already on the frontier or expanded gets no second
                // node; expansion is level-order, so the first node to reach
                // a state is at minimum depth regardless of edge weights.
                if search_space.is_reached(edge.target) {
                    continue;
                }
                let (child_id, child_node) = search_space.insert_or_get_node(edge.target, node_id);
                child_node.open(g_value + edge.cost, 0.);
                statistics.increment_generated_nodes(1);

                // Goal test on generation rather than on dequeue. This is
                // what yields the shortest-path guarantee in an unweighted
                // graph: the first node reaching the goal is at minimum
                // depth.
                if problem.is_goal(edge.target) {
                    return (
                        SearchResult::Success(search_space.extract_route(child_id, graph)),
                        statistics,
                    );
                }
                queue.push_back(child_id);
            }
        }

        (SearchResult::Unsolvable, statistics)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::search_engines::TerminationCondition;
    use crate::search::heuristics::ZeroHeuristic;
    use crate::test_utils::*;
    use assert_approx_eq::assert_approx_eq;

    fn run_bfs(problem: &SearchProblem) -> (SearchResult, SearchStatistics) {
        Bfs::new().search(
            problem,
            &mut ZeroHeuristic::new(),
            &mut TerminationCondition::unbounded(),
        )
    }

    #[test]
    fn metro_a_to_j_is_three_edges() {
        let problem = metro_problem("A", "J");
        let (result, _) = run_bfs(&problem);
        let route = result.route().expect("metro A to J is solvable");
        assert_eq!(route.states(), ["A", "C", "F", "J"]);
        assert_eq!(route.edges(), 3);
        assert_eq!(route.cost(), 3.0);
    }

    #[test]
    fn weighted_map_cost_sums_edge_weights() {
        // Fewest edges, not cheapest route: Arad -> Sibiu -> Fagaras ->
        // Bucharest. The reported cost must still be in kilometres, not an
        // edge count.
        let problem = romania_problem("Arad", "Bucharest");
        let (result, _) = run_bfs(&problem);
        let route = result.route().expect("Arad to Bucharest is solvable");
        assert_eq!(route.states(), ["Arad", "Sibiu", "Fagaras", "Bucharest"]);
        assert_eq!(route.edges(), 3);
        assert_approx_eq!(route.cost(), 450.0);
    }

    #[test]
    fn initial_equals_goal_expands_nothing() {
        let problem = metro_problem("A", "A");
        let (result, statistics) = run_bfs(&problem);
        let route = result.route().expect("trivial route");
        assert_eq!(route.edges(), 0);
        assert_eq!(route.cost(), 0.0);
        assert_eq!(statistics.expanded_nodes(), 0);
    }

    #[test]
    fn disconnected_goal_is_unsolvable() {
        let problem = disconnected_problem("A", "C");
        let (result, _) = run_bfs(&problem);
        assert_eq!(result, SearchResult::Unsolvable);
    }

    #[test]
    fn reruns_are_identical() {
        let problem = metro_problem("A", "J");
        let (first, first_statistics) = run_bfs(&problem);
        let (second, second_statistics) = run_bfs(&problem);
        assert_eq!(first, second);
        assert_eq!(
            first_statistics.expanded_nodes(),
            second_statistics.expanded_nodes()
        );
        assert_eq!(
            first_statistics.generated_nodes(),
            second_statistics.generated_nodes()
        );
    }
}
