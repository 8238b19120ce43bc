//! Shared fixtures for the engine tests.

use crate::search::{
    heuristics::StraightLine, Graph, MapName, SearchProblem,
};

pub fn metro_graph() -> Graph {
    MapName::Metro.graph()
}

pub fn metro_problem(initial: &str, goal: &str) -> SearchProblem {
    SearchProblem::new(metro_graph(), initial, goal).expect("metro states are valid")
}

pub fn romania_problem(initial: &str, goal: &str) -> SearchProblem {
    SearchProblem::new(MapName::Romania.graph(), initial, goal).expect("romania cities are valid")
}

pub fn romania_heuristic(graph: &Graph) -> StraightLine {
    // Same table the map factory uses, rebuilt here so tests can hold a
    // concrete type.
    StraightLine::from_table(
        graph,
        &[
            ("Arad", 366.0),
            ("Bucharest", 0.0),
            ("Craiova", 160.0),
            ("Drobeta", 242.0),
            ("Eforie", 161.0),
            ("Fagaras", 176.0),
            ("Giurgiu", 77.0),
            ("Hirsova", 151.0),
            ("Iasi", 226.0),
            ("Lugoj", 244.0),
            ("Mehadia", 241.0),
            ("Neamt", 234.0),
            ("Oradea", 380.0),
            ("Pitesti", 100.0),
            ("Rimnicu Vilcea", 193.0),
            ("Sibiu", 253.0),
            ("Timisoara", 329.0),
            ("Urziceni", 80.0),
            ("Vaslui", 199.0),
            ("Zerind", 374.0),
        ],
    )
}

/// Two components: A-B and C-D. Searching from A to C must fail finitely.
pub fn disconnected_problem(initial: &str, goal: &str) -> SearchProblem {
    let mut graph = Graph::new();
    graph.add_unit_edge("A", "B");
    graph.add_unit_edge("B", "A");
    graph.add_unit_edge("C", "D");
    graph.add_unit_edge("D", "C");
    SearchProblem::new(graph, initial, goal).expect("fixture states are valid")
}

/// Diamond plus a tail: A-B, A-C, B-D, C-D, D-E. D is reachable through
/// two branches, which is what the per-branch cycle check must allow.
pub fn diamond_problem(initial: &str, goal: &str) -> SearchProblem {
    let mut graph = Graph::new();
    for (a, b) in [("A", "B"), ("A", "C"), ("B", "D"), ("C", "D"), ("D", "E")] {
        graph.add_unit_edge(a, b);
        graph.add_unit_edge(b, a);
    }
    SearchProblem::new(graph, initial, goal).expect("fixture states are valid")
}
