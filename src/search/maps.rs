//! The two fixed problem instances from the coursework: the ten-station
//! metro network and the Romania road map with straight-line distances to
//! Bucharest.

use crate::search::{
    heuristics::{Heuristic, StraightLine, ZeroHeuristic},
    Graph,
};
use clap;

/// Metro adjacency, states `A` through `J`. The network is symmetric and
/// every direction is declared here explicitly; nothing mirrors edges at
/// traversal time.
const METRO_ADJACENCY: &[(&str, &[&str])] = &[
    ("A", &["B", "C"]),
    ("B", &["A", "D", "E"]),
    ("C", &["A", "F"]),
    ("D", &["B", "G"]),
    ("E", &["B", "H", "I"]),
    ("F", &["C", "J"]),
    ("G", &["D"]),
    ("H", &["E"]),
    ("I", &["E", "J"]),
    ("J", &["F", "I"]),
];

/// Romania road distances in kilometres. Roads run both ways; both
/// directions are added when the graph is built.
const ROMANIA_ROADS: &[(&str, &str, f64)] = &[
    ("Arad", "Zerind", 75.0),
    ("Arad", "Sibiu", 140.0),
    ("Arad", "Timisoara", 118.0),
    ("Zerind", "Oradea", 71.0),
    ("Oradea", "Sibiu", 151.0),
    ("Timisoara", "Lugoj", 111.0),
    ("Lugoj", "Mehadia", 70.0),
    ("Mehadia", "Drobeta", 75.0),
    ("Drobeta", "Craiova", 120.0),
    ("Craiova", "Rimnicu Vilcea", 146.0),
    ("Craiova", "Pitesti", 138.0),
    ("Rimnicu Vilcea", "Sibiu", 80.0),
    ("Rimnicu Vilcea", "Pitesti", 97.0),
    ("Sibiu", "Fagaras", 99.0),
    ("Fagaras", "Bucharest", 211.0),
    ("Pitesti", "Bucharest", 101.0),
    ("Bucharest", "Giurgiu", 90.0),
    ("Bucharest", "Urziceni", 85.0),
    ("Urziceni", "Hirsova", 98.0),
    ("Hirsova", "Eforie", 86.0),
    ("Urziceni", "Vaslui", 142.0),
    ("Vaslui", "Iasi", 92.0),
    ("Iasi", "Neamt", 87.0),
];

/// Straight-line distance from each city to Bucharest, in kilometres. Only
/// valid as a heuristic when the goal is Bucharest.
const ROMANIA_STRAIGHT_LINE_TO_BUCHAREST: &[(&str, f64)] = &[
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
];

#[derive(clap::ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
#[clap(rename_all = "kebab-case")]
pub enum MapName {
    #[clap(help = "The ten-station metro network, states A through J.")]
    Metro,
    #[clap(help = "The Romania road map, weighted by road distance.")]
    Romania,
}

impl MapName {
    pub fn graph(&self) -> Graph {
        let mut graph = Graph::new();
        match self {
            MapName::Metro => {
                for &(from, neighbours) in METRO_ADJACENCY {
                    for &to in neighbours {
                        graph.add_unit_edge(from, to);
                    }
                }
            }
            MapName::Romania => {
                for &(a, b, distance) in ROMANIA_ROADS {
                    graph.add_edge(a, b, distance);
                    graph.add_edge(b, a, distance);
                }
            }
        }
        graph
    }

    pub fn default_initial(&self) -> &'static str {
        match self {
            MapName::Metro => "A",
            MapName::Romania => "Arad",
        }
    }

    pub fn default_goal(&self) -> &'static str {
        match self {
            MapName::Metro => "J",
            MapName::Romania => "Bucharest",
        }
    }

    /// Heuristic for informed search towards `goal`. The straight-line
    /// table is tied to Bucharest; any other goal falls back to the zero
    /// heuristic rather than handing A* an inadmissible estimate.
    pub fn heuristic(&self, graph: &Graph, goal: &str) -> Box<dyn Heuristic> {
        match self {
            MapName::Romania if goal == "Bucharest" => Box::new(StraightLine::from_table(
                graph,
                ROMANIA_STRAIGHT_LINE_TO_BUCHAREST,
            )),
            _ => Box::new(ZeroHeuristic::new()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn metro_declares_every_direction() {
        let graph = MapName::Metro.graph();
        assert_eq!(graph.num_states(), 10);
        for &(from, neighbours) in METRO_ADJACENCY {
            let from_id = graph.state_id(from).unwrap();
            for &to in neighbours {
                let to_id = graph.state_id(to).unwrap();
                assert!(
                    graph.neighbours(to_id).iter().any(|e| e.target == from_id),
                    "edge {to} -> {from} missing"
                );
            }
        }
    }

    #[test]
    fn romania_has_twenty_cities() {
        let graph = MapName::Romania.graph();
        assert_eq!(graph.num_states(), 20);
        let bucharest = graph.state_id("Bucharest").unwrap();
        assert_eq!(graph.neighbours(bucharest).len(), 4);
    }

    #[test]
    fn straight_line_table_covers_every_city() {
        let graph = MapName::Romania.graph();
        assert_eq!(ROMANIA_STRAIGHT_LINE_TO_BUCHAREST.len(), graph.num_states());
        for &(city, distance) in ROMANIA_STRAIGHT_LINE_TO_BUCHAREST {
            assert!(graph.state_id(city).is_some(), "unknown city {city}");
            assert!(distance >= 0.0);
        }
    }
}
