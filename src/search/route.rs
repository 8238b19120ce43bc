//! A route is the ordered sequence of states from the initial state to the
//! goal, together with its total cost. This module provides the [`Route`]
//! struct, which every engine produces on success.

use itertools::Itertools;
use serde::Serialize;
use std::fmt;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Route {
    states: Vec<String>,
    cost: f64,
}

impl Route {
    pub fn new(states: Vec<String>, cost: f64) -> Self {
        debug_assert!(!states.is_empty(), "a route contains at least the initial state");
        Self { states, cost }
    }

    /// The route for `initial == goal`: one state, cost zero.
    pub fn trivial(state: &str) -> Self {
        Self {
            states: vec![state.to_string()],
            cost: 0.0,
        }
    }

    pub fn states(&self) -> &[String] {
        &self.states
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    /// Number of edges traversed, one less than the number of states.
    pub fn edges(&self) -> usize {
        self.states.len() - 1
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.states.iter().join(" -> "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_joins_states_with_arrows() {
        let route = Route::new(
            vec!["A".to_string(), "C".to_string(), "F".to_string()],
            2.0,
        );
        assert_eq!(route.to_string(), "A -> C -> F");
        assert_eq!(route.edges(), 2);
    }

    #[test]
    fn trivial_route_has_no_edges() {
        let route = Route::trivial("A");
        assert_eq!(route.edges(), 0);
        assert_eq!(route.cost(), 0.0);
        assert_eq!(route.to_string(), "A");
    }
}
