use crate::search::{Graph, StateId};
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ProblemError {
    #[error("{role} state {name:?} is not part of the graph")]
    UnknownState { role: &'static str, name: String },
}

/// A single search instance: a read-only graph plus validated initial and
/// goal states. The problem never changes during a search, so it can be
/// shared freely between invocations.
#[derive(Debug, Clone)]
pub struct SearchProblem {
    graph: Graph,
    initial: StateId,
    goal: StateId,
}

impl SearchProblem {
    /// Build a problem, rejecting initial or goal names the graph does not
    /// know about. Validation happens here so the engines never have to.
    pub fn new(graph: Graph, initial: &str, goal: &str) -> Result<Self, ProblemError> {
        let initial = graph
            .state_id(initial)
            .ok_or_else(|| ProblemError::UnknownState {
                role: "initial",
                name: initial.to_string(),
            })?;
        let goal = graph.state_id(goal).ok_or_else(|| ProblemError::UnknownState {
            role: "goal",
            name: goal.to_string(),
        })?;
        Ok(Self {
            graph,
            initial,
            goal,
        })
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    pub fn initial(&self) -> StateId {
        self.initial
    }

    pub fn goal(&self) -> StateId {
        self.goal
    }

    pub fn is_goal(&self, state: StateId) -> bool {
        state == self.goal
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    #[test]
    fn valid_states_accepted() {
        let problem = SearchProblem::new(metro_graph(), "A", "J").unwrap();
        assert!(problem.is_goal(problem.goal()));
        assert!(!problem.is_goal(problem.initial()));
    }

    #[test]
    fn unknown_initial_rejected() {
        let error = SearchProblem::new(metro_graph(), "Z", "J").unwrap_err();
        assert_eq!(
            error,
            ProblemError::UnknownState {
                role: "initial",
                name: "Z".to_string()
            }
        );
    }

    #[test]
    fn unknown_goal_rejected() {
        let error = SearchProblem::new(metro_graph(), "A", "Q").unwrap_err();
        assert_eq!(
            error,
            ProblemError::UnknownState {
                role: "goal",
                name: "Q".to_string()
            }
        );
    }
}
