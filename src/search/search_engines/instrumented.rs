//! Instrumentation harness: wraps an engine invocation with wall-clock
//! timing and peak-memory sampling and condenses everything a caller wants
//! to print or compare into a [`SearchReport`].

use crate::search::{
    search_engines::{SearchEngineName, TerminationCondition},
    Heuristic, Route, SearchProblem,
};
use serde::Serialize;
use std::fmt;
use std::time::Duration;

#[derive(Debug, Clone, Serialize)]
pub struct SearchReport {
    /// Human-readable engine name
    pub engine: String,
    /// One of "success", "unsolvable", "time limit exceeded", "memory limit
    /// exceeded"
    pub outcome: String,
    /// The route, on success
    pub route: Option<Route>,
    /// Total route cost, on success
    pub cost: Option<f64>,
    /// Number of edges in the route, on success
    pub edges: Option<usize>,
    pub expanded_nodes: i64,
    pub generated_nodes: i64,
    /// Deepest depth limit tried; only iterative deepening sets this
    pub deepest_limit: Option<usize>,
    pub elapsed_seconds: f64,
    /// Peak resident memory observed during the search. `None` when the
    /// platform offers no way to sample it.
    pub peak_memory_bytes: Option<usize>,
}

impl SearchReport {
    pub fn peak_memory_display(&self) -> String {
        match self.peak_memory_bytes {
            Some(bytes) => format!("{:.2} KB", bytes as f64 / 1024.0),
            None => "unavailable".to_string(),
        }
    }
}

impl fmt::Display for SearchReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{} Results:", self.engine)?;
        writeln!(f, "{}", "-".repeat(50))?;
        match &self.route {
            Some(route) => {
                writeln!(f, "Path found: {}", route)?;
                writeln!(f, "Path length: {} edges", route.edges())?;
                writeln!(f, "Path cost: {}", route.cost())?;
            }
            None => writeln!(f, "No path found ({})", self.outcome)?,
        }
        writeln!(f, "Nodes expanded: {}", self.expanded_nodes)?;
        if let Some(limit) = self.deepest_limit {
            writeln!(f, "Maximum depth reached: {}", limit)?;
        }
        writeln!(f, "Time elapsed: {:.6} seconds", self.elapsed_seconds)?;
        write!(f, "Peak memory: {}", self.peak_memory_display())
    }
}

/// Run `engine_name` over `problem` under optional time and memory limits,
/// returning the full report.
pub fn run_instrumented(
    engine_name: SearchEngineName,
    problem: &SearchProblem,
    heuristic: &mut dyn Heuristic,
    time_limit: Option<Duration>,
    memory_limit_mb: Option<usize>,
) -> SearchReport {
    let mut engine = engine_name.create();
    let mut termination = TerminationCondition::new(time_limit, memory_limit_mb);

    let (result, statistics) = engine.search(problem, heuristic, &mut termination);

    statistics.finalise_search();
    termination.finalise();

    let route: Option<Route> = result.route().cloned();
    SearchReport {
        engine: engine_name.display_name().to_string(),
        outcome: result.describe().to_string(),
        cost: route.as_ref().map(Route::cost),
        edges: route.as_ref().map(Route::edges),
        route,
        expanded_nodes: statistics.expanded_nodes(),
        generated_nodes: statistics.generated_nodes(),
        deepest_limit: statistics.deepest_limit(),
        elapsed_seconds: termination.elapsed().as_secs_f64(),
        peak_memory_bytes: termination.peak_memory_usage_bytes(),
    }
}
