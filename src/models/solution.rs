//! Solution, solver phase, and statistics types.

use std::time::Duration;

use super::Tour;

/// Lifecycle of a single solve call.
///
/// `Unsolved → Constructing → Improving → {Solved | Failed}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SolverPhase {
    /// Nothing has run yet.
    #[default]
    Unsolved,
    /// Building the initial tour.
    Constructing,
    /// Guided local search over the initial tour.
    Improving,
    /// A feasible tour was produced.
    Solved,
    /// No feasible tour could be produced.
    Failed,
}

/// Counters collected during a solve.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SolveStats {
    /// Cost of the constructed tour before improvement.
    pub initial_cost: i64,
    /// Phase the solver ended in.
    pub final_phase: SolverPhase,
    /// Neighborhood sweeps executed.
    pub passes: usize,
    /// Local optima at which penalties were raised.
    pub penalty_rounds: usize,
    /// Number of times a strictly better incumbent was found.
    pub improvements: usize,
    /// Wall-clock time spent in the solver.
    pub elapsed: Duration,
    /// `true` if the time budget (or cancellation) ended the search.
    pub deadline_hit: bool,
}

/// A solved tour with its cost in matrix units.
///
/// # Examples
///
/// ```
/// use u_tour::models::{Solution, SolveStats, Tour};
///
/// let tour = Tour::new(0, &[1], 2).unwrap();
/// let sol = Solution::new(tour, 2_000, SolveStats::default());
/// assert_eq!(sol.cost(), 2_000);
/// assert!((sol.distance_km() - 2.0).abs() < 1e-12);
/// assert_eq!(sol.route(), &[0, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct Solution {
    tour: Tour,
    cost: i64,
    stats: SolveStats,
}

impl Solution {
    /// Creates a solution.
    pub fn new(tour: Tour, cost: i64, stats: SolveStats) -> Self {
        Self { tour, cost, stats }
    }

    /// The closed tour.
    pub fn tour(&self) -> &Tour {
        &self.tour
    }

    /// Node sequence, depot at both ends.
    pub fn route(&self) -> &[usize] {
        self.tour.nodes()
    }

    /// Total cost from the unpenalized matrix.
    pub fn cost(&self) -> i64 {
        self.cost
    }

    /// Total cost read as meters and converted to kilometers.
    pub fn distance_km(&self) -> f64 {
        self.cost as f64 / 1000.0
    }

    /// Solve statistics.
    pub fn stats(&self) -> &SolveStats {
        &self.stats
    }
}
