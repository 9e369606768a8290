//! Tour solver: path-cheapest-arc construction followed by guided local search.
//!
//! The solver only sees a [`CostMatrix`]; it does not know or care how the
//! costs were derived and accepts asymmetric matrices unchanged.

mod config;

pub use config::{
    SolverConfig, DEFAULT_LAMBDA_COEFFICIENT, DEFAULT_MAX_STALL_ROUNDS, DEFAULT_TIME_LIMIT,
};

use log::{debug, info, warn};

use crate::constructive::path_cheapest_arc;
use crate::distance::CostMatrix;
use crate::error::{Result, TourError};
use crate::gls::{GuidedLocalSearch, StopReason};
use crate::models::{Solution, SolveStats, SolverPhase, Tour};
use crate::termination::Deadline;

/// Solves the closed tour over `matrix` with the given configuration.
///
/// # Examples
///
/// ```
/// use u_tour::distance::CostMatrix;
/// use u_tour::solver::{solve, SolverConfig};
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0, 10, 14, 10],
///     vec![10, 0, 10, 14],
///     vec![14, 10, 0, 10],
///     vec![10, 14, 10, 0],
/// ]).unwrap();
/// let solution = solve(&m, &SolverConfig::default()).unwrap();
/// assert_eq!(solution.cost(), 40);
/// assert_eq!(solution.route().first(), Some(&0));
/// assert_eq!(solution.route().last(), Some(&0));
/// ```
pub fn solve(matrix: &CostMatrix, config: &SolverConfig) -> Result<Solution> {
    TourSolver::new(config.clone()).solve(matrix)
}

/// Reusable solver holding a configuration.
///
/// Each [`TourSolver::solve`] call owns all of its working buffers, so one
/// solver can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct TourSolver {
    config: SolverConfig,
}

impl TourSolver {
    pub fn new(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Builds an initial tour and improves it until the budget runs out or
    /// the search stalls.
    ///
    /// Returns `NoSolution` for matrices with fewer than two nodes,
    /// `InvalidInput` for a bad depot or configuration, and
    /// `ComputationFailure` if the resulting tour is malformed or its cost
    /// overflows.
    pub fn solve(&self, matrix: &CostMatrix) -> Result<Solution> {
        self.config.validate()?;
        let deadline = Deadline::start(self.config.time_limit, self.config.cancel.clone());
        let depot = self.config.depot;
        let n = matrix.size();

        let mut phase = SolverPhase::Unsolved;
        advance(&mut phase, SolverPhase::Constructing);

        let initial = match path_cheapest_arc(matrix, depot) {
            Ok(route) => route,
            Err(e) => {
                advance(&mut phase, SolverPhase::Failed);
                warn!("construction failed for {n} nodes: {e}");
                return Err(e);
            }
        };
        let initial_cost = tour_cost(matrix, &Tour::new(depot, &initial, n)?)?;
        debug!("initial tour cost {initial_cost}");

        advance(&mut phase, SolverPhase::Improving);
        let gls = GuidedLocalSearch::new(
            matrix,
            depot,
            self.config.lambda_coefficient,
            self.config.max_stall_rounds,
        );
        let outcome = gls.run(initial, &deadline);
        if outcome.stop_reason == StopReason::Deadline && outcome.penalty_rounds == 0 {
            warn!("time budget ran out before the first local optimum");
        }

        let tour = Tour::new(depot, &outcome.best_route, n).inspect_err(|_| {
            advance(&mut phase, SolverPhase::Failed);
        })?;
        let cost = tour_cost(matrix, &tour)?;
        advance(&mut phase, SolverPhase::Solved);

        let stats = SolveStats {
            initial_cost,
            final_phase: phase,
            passes: outcome.passes,
            penalty_rounds: outcome.penalty_rounds,
            improvements: outcome.improvements,
            elapsed: deadline.elapsed(),
            deadline_hit: outcome.stop_reason == StopReason::Deadline,
        };
        info!(
            "solved {n} nodes: cost {cost} (initial {initial_cost}), {} passes, {} penalty rounds, {:?}, stop: {:?}",
            stats.passes, stats.penalty_rounds, stats.elapsed, outcome.stop_reason
        );

        Ok(Solution::new(tour, cost, stats))
    }
}

fn advance(phase: &mut SolverPhase, next: SolverPhase) {
    debug!("solver phase {phase:?} -> {next:?}");
    *phase = next;
}

/// Sums the raw matrix cost of every arc of `tour`, checking for overflow.
fn tour_cost(matrix: &CostMatrix, tour: &Tour) -> Result<i64> {
    tour.arcs()
        .try_fold(0i64, |acc, (from, to)| acc.checked_add(matrix.get(from, to)))
        .ok_or_else(|| TourError::computation("tour cost overflows i64"))
}
