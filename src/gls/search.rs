//! Guided local search over a single tour.
//!
//! # Algorithm
//!
//! 1. Descend with [`sweep`] on the augmented costs until no move improves.
//! 2. At that local optimum, raise the penalty of the tour arcs with maximum
//!    utility `cost / (1 + penalty)`.
//! 3. Repeat from the penalized landscape.
//!
//! After every sweep, partial or complete, the tour is re-priced on the raw
//! matrix and kept as the incumbent if strictly cheaper. The operators poll
//! the deadline inside each sweep. The loop ends when the deadline expires,
//! when no arc can be penalized, or after `max_stall_rounds` consecutive
//! penalty rounds without a new incumbent.
//!
//! # Reference
//!
//! Voudouris, C. & Tsang, E. (1999). "Guided local search and its application
//! to the traveling salesman problem", *European Journal of Operational
//! Research* 113(2), 469-499.

use log::{debug, trace};

use super::{PenalizedCost, PenaltyTable};
use crate::distance::{ArcCost, CostMatrix};
use crate::local_search::sweep;
use crate::termination::Deadline;

/// Why the search loop stopped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// The deadline expired or cancellation was requested.
    Deadline,
    /// Every arc of the local optimum had zero cost.
    NothingToPenalize,
    /// Too many penalty rounds without a new incumbent.
    Stalled,
}

/// Result of a guided local search run.
#[derive(Debug, Clone)]
pub struct SearchOutcome {
    /// Best visiting order found (depot excluded).
    pub best_route: Vec<usize>,
    /// Raw cost of `best_route`.
    pub best_cost: i64,
    /// Neighborhood sweeps executed.
    pub passes: usize,
    /// Penalty rounds executed.
    pub penalty_rounds: usize,
    /// Strict incumbent improvements.
    pub improvements: usize,
    /// Why the loop ended.
    pub stop_reason: StopReason,
}

/// Guided local search parameters bound to one matrix.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tour::distance::CostMatrix;
/// use u_tour::gls::GuidedLocalSearch;
/// use u_tour::termination::Deadline;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0, 10, 14, 10],
///     vec![10, 0, 10, 14],
///     vec![14, 10, 0, 10],
///     vec![10, 14, 10, 0],
/// ]).unwrap();
/// let gls = GuidedLocalSearch::new(&m, 0, 0.1, 50);
/// let outcome = gls.run(vec![2, 1, 3], &Deadline::start(Duration::from_secs(5), None));
/// assert_eq!(outcome.best_cost, 40);
/// ```
pub struct GuidedLocalSearch<'a> {
    matrix: &'a CostMatrix,
    depot: usize,
    lambda: f64,
    max_stall_rounds: usize,
}

impl<'a> GuidedLocalSearch<'a> {
    pub fn new(matrix: &'a CostMatrix, depot: usize, lambda: f64, max_stall_rounds: usize) -> Self {
        Self {
            matrix,
            depot,
            lambda,
            max_stall_rounds,
        }
    }

    /// Improves `initial` until a stop condition is met.
    ///
    /// The returned incumbent is never worse than `initial`.
    pub fn run(&self, initial: Vec<usize>, deadline: &Deadline) -> SearchOutcome {
        let mut penalties = PenaltyTable::new(self.matrix.size());
        let mut current = initial;
        let mut best_cost = self.matrix.route_cost(self.depot, &current);
        let mut best_route = current.clone();

        let mut passes = 0;
        let mut penalty_rounds = 0;
        let mut improvements = 0;
        let mut stall = 0;

        let stop_reason = loop {
            if deadline.is_expired() {
                break StopReason::Deadline;
            }

            let costs = PenalizedCost::new(self.matrix, &penalties, self.lambda);
            let moved = sweep(&mut current, self.depot, &costs, deadline);
            passes += 1;

            let cost = self.matrix.route_cost(self.depot, &current);
            if cost < best_cost {
                debug!("gls: new incumbent {cost} (was {best_cost}) after {passes} passes");
                best_cost = cost;
                best_route.clone_from(&current);
                improvements += 1;
                stall = 0;
            }

            if deadline.is_expired() {
                break StopReason::Deadline;
            }
            if moved {
                continue;
            }

            let arcs = closed_arcs(self.depot, &current);
            if penalties.penalize_max_utility(self.matrix, arcs) == 0 {
                break StopReason::NothingToPenalize;
            }
            penalty_rounds += 1;
            stall += 1;
            trace!("gls: penalty round {penalty_rounds}, stall {stall}");

            if stall >= self.max_stall_rounds {
                break StopReason::Stalled;
            }
        };

        SearchOutcome {
            best_route,
            best_cost,
            passes,
            penalty_rounds,
            improvements,
            stop_reason,
        }
    }
}

/// Arcs of the closed tour `depot → route… → depot`.
fn closed_arcs(depot: usize, route: &[usize]) -> impl Iterator<Item = (usize, usize)> + '_ {
    let nodes = std::iter::once(depot)
        .chain(route.iter().copied())
        .chain(std::iter::once(depot));
    nodes.clone().zip(nodes.skip(1))
}
