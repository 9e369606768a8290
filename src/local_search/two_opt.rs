//! 2-opt segment reversal.
//!
//! # Algorithm
//!
//! For each pair of positions (i, j) in the route, compute the change in cost
//! from reversing the segment `route[i..=j]`:
//!
//! ```text
//! delta = c(prev, r[j]) + c(r[i], next) - c(prev, r[i]) - c(r[j], next)
//!       + reversed(i..j) - forward(i..j)
//! ```
//!
//! The last term is zero on symmetric costs. On asymmetric costs it charges
//! the reversed direction of every arc inside the segment; prefix sums over
//! both directions keep each evaluation O(1).
//!
//! If delta < 0 the reversal is applied immediately (first improvement).
//! The deadline is polled before every row `i` and after every applied move.
//!
//! # Complexity
//!
//! O(n²) per pass, plus O(n) to refresh prefix sums after each applied move.
//!
//! # Reference
//!
//! Croes, G.A. (1958). "A method for solving traveling salesman problems",
//! *Operations Research* 6(6), 791-812.

use crate::distance::ArcCost;
use crate::termination::Deadline;

/// Cumulative arc costs along the route in both directions.
struct DirectedPrefix {
    forward: Vec<i64>,
    backward: Vec<i64>,
}

impl DirectedPrefix {
    fn build<C: ArcCost + ?Sized>(route: &[usize], costs: &C) -> Self {
        let mut forward = Vec::with_capacity(route.len());
        let mut backward = Vec::with_capacity(route.len());
        let (mut f, mut b) = (0, 0);
        forward.push(0);
        backward.push(0);
        for w in route.windows(2) {
            f += costs.arc_cost(w[0], w[1]);
            b += costs.arc_cost(w[1], w[0]);
            forward.push(f);
            backward.push(b);
        }
        Self { forward, backward }
    }

    /// Reversed minus forward cost of the arcs inside `route[i..=j]`.
    fn reversal_penalty(&self, i: usize, j: usize) -> i64 {
        (self.backward[j] - self.backward[i]) - (self.forward[j] - self.forward[i])
    }
}

/// Runs one first-improvement sweep of 2-opt over `route`.
///
/// `route` holds every node except `depot`. Returns `true` if at least one
/// reversal was applied. Stops early, keeping the moves made so far, once
/// `deadline` expires.
pub fn two_opt_pass<C: ArcCost + ?Sized>(
    route: &mut [usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> bool {
    let n = route.len();
    if n < 2 {
        return false;
    }

    let mut prefix = DirectedPrefix::build(route, costs);
    let mut improved = false;

    for i in 0..n - 1 {
        if deadline.is_expired() {
            break;
        }
        for j in i + 1..n {
            let delta = two_opt_delta(route, depot, costs, &prefix, i, j);
            if delta < 0 {
                route[i..=j].reverse();
                improved = true;
                if deadline.is_expired() {
                    return improved;
                }
                prefix = DirectedPrefix::build(route, costs);
            }
        }
    }

    improved
}

/// Applies 2-opt until no reversal improves the route.
///
/// Returns the improved order and its total cost.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tour::distance::{ArcCost, CostMatrix};
/// use u_tour::local_search::two_opt_improve;
/// use u_tour::termination::Deadline;
///
/// // Corners of a square, 0 → 1 → 3 → 2 crosses itself.
/// let m = CostMatrix::from_rows(vec![
///     vec![0, 10, 14, 10],
///     vec![10, 0, 10, 14],
///     vec![14, 10, 0, 10],
///     vec![10, 14, 10, 0],
/// ]).unwrap();
/// let deadline = Deadline::start(Duration::from_secs(5), None);
/// let (route, cost) = two_opt_improve(&[1, 3, 2], 0, &m, &deadline);
/// assert_eq!(cost, 40);
/// assert_eq!(cost, m.route_cost(0, &route));
/// ```
pub fn two_opt_improve<C: ArcCost + ?Sized>(
    route: &[usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> (Vec<usize>, i64) {
    let mut current = route.to_vec();
    while two_opt_pass(&mut current, depot, costs, deadline) {}
    let cost = costs.route_cost(depot, &current);
    (current, cost)
}

fn two_opt_delta<C: ArcCost + ?Sized>(
    route: &[usize],
    depot: usize,
    costs: &C,
    prefix: &DirectedPrefix,
    i: usize,
    j: usize,
) -> i64 {
    let n = route.len();
    let prev = if i == 0 { depot } else { route[i - 1] };
    let next = if j == n - 1 { depot } else { route[j + 1] };

    let old_cost = costs.arc_cost(prev, route[i]) + costs.arc_cost(route[j], next);
    let new_cost = costs.arc_cost(prev, route[j]) + costs.arc_cost(route[i], next);

    new_cost - old_cost + prefix.reversal_penalty(i, j)
}
