//! Or-opt segment relocation.
//!
//! # Algorithm
//!
//! Tries moving segments of 1, 2, or 3 consecutive nodes to a different
//! position in the tour, keeping their orientation. A segment of length 1 is
//! the classic single-node relocate move.
//!
//! For each segment size k ∈ {1, 2, 3} the best relocation over all start and
//! target positions is applied if it reduces cost. Orientation is preserved,
//! so the delta is exact on asymmetric costs too. The deadline is polled
//! before every start position; on expiry the best move seen so far is applied.
//!
//! # Complexity
//!
//! O(n²) per pass.
//!
//! # Reference
//!
//! Or, I. (1976). "Traveling Salesman-Type Combinatorial Problems and Their
//! Relation to the Logistics of Blood Banking". PhD thesis.

use crate::distance::ArcCost;
use crate::termination::Deadline;

/// Longest segment moved as a unit.
const MAX_SEGMENT: usize = 3;

/// Runs one Or-opt pass for each segment length.
///
/// Returns `true` if any relocation was applied.
pub fn or_opt_pass<C: ArcCost + ?Sized>(
    route: &mut Vec<usize>,
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> bool {
    let mut improved = false;
    for seg_len in 1..=MAX_SEGMENT.min(route.len()) {
        if deadline.is_expired() {
            break;
        }
        if relocate_best_segment(route, depot, costs, seg_len, deadline) {
            improved = true;
        }
    }
    improved
}

/// Applies Or-opt until no relocation improves the route.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tour::distance::{ArcCost, CostMatrix};
/// use u_tour::local_search::or_opt_improve;
/// use u_tour::termination::Deadline;
///
/// // Points on a line at 0, 1, 2, 3; node 3 is visited too early.
/// let pos = [0i64, 1, 2, 3];
/// let rows: Vec<Vec<i64>> = pos.iter().map(|a| pos.iter().map(|b| (a - b).abs()).collect()).collect();
/// let m = CostMatrix::from_rows(rows).unwrap();
///
/// let deadline = Deadline::start(Duration::from_secs(5), None);
/// let (route, cost) = or_opt_improve(&[3, 1, 2], 0, &m, &deadline);
/// assert_eq!(cost, 6);
/// assert!(cost < m.route_cost(0, &[3, 1, 2]));
/// assert_eq!(route.len(), 3);
/// ```
pub fn or_opt_improve<C: ArcCost + ?Sized>(
    route: &[usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> (Vec<usize>, i64) {
    let mut current = route.to_vec();
    while or_opt_pass(&mut current, depot, costs, deadline) {}
    let cost = costs.route_cost(depot, &current);
    (current, cost)
}

/// Finds and applies the best relocation of a `seg_len` segment.
fn relocate_best_segment<C: ArcCost + ?Sized>(
    route: &mut Vec<usize>,
    depot: usize,
    costs: &C,
    seg_len: usize,
    deadline: &Deadline,
) -> bool {
    let n = route.len();
    if n < seg_len + 1 {
        return false;
    }

    let mut best: Option<(usize, usize, i64)> = None;

    for from in 0..=(n - seg_len) {
        if deadline.is_expired() {
            break;
        }
        let prev = if from == 0 { depot } else { route[from - 1] };
        let after = if from + seg_len == n {
            depot
        } else {
            route[from + seg_len]
        };
        let first = route[from];
        let last = route[from + seg_len - 1];

        // prev → first … last → after becomes prev → after
        let removal_gain =
            costs.arc_cost(prev, first) + costs.arc_cost(last, after) - costs.arc_cost(prev, after);

        // `to` is the index in the original route the segment is inserted before;
        // `to == n` appends before the closing depot.
        for to in 0..=n {
            if to >= from && to <= from + seg_len {
                continue;
            }
            let ins_prev = if to == 0 { depot } else { route[to - 1] };
            let ins_next = if to == n { depot } else { route[to] };

            let insertion_cost = costs.arc_cost(ins_prev, first) + costs.arc_cost(last, ins_next)
                - costs.arc_cost(ins_prev, ins_next);
            let delta = insertion_cost - removal_gain;

            if delta < 0 && best.is_none_or(|(_, _, d)| delta < d) {
                best = Some((from, to, delta));
            }
        }
    }

    let Some((from, to, _)) = best else {
        return false;
    };

    let segment: Vec<usize> = route.drain(from..from + seg_len).collect();
    let insert_pos = if to > from { to - seg_len } else { to };
    for (offset, node) in segment.into_iter().enumerate() {
        route.insert(insert_pos + offset, node);
    }
    true
}
