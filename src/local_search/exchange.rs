//! Node exchange (swap) operator.
//!
//! # Algorithm
//!
//! Swaps the positions of two nodes in the tour. Adjacent and non-adjacent
//! pairs touch different arc sets and are evaluated separately:
//!
//! ```text
//! adjacent  (.., p, a, b, x, ..) → (.., p, b, a, x, ..)
//! separated (.., p, a, q, .., r, b, x, ..) → (.., p, b, q, .., r, a, x, ..)
//! ```
//!
//! The best swap of a pass is applied if it reduces cost. The deadline is
//! polled before every row `i`; on expiry the best swap seen so far is applied.
//!
//! # Complexity
//!
//! O(n²) per pass.

use crate::distance::ArcCost;
use crate::termination::Deadline;

/// Runs one best-improvement exchange pass. Returns `true` if a swap was applied.
pub fn exchange_pass<C: ArcCost + ?Sized>(
    route: &mut [usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> bool {
    let n = route.len();
    if n < 2 {
        return false;
    }

    let mut best: Option<(usize, usize, i64)> = None;
    for i in 0..n - 1 {
        if deadline.is_expired() {
            break;
        }
        for j in i + 1..n {
            let delta = exchange_delta(route, depot, costs, i, j);
            if delta < 0 && best.is_none_or(|(_, _, d)| delta < d) {
                best = Some((i, j, delta));
            }
        }
    }

    match best {
        Some((i, j, _)) => {
            route.swap(i, j);
            true
        }
        None => false,
    }
}

/// Applies exchange moves until no swap improves the route.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tour::distance::CostMatrix;
/// use u_tour::local_search::exchange_improve;
/// use u_tour::termination::Deadline;
///
/// let pos = [0i64, 1, 2, 3, 4];
/// let rows: Vec<Vec<i64>> = pos.iter().map(|a| pos.iter().map(|b| (a - b).abs()).collect()).collect();
/// let m = CostMatrix::from_rows(rows).unwrap();
///
/// let deadline = Deadline::start(Duration::from_secs(5), None);
/// let (route, cost) = exchange_improve(&[1, 3, 2, 4], 0, &m, &deadline);
/// assert_eq!(cost, 8);
/// assert_eq!(route.len(), 4);
/// ```
pub fn exchange_improve<C: ArcCost + ?Sized>(
    route: &[usize],
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> (Vec<usize>, i64) {
    let mut current = route.to_vec();
    while exchange_pass(&mut current, depot, costs, deadline) {}
    let cost = costs.route_cost(depot, &current);
    (current, cost)
}

fn exchange_delta<C: ArcCost + ?Sized>(
    route: &[usize],
    depot: usize,
    costs: &C,
    i: usize,
    j: usize,
) -> i64 {
    let n = route.len();
    let at = |k: usize| route[k];
    let before = |k: usize| if k == 0 { depot } else { route[k - 1] };
    let after = |k: usize| if k + 1 == n { depot } else { route[k + 1] };

    let (a, b) = (at(i), at(j));
    let (p, x) = (before(i), after(j));

    if j == i + 1 {
        let old = costs.arc_cost(p, a) + costs.arc_cost(a, b) + costs.arc_cost(b, x);
        let new = costs.arc_cost(p, b) + costs.arc_cost(b, a) + costs.arc_cost(a, x);
        return new - old;
    }

    let (q, r) = (after(i), before(j));
    let old = costs.arc_cost(p, a)
        + costs.arc_cost(a, q)
        + costs.arc_cost(r, b)
        + costs.arc_cost(b, x);
    let new = costs.arc_cost(p, b)
        + costs.arc_cost(b, q)
        + costs.arc_cost(r, a)
        + costs.arc_cost(a, x);
    new - old
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::distance::CostMatrix;

    fn asymmetric() -> CostMatrix {
        CostMatrix::from_rows(vec![
            vec![0, 3, 9, 4, 7, 2],
            vec![5, 0, 2, 8, 6, 9],
            vec![1, 7, 0, 3, 9, 4],
            vec![6, 2, 5, 0, 4, 8],
            vec![8, 4, 3, 1, 0, 5],
            vec![3, 6, 1, 7, 2, 0],
        ])
        .expect("valid")
    }

    #[test]
    fn test_exchange_delta_exact() {
        let m = asymmetric();
        let route = vec![1, 2, 3, 4, 5];
        let base = m.route_cost(0, &route);
        for i in 0..route.len() - 1 {
            for j in i + 1..route.len() {
                let mut moved = route.clone();
                moved.swap(i, j);
                let expected = m.route_cost(0, &moved) - base;
                assert_eq!(exchange_delta(&route, 0, &m, i, j), expected, "swap {i},{j}");
            }
        }
    }

    #[test]
    fn test_exchange_never_worsens() {
        let m = asymmetric();
        let start = [5, 3, 1, 4, 2];
        let open = Deadline::start(Duration::from_secs(60), None);
        let (_, cost) = exchange_improve(&start, 0, &m, &open);
        assert!(cost <= m.route_cost(0, &start));
    }

    #[test]
    fn test_exchange_short_route() {
        let m = asymmetric();
        let mut route = vec![3];
        let open = Deadline::start(Duration::from_secs(60), None);
        assert!(!exchange_pass(&mut route, 0, &m, &open));
    }

    #[test]
    fn test_exchange_expired_deadline_leaves_route() {
        let m = asymmetric();
        let start = vec![5, 3, 1, 4, 2];
        let mut route = start.clone();
        let expired = Deadline::start(Duration::ZERO, None);
        assert!(!exchange_pass(&mut route, 0, &m, &expired));
        assert_eq!(route, start);
    }
}
