//! Arc penalties and the augmented cost they induce.

use crate::distance::{ArcCost, CostMatrix};

/// Upper bound on a single augmented arc cost.
const AUGMENTED_COST_CAP: i64 = 1 << 44;

/// Per-solve penalty counters, one per directed arc.
#[derive(Debug, Clone)]
pub struct PenaltyTable {
    counts: Vec<u32>,
    size: usize,
}

impl PenaltyTable {
    /// Creates an all-zero table for `size` nodes.
    pub fn new(size: usize) -> Self {
        Self {
            counts: vec![0; size * size],
            size,
        }
    }

    /// Penalty of the arc `from → to`.
    pub fn get(&self, from: usize, to: usize) -> u32 {
        self.counts[from * self.size + to]
    }

    fn increment(&mut self, from: usize, to: usize) {
        let slot = &mut self.counts[from * self.size + to];
        *slot = slot.saturating_add(1);
    }

    /// Penalizes the arcs of a local optimum with the highest utility.
    ///
    /// The utility of arc `a` is `cost(a) / (1 + penalty(a))`; every arc that
    /// ties for the maximum is incremented. Comparisons are done on integer
    /// cross-products so ties are exact.
    ///
    /// Returns the number of arcs penalized, zero when every arc has zero
    /// cost (the penalty scheme cannot steer the search any further).
    pub fn penalize_max_utility(
        &mut self,
        matrix: &CostMatrix,
        arcs: impl IntoIterator<Item = (usize, usize)>,
    ) -> usize {
        let arcs: Vec<(usize, usize)> = arcs.into_iter().collect();

        // (cost, 1 + penalty) of the best arc so far
        let mut best: Option<(i128, i128)> = None;
        for &(from, to) in &arcs {
            let cost = i128::from(matrix.get(from, to));
            let weight = 1 + i128::from(self.get(from, to));
            if best.is_none_or(|(bc, bw)| cost * bw > bc * weight) {
                best = Some((cost, weight));
            }
        }

        let Some((best_cost, best_weight)) = best else {
            return 0;
        };
        if best_cost == 0 {
            return 0;
        }

        let mut penalized = 0;
        for (from, to) in arcs {
            let cost = i128::from(matrix.get(from, to));
            let weight = 1 + i128::from(self.get(from, to));
            if cost * best_weight == best_cost * weight {
                self.increment(from, to);
                penalized += 1;
            }
        }
        penalized
    }
}

/// Matrix costs augmented with `lambda · penalty · cost` per arc.
///
/// # Examples
///
/// ```
/// use u_tour::distance::{ArcCost, CostMatrix};
/// use u_tour::gls::{PenalizedCost, PenaltyTable};
///
/// let m = CostMatrix::from_rows(vec![vec![0, 100], vec![40, 0]]).unwrap();
/// let mut penalties = PenaltyTable::new(2);
/// assert_eq!(penalties.penalize_max_utility(&m, [(0, 1), (1, 0)]), 1);
///
/// let costs = PenalizedCost::new(&m, &penalties, 0.5);
/// assert_eq!(costs.arc_cost(0, 1), 150);
/// assert_eq!(costs.arc_cost(1, 0), 40);
/// ```
pub struct PenalizedCost<'a> {
    matrix: &'a CostMatrix,
    penalties: &'a PenaltyTable,
    lambda: f64,
}

impl<'a> PenalizedCost<'a> {
    pub fn new(matrix: &'a CostMatrix, penalties: &'a PenaltyTable, lambda: f64) -> Self {
        Self {
            matrix,
            penalties,
            lambda,
        }
    }
}

impl ArcCost for PenalizedCost<'_> {
    fn arc_cost(&self, from: usize, to: usize) -> i64 {
        let base = self.matrix.get(from, to);
        let penalty = self.penalties.get(from, to);
        if penalty == 0 {
            return base;
        }
        let extra = (self.lambda * f64::from(penalty) * base as f64) as i64;
        base.saturating_add(extra).min(AUGMENTED_COST_CAP)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn triangle() -> CostMatrix {
        CostMatrix::from_rows(vec![vec![0, 6, 3], vec![6, 0, 6], vec![3, 6, 0]]).expect("valid")
    }

    #[test]
    fn test_penalize_ties() {
        let m = triangle();
        let mut table = PenaltyTable::new(3);
        // Arcs 0→1 and 1→2 both cost 6.
        assert_eq!(table.penalize_max_utility(&m, [(0, 1), (1, 2), (2, 0)]), 2);
        assert_eq!(table.get(0, 1), 1);
        assert_eq!(table.get(1, 2), 1);
        assert_eq!(table.get(2, 0), 0);
        assert_eq!(table.get(1, 0), 0);
    }

    #[test]
    fn test_utility_decays_with_penalty() {
        let m = triangle();
        let mut table = PenaltyTable::new(3);
        let arcs = [(0, 1), (1, 2), (2, 0)];
        table.penalize_max_utility(&m, arcs);
        // Utilities are now 3, 3, 3: everything ties.
        assert_eq!(table.penalize_max_utility(&m, arcs), 3);
        assert_eq!(table.get(2, 0), 1);
    }

    #[test]
    fn test_zero_cost_arcs_stall() {
        let m = CostMatrix::new(3);
        let mut table = PenaltyTable::new(3);
        assert_eq!(table.penalize_max_utility(&m, [(0, 1), (1, 2), (2, 0)]), 0);
        assert_eq!(table.penalize_max_utility(&m, std::iter::empty()), 0);
    }

    #[test]
    fn test_penalized_cost_unpenalized_is_raw() {
        let m = triangle();
        let table = PenaltyTable::new(3);
        let costs = PenalizedCost::new(&m, &table, 0.1);
        for i in 0..3 {
            for j in 0..3 {
                assert_eq!(costs.arc_cost(i, j), m.get(i, j));
            }
        }
    }

    #[test]
    fn test_penalized_cost_is_directed() {
        let m = triangle();
        let mut table = PenaltyTable::new(3);
        table.penalize_max_utility(&m, [(0, 1)]);
        let costs = PenalizedCost::new(&m, &table, 1.0);
        assert_eq!(costs.arc_cost(0, 1), 12);
        assert_eq!(costs.arc_cost(1, 0), 6);
    }
}
