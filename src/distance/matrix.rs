//! Dense integer cost matrix.

use crate::error::{Result, TourError};

/// Largest accepted arc cost.
pub const MAX_ARC_COST: i64 = 1 << 40;

/// Directed arc cost lookup used by every solver component.
///
/// The solver never reads a [`CostMatrix`] directly inside its move
/// evaluation; it goes through this trait so guided local search can swap in
/// penalized costs.
pub trait ArcCost {
    /// Cost of travelling from `from` to `to`.
    fn arc_cost(&self, from: usize, to: usize) -> i64;

    /// Cost of the closed tour `depot → route[0] → … → route[n-1] → depot`.
    fn route_cost(&self, depot: usize, route: &[usize]) -> i64 {
        let Some((&first, _)) = route.split_first() else {
            return 0;
        };
        let mut cost = self.arc_cost(depot, first);
        for w in route.windows(2) {
            cost += self.arc_cost(w[0], w[1]);
        }
        cost + self.arc_cost(route[route.len() - 1], depot)
    }
}

/// A dense n×n matrix of non-negative integer costs in row-major order.
///
/// `get(i, j)` is the directed cost from `i` to `j`; the diagonal is always
/// zero. Symmetry is not required.
///
/// # Examples
///
/// ```
/// use u_tour::distance::CostMatrix;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0, 5, 9],
///     vec![5, 0, 4],
///     vec![9, 4, 0],
/// ]).unwrap();
/// assert_eq!(m.get(0, 2), 9);
/// assert_eq!(m.size(), 3);
/// assert!(m.is_symmetric());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CostMatrix {
    data: Vec<i64>,
    size: usize,
}

impl CostMatrix {
    /// Creates a matrix of the given size, initialized to zero.
    pub fn new(size: usize) -> Self {
        Self {
            data: vec![0; size * size],
            size,
        }
    }

    /// Creates a matrix from a flat row-major grid.
    ///
    /// Returns `InvalidInput` if the length is not `size * size`, any entry is
    /// negative, or the diagonal is non-zero.
    pub fn from_data(size: usize, data: Vec<i64>) -> Result<Self> {
        if data.len() != size * size {
            return Err(TourError::invalid_input(format!(
                "matrix data has {} entries, expected {}",
                data.len(),
                size * size
            )));
        }
        let m = Self { data, size };
        m.check_entries()?;
        Ok(m)
    }

    /// Creates a matrix from nested rows.
    pub fn from_rows(rows: Vec<Vec<i64>>) -> Result<Self> {
        let size = rows.len();
        let mut data = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(TourError::invalid_input(format!(
                    "matrix row {i} has {} entries, expected {size}",
                    row.len()
                )));
            }
            data.extend(row);
        }
        Self::from_data(size, data)
    }

    fn check_entries(&self) -> Result<()> {
        for i in 0..self.size {
            if self.get(i, i) != 0 {
                return Err(TourError::invalid_input(format!(
                    "diagonal entry ({i}, {i}) must be 0"
                )));
            }
            for j in 0..self.size {
                let cost = self.get(i, j);
                if cost < 0 {
                    return Err(TourError::invalid_input(format!(
                        "negative cost at ({i}, {j})"
                    )));
                }
                if cost > MAX_ARC_COST {
                    return Err(TourError::invalid_input(format!(
                        "cost {cost} at ({i}, {j}) exceeds {MAX_ARC_COST}"
                    )));
                }
            }
        }
        Ok(())
    }

    /// Returns the cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    pub fn get(&self, from: usize, to: usize) -> i64 {
        self.data[from * self.size + to]
    }

    /// Sets the cost from `from` to `to`.
    ///
    /// # Panics
    ///
    /// Panics on a negative or oversized cost, or a non-zero diagonal entry.
    pub fn set(&mut self, from: usize, to: usize, cost: i64) {
        assert!(cost >= 0, "arc costs must be non-negative");
        assert!(cost <= MAX_ARC_COST, "arc cost exceeds MAX_ARC_COST");
        assert!(from != to || cost == 0, "diagonal entries must be 0");
        self.data[from * self.size + to] = cost;
    }

    /// Number of nodes.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if `get(i, j) == get(j, i)` for every pair.
    pub fn is_symmetric(&self) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if self.get(i, j) != self.get(j, i) {
                    return false;
                }
            }
        }
        true
    }

    /// Row `from` as a slice.
    pub fn row(&self, from: usize) -> &[i64] {
        &self.data[from * self.size..(from + 1) * self.size]
    }

    /// Returns the cheapest candidate reachable from `from`.
    ///
    /// Ties go to the lowest node index. Returns `None` if `candidates` is empty.
    pub fn cheapest_arc(&self, from: usize, candidates: &[usize]) -> Option<usize> {
        candidates
            .iter()
            .copied()
            .min_by_key(|&to| (self.get(from, to), to))
    }
}

impl ArcCost for CostMatrix {
    fn arc_cost(&self, from: usize, to: usize) -> i64 {
        self.get(from, to)
    }
}
