//! Path-cheapest-arc constructive heuristic.
//!
//! Builds a single path greedily: starting from the depot, always extend the
//! path from its current end along the cheapest arc to an unvisited node.
//! The path is closed back to the depot once every node is visited.
//!
//! # Complexity
//!
//! O(n²) where n = number of nodes.
//!
//! # Reference
//!
//! Rosenkrantz, D.J., Stearns, R.E. & Lewis, P.M. (1977). "An Analysis of
//! Several Heuristics for the Traveling Salesman Problem", *SIAM Journal on
//! Computing* 6(3), 563-581.

use crate::distance::CostMatrix;
use crate::error::{Result, TourError};

/// Constructs an initial tour with the path-cheapest-arc heuristic.
///
/// Returns the visiting order of every node except `depot`. Equal-cost arcs
/// are resolved in favour of the lowest node index, so the result is fully
/// determined by the matrix.
///
/// Returns `NoSolution` when the matrix has fewer than two nodes and
/// `InvalidInput` when `depot` is out of range.
///
/// # Examples
///
/// ```
/// use u_tour::distance::CostMatrix;
/// use u_tour::constructive::path_cheapest_arc;
///
/// let m = CostMatrix::from_rows(vec![
///     vec![0, 9, 1, 5],
///     vec![9, 0, 2, 3],
///     vec![1, 2, 0, 8],
///     vec![5, 3, 8, 0],
/// ]).unwrap();
/// assert_eq!(path_cheapest_arc(&m, 0).unwrap(), vec![2, 1, 3]);
/// ```
pub fn path_cheapest_arc(matrix: &CostMatrix, depot: usize) -> Result<Vec<usize>> {
    let n = matrix.size();
    if n < 2 {
        return Err(TourError::no_solution(format!(
            "a tour needs at least 2 nodes, matrix has {n}"
        )));
    }
    if depot >= n {
        return Err(TourError::invalid_input(format!(
            "depot {depot} out of range for {n} nodes"
        )));
    }

    let mut unvisited: Vec<usize> = (0..n).filter(|&i| i != depot).collect();
    let mut route = Vec::with_capacity(n - 1);
    let mut current = depot;

    while let Some(next) = matrix.cheapest_arc(current, &unvisited) {
        let pos = unvisited
            .iter()
            .position(|&i| i == next)
            .ok_or_else(|| TourError::computation("cheapest arc left the candidate set"))?;
        unvisited.remove(pos);
        route.push(next);
        current = next;
    }

    Ok(route)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line() -> CostMatrix {
        let pos = [0i64, 1, 2, 3];
        let rows: Vec<Vec<i64>> = pos
            .iter()
            .map(|a| pos.iter().map(|b| (a - b).abs()).collect())
            .collect();
        CostMatrix::from_rows(rows).expect("valid")
    }

    #[test]
    fn test_pca_line() {
        let m = line();
        assert_eq!(path_cheapest_arc(&m, 0).expect("solvable"), vec![1, 2, 3]);
    }

    #[test]
    fn test_pca_from_middle_depot() {
        let m = line();
        // From 2: 1 and 3 tie at cost 1, lowest index wins.
        assert_eq!(path_cheapest_arc(&m, 2).expect("solvable"), vec![1, 0, 3]);
    }

    #[test]
    fn test_pca_two_nodes() {
        let m = CostMatrix::from_rows(vec![vec![0, 7], vec![7, 0]]).expect("valid");
        assert_eq!(path_cheapest_arc(&m, 0).expect("solvable"), vec![1]);
    }

    #[test]
    fn test_pca_all_ties() {
        let m = CostMatrix::new(5);
        assert_eq!(path_cheapest_arc(&m, 0).expect("solvable"), vec![1, 2, 3, 4]);
    }

    #[test]
    fn test_pca_uses_outgoing_direction() {
        let mut m = CostMatrix::new(3);
        m.set(0, 1, 10);
        m.set(1, 0, 1);
        m.set(0, 2, 5);
        m.set(2, 0, 50);
        m.set(1, 2, 3);
        m.set(2, 1, 3);
        assert_eq!(path_cheapest_arc(&m, 0).expect("solvable"), vec![2, 1]);
    }

    #[test]
    fn test_pca_degenerate() {
        assert!(matches!(
            path_cheapest_arc(&CostMatrix::new(1), 0),
            Err(TourError::NoSolution(_))
        ));
        assert!(matches!(
            path_cheapest_arc(&CostMatrix::new(0), 0),
            Err(TourError::NoSolution(_))
        ));
    }

    #[test]
    fn test_pca_bad_depot() {
        assert!(matches!(
            path_cheapest_arc(&line(), 4),
            Err(TourError::InvalidInput(_))
        ));
    }
}
