//! Closed tour type.

use crate::error::{Result, TourError};

/// A closed tour: depot, every other node exactly once, depot again.
///
/// The stored sequence has length `N + 1`. Construction validates that the
/// first `N` entries are a permutation of `0..N` starting at the depot.
///
/// # Examples
///
/// ```
/// use u_tour::models::Tour;
///
/// let tour = Tour::new(0, &[2, 1, 3], 4).unwrap();
/// assert_eq!(tour.nodes(), &[0, 2, 1, 3, 0]);
/// assert_eq!(tour.num_nodes(), 4);
/// assert!(Tour::new(0, &[1, 1, 3], 4).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tour {
    nodes: Vec<usize>,
}

impl Tour {
    /// Builds a tour from the depot and the visiting order of the other nodes.
    ///
    /// `size` is the total number of nodes including the depot.
    pub fn new(depot: usize, route: &[usize], size: usize) -> Result<Self> {
        if route.len() + 1 != size {
            return Err(TourError::computation(format!(
                "tour visits {} of {} nodes",
                route.len() + 1,
                size
            )));
        }
        let mut seen = vec![false; size];
        for &node in std::iter::once(&depot).chain(route) {
            match seen.get_mut(node) {
                Some(flag) if !*flag => *flag = true,
                Some(_) => {
                    return Err(TourError::computation(format!(
                        "node {node} visited twice"
                    )))
                }
                None => {
                    return Err(TourError::computation(format!(
                        "node {node} out of range for {size} nodes"
                    )))
                }
            }
        }

        let mut nodes = Vec::with_capacity(size + 1);
        nodes.push(depot);
        nodes.extend_from_slice(route);
        nodes.push(depot);
        Ok(Self { nodes })
    }

    /// Full node sequence, depot at both ends.
    pub fn nodes(&self) -> &[usize] {
        &self.nodes
    }

    /// Start and end node.
    pub fn depot(&self) -> usize {
        self.nodes[0]
    }

    /// Nodes between the two depot visits.
    pub fn route(&self) -> &[usize] {
        &self.nodes[1..self.nodes.len() - 1]
    }

    /// Number of distinct nodes (N).
    pub fn num_nodes(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Consecutive `(from, to)` arcs, closing arc included.
    pub fn arcs(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        self.nodes.windows(2).map(|w| (w[0], w[1]))
    }
}
