//! Constructive heuristics for building an initial tour.
//!
//! - [`path_cheapest_arc`] — Greedy path extension along the cheapest outgoing arc, O(n²)

mod path_cheapest_arc;

pub use path_cheapest_arc::path_cheapest_arc;
