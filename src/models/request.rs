//! Transport payload types.
//!
//! These mirror the JSON bodies exchanged with the HTTP layer:
//! `{"locations": [{"lat": .., "lng": ..}]}` in, `{"route": [..], "distance": ..}` out.

use serde::{Deserialize, Serialize};

use super::{Coordinate, Solution};

/// A request to optimize the visiting order of a set of locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub locations: Vec<Coordinate>,
}

/// The optimized route returned to the caller.
///
/// `distance` is in kilometers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteSummary {
    pub route: Vec<usize>,
    pub distance: f64,
}

impl From<&Solution> for RouteSummary {
    fn from(solution: &Solution) -> Self {
        Self {
            route: solution.route().to_vec(),
            distance: solution.distance_km(),
        }
    }
}
