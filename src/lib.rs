//! # u-tour
//!
//! Single-vehicle closed-tour optimization over geographic coordinates:
//! haversine cost matrix, path-cheapest-arc construction, and guided local
//! search under a wall-clock budget.
//!
//! ## Modules
//!
//! - [`models`] — Coordinates, tours, solutions, transport payloads
//! - [`distance`] — Integer cost matrix and the haversine distance model
//! - [`constructive`] — Path-cheapest-arc initial tour
//! - [`local_search`] — 2-opt, Or-opt, and exchange operators
//! - [`gls`] — Guided local search metaheuristic
//! - [`termination`] — Deadline and cancellation polling
//! - [`solver`] — Configuration and the two-phase tour solver
//!
//! ## Example
//!
//! ```
//! use u_tour::models::Coordinate;
//! use u_tour::solver::SolverConfig;
//!
//! let square = vec![
//!     Coordinate::new(0.0, 0.0).unwrap(),
//!     Coordinate::new(0.01, 0.01).unwrap(),
//!     Coordinate::new(0.0, 0.01).unwrap(),
//!     Coordinate::new(0.01, 0.0).unwrap(),
//! ];
//! let summary = u_tour::optimize_route(&square, &SolverConfig::default()).unwrap();
//! assert_eq!(summary.route.len(), 5);
//! assert!((summary.distance - 4.444).abs() < 1e-9);
//! ```

pub mod constructive;
pub mod distance;
pub mod error;
pub mod gls;
pub mod local_search;
pub mod models;
pub mod solver;
pub mod termination;

pub use error::{Result, TourError};

use models::{validate_coordinates, Coordinate, OptimizationRequest, RouteSummary};
use solver::SolverConfig;

/// Validates the locations, builds the haversine matrix, and solves the tour.
///
/// The returned distance is in kilometers.
pub fn optimize_route(locations: &[Coordinate], config: &SolverConfig) -> Result<RouteSummary> {
    validate_coordinates(locations)?;
    let matrix = distance::build_matrix(locations)?;
    let solution = solver::solve(&matrix, config)?;
    Ok(RouteSummary::from(&solution))
}

/// Runs [`optimize_route`] on a transport request body.
pub fn optimize(request: &OptimizationRequest, config: &SolverConfig) -> Result<RouteSummary> {
    optimize_route(&request.locations, config)
}
