//! Domain model types for single-vehicle tours.
//!
//! Provides geographic coordinates, the closed tour with its permutation
//! invariant, solved tours with statistics, and the transport payloads.

mod coordinate;
mod request;
mod solution;
mod tour;

pub use coordinate::{validate_coordinates, Coordinate};
pub use request::{OptimizationRequest, RouteSummary};
pub use solution::{Solution, SolveStats, SolverPhase};
pub use tour::Tour;
