//! Cost matrices.
//!
//! Provides the dense integer [`CostMatrix`], the [`ArcCost`] lookup trait the
//! solver is written against, and the haversine distance model that fills a
//! matrix from geographic coordinates.

mod haversine;
mod matrix;

pub use haversine::{build_matrix, haversine_km, haversine_meters, EARTH_RADIUS_KM};
pub use matrix::{ArcCost, CostMatrix, MAX_ARC_COST};
