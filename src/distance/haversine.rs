//! Great-circle distances between coordinates.
//!
//! Costs are integer meters, truncated toward zero, so the solver can compare
//! and tie-break exactly.

use log::debug;

use super::CostMatrix;
use crate::error::{Result, TourError};
use crate::models::Coordinate;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Haversine distance between two coordinates in kilometers.
///
/// # Examples
///
/// ```
/// use u_tour::models::Coordinate;
/// use u_tour::distance::haversine_km;
///
/// let a = Coordinate::new(0.0, 0.0).unwrap();
/// let b = Coordinate::new(0.0, 1.0).unwrap();
/// // One degree of longitude on the equator.
/// assert!((haversine_km(&a, &b) - 111.195).abs() < 1e-3);
/// ```
pub fn haversine_km(from: &Coordinate, to: &Coordinate) -> f64 {
    let lat1 = from.lat().to_radians();
    let lon1 = from.lng().to_radians();
    let lat2 = to.lat().to_radians();
    let lon2 = to.lng().to_radians();

    let dlat = lat2 - lat1;
    let dlon = lon2 - lon1;

    let a = (dlat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Haversine distance in whole meters, truncated toward zero.
pub fn haversine_meters(from: &Coordinate, to: &Coordinate) -> Result<i64> {
    let meters = haversine_km(from, to) * 1000.0;
    if !meters.is_finite() {
        return Err(TourError::computation(format!(
            "non-finite distance between ({}, {}) and ({}, {})",
            from.lat(),
            from.lng(),
            to.lat(),
            to.lng()
        )));
    }
    Ok(meters as i64)
}

/// Builds the N×N meter cost matrix for a list of coordinates.
///
/// Every ordered pair is evaluated independently; the diagonal stays 0.
///
/// # Examples
///
/// ```
/// use u_tour::models::Coordinate;
/// use u_tour::distance::build_matrix;
///
/// let points = vec![
///     Coordinate::new(0.0, 0.0).unwrap(),
///     Coordinate::new(0.0, 0.01).unwrap(),
/// ];
/// let m = build_matrix(&points).unwrap();
/// assert_eq!(m.get(0, 1), 1111);
/// assert_eq!(m.get(1, 0), 1111);
/// assert_eq!(m.get(0, 0), 0);
/// ```
pub fn build_matrix(coordinates: &[Coordinate]) -> Result<CostMatrix> {
    let n = coordinates.len();
    let mut matrix = CostMatrix::new(n);
    for (i, from) in coordinates.iter().enumerate() {
        for (j, to) in coordinates.iter().enumerate() {
            if i != j {
                matrix.set(i, j, haversine_meters(from, to)?);
            }
        }
    }
    debug!("built {n}x{n} haversine cost matrix");
    Ok(matrix)
}
