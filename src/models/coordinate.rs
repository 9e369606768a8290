//! Geographic coordinate type.

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// A point on the earth's surface in degrees.
///
/// Serialized as `{ "lat": .., "lng": .. }`.
///
/// # Examples
///
/// ```
/// use u_tour::models::Coordinate;
///
/// let c = Coordinate::new(37.5665, 126.9780).unwrap();
/// assert_eq!(c.lat(), 37.5665);
/// assert!(Coordinate::new(91.0, 0.0).is_err());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    lat: f64,
    lng: f64,
}

impl Coordinate {
    /// Creates a validated coordinate.
    ///
    /// Returns `InvalidInput` if either value is non-finite or out of range.
    pub fn new(lat: f64, lng: f64) -> Result<Self> {
        let c = Self { lat, lng };
        c.validate()?;
        Ok(c)
    }

    /// Latitude in degrees, `-90..=90`.
    pub fn lat(&self) -> f64 {
        self.lat
    }

    /// Longitude in degrees, `-180..=180`.
    pub fn lng(&self) -> f64 {
        self.lng
    }

    /// Checks range and finiteness.
    ///
    /// Deserialized coordinates skip [`Coordinate::new`], so callers run this
    /// before handing them to the distance model.
    pub fn validate(&self) -> Result<()> {
        if !self.lat.is_finite() || !(-90.0..=90.0).contains(&self.lat) {
            return Err(TourError::invalid_input(format!(
                "latitude {} is outside [-90, 90]",
                self.lat
            )));
        }
        if !self.lng.is_finite() || !(-180.0..=180.0).contains(&self.lng) {
            return Err(TourError::invalid_input(format!(
                "longitude {} is outside [-180, 180]",
                self.lng
            )));
        }
        Ok(())
    }
}

/// Validates a full problem instance: at least two points, all in range.
pub fn validate_coordinates(coordinates: &[Coordinate]) -> Result<()> {
    if coordinates.len() < 2 {
        return Err(TourError::invalid_input(
            "at least 2 locations are required",
        ));
    }
    for (i, c) in coordinates.iter().enumerate() {
        c.validate()
            .map_err(|e| TourError::invalid_input(format!("location {i}: {e}")))?;
    }
    Ok(())
}
