//! Error type shared by the distance model and the tour solver.

use thiserror::Error;

/// Errors produced while building a cost matrix or solving a tour.
///
/// # Examples
///
/// ```
/// use u_tour::TourError;
///
/// let err = TourError::invalid_input("at least 2 locations are required");
/// assert!(err.is_client_error());
/// assert_eq!(
///     err.to_string(),
///     "invalid input: at least 2 locations are required"
/// );
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TourError {
    /// The caller supplied something the core cannot work with.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// No feasible tour could be constructed.
    #[error("no solution found: {0}")]
    NoSolution(String),
    /// Unexpected internal fault (non-finite distance, overflow, broken tour).
    #[error("computation failed: {0}")]
    ComputationFailure(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, TourError>;

impl TourError {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn no_solution(message: impl Into<String>) -> Self {
        Self::NoSolution(message.into())
    }

    pub fn computation(message: impl Into<String>) -> Self {
        Self::ComputationFailure(message.into())
    }

    /// Returns `true` only for request validation failures. `NoSolution` and
    /// `ComputationFailure` are solver-side outcomes.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}
