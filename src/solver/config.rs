//! Solver configuration.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::{Result, TourError};

/// Default wall-clock budget for one solve.
pub const DEFAULT_TIME_LIMIT: Duration = Duration::from_secs(5);

/// Default guided local search penalty weight.
pub const DEFAULT_LAMBDA_COEFFICIENT: f64 = 0.1;

/// Default number of penalty rounds without improvement before giving up.
pub const DEFAULT_MAX_STALL_ROUNDS: usize = 1000;

/// Parameters of a solve call.
///
/// Deserializes from JSON with every field optional; `time_limit` is given
/// in seconds.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tour::solver::SolverConfig;
///
/// let config = SolverConfig::default().with_time_limit(Duration::from_millis(200));
/// assert_eq!(config.depot, 0);
/// assert_eq!(config.time_limit, Duration::from_millis(200));
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Start and end node of the tour.
    pub depot: usize,
    /// Wall-clock budget for construction plus improvement.
    #[serde(with = "seconds")]
    pub time_limit: Duration,
    /// Weight of arc penalties relative to arc cost.
    pub lambda_coefficient: f64,
    /// Penalty rounds without a new incumbent before the search stops.
    pub max_stall_rounds: usize,
    /// Optional flag polled alongside the deadline.
    #[serde(skip)]
    pub cancel: Option<Arc<AtomicBool>>,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            depot: 0,
            time_limit: DEFAULT_TIME_LIMIT,
            lambda_coefficient: DEFAULT_LAMBDA_COEFFICIENT,
            max_stall_rounds: DEFAULT_MAX_STALL_ROUNDS,
            cancel: None,
        }
    }
}

impl SolverConfig {
    pub fn with_depot(mut self, depot: usize) -> Self {
        self.depot = depot;
        self
    }

    pub fn with_time_limit(mut self, time_limit: Duration) -> Self {
        self.time_limit = time_limit;
        self
    }

    pub fn with_lambda_coefficient(mut self, lambda: f64) -> Self {
        self.lambda_coefficient = lambda;
        self
    }

    pub fn with_max_stall_rounds(mut self, rounds: usize) -> Self {
        self.max_stall_rounds = rounds;
        self
    }

    /// Attaches a cancellation flag checked at the same points as the deadline.
    pub fn with_cancellation(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    /// Rejects parameter values the solver cannot use.
    pub fn validate(&self) -> Result<()> {
        if !self.lambda_coefficient.is_finite() || self.lambda_coefficient < 0.0 {
            return Err(TourError::invalid_input(format!(
                "lambda_coefficient must be finite and non-negative, got {}",
                self.lambda_coefficient
            )));
        }
        if self.max_stall_rounds == 0 {
            return Err(TourError::invalid_input(
                "max_stall_rounds must be greater than zero",
            ));
        }
        Ok(())
    }
}

/// Serializes a `Duration` as fractional seconds.
mod seconds {
    use std::time::Duration;

    use serde::{de::Error, Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(value: &Duration, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(value.as_secs_f64())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Duration, D::Error> {
        let secs = f64::deserialize(deserializer)?;
        Duration::try_from_secs_f64(secs).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SolverConfig::default();
        assert_eq!(config.time_limit, Duration::from_secs(5));
        assert_eq!(config.lambda_coefficient, 0.1);
        assert_eq!(config.max_stall_rounds, 1000);
        assert!(config.cancel.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builders() {
        let flag = Arc::new(AtomicBool::new(false));
        let config = SolverConfig::default()
            .with_depot(3)
            .with_lambda_coefficient(0.3)
            .with_max_stall_rounds(7)
            .with_cancellation(flag);
        assert_eq!(config.depot, 3);
        assert_eq!(config.lambda_coefficient, 0.3);
        assert_eq!(config.max_stall_rounds, 7);
        assert!(config.cancel.is_some());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        assert!(SolverConfig::default()
            .with_lambda_coefficient(f64::NAN)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_lambda_coefficient(-1.0)
            .validate()
            .is_err());
        assert!(SolverConfig::default()
            .with_max_stall_rounds(0)
            .validate()
            .is_err());
    }
}
