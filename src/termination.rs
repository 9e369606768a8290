//! Cooperative stop conditions for the improvement loop.
//!
//! The search polls a [`Deadline`] between neighborhood sweeps and inside
//! each operator's scan; nothing is interrupted preemptively.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// A wall-clock budget with an optional external cancellation flag.
///
/// # Examples
///
/// ```
/// use std::time::Duration;
/// use u_tour::termination::Deadline;
///
/// let expired = Deadline::start(Duration::ZERO, None);
/// assert!(expired.is_expired());
///
/// let open = Deadline::start(Duration::from_secs(60), None);
/// assert!(!open.is_expired());
/// ```
#[derive(Debug, Clone)]
pub struct Deadline {
    start: Instant,
    limit: Duration,
    cancel: Option<Arc<AtomicBool>>,
}

impl Deadline {
    /// Starts the clock now.
    pub fn start(limit: Duration, cancel: Option<Arc<AtomicBool>>) -> Self {
        Self {
            start: Instant::now(),
            limit,
            cancel,
        }
    }

    /// Time since [`Deadline::start`].
    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }

    /// Returns `true` once the budget is used up or cancellation was requested.
    pub fn is_expired(&self) -> bool {
        self.is_cancelled() || self.elapsed() >= self.limit
    }

    /// Returns `true` if the cancellation flag is set.
    pub fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::Relaxed))
    }
}
