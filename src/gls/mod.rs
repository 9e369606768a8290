//! Guided local search metaheuristic.
//!
//! - [`PenaltyTable`] — per-solve arc penalty counters
//! - [`PenalizedCost`] — matrix costs augmented by penalties, fed to the local search
//! - [`GuidedLocalSearch`] — the descend / penalize loop with incumbent tracking

mod penalties;
mod search;

pub use penalties::{PenalizedCost, PenaltyTable};
pub use search::{GuidedLocalSearch, SearchOutcome, StopReason};
