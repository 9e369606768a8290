//! Local search operators for improving a single closed tour.
//!
//! - [`two_opt`](two_opt_pass) — segment reversal, direction-aware
//! - [`or_opt`](or_opt_pass) — relocation of 1–3 node segments
//! - [`exchange`](exchange_pass) — swap of two nodes
//!
//! Every operator works on the visiting order without the depot and reads
//! costs through [`ArcCost`], so the same code runs on raw and penalized costs.
//! Operators poll a [`Deadline`] inside their scans and return early once it
//! expires.

mod exchange;
mod or_opt;
mod two_opt;

pub use exchange::{exchange_improve, exchange_pass};
pub use or_opt::{or_opt_improve, or_opt_pass};
pub use two_opt::{two_opt_improve, two_opt_pass};

use crate::distance::ArcCost;
use crate::termination::Deadline;

/// Runs one pass of every operator in turn.
///
/// Returns `true` if any operator changed the route.
pub fn sweep<C: ArcCost + ?Sized>(
    route: &mut Vec<usize>,
    depot: usize,
    costs: &C,
    deadline: &Deadline,
) -> bool {
    let reversed = two_opt_pass(route, depot, costs, deadline);
    let relocated = or_opt_pass(route, depot, costs, deadline);
    let swapped = exchange_pass(route, depot, costs, deadline);
    reversed || relocated || swapped
}
