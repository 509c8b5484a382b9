//! Problem data and solution representation.
//!
//! An [`Instance`] is the read-only facility table plus the aggregate
//! demand. A [`Solution`] is an ordered set of distinct facility indices;
//! it is feasible when the capacities of its members cover the demand.
//!
//! Only the open/close decision is modelled here. Assigning customers to
//! open facilities is left to whatever exact solver consumes the result.

mod solution;
mod types;

pub use solution::Solution;
pub use types::{Facility, Instance};
