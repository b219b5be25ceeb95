//! The two pure fare-estimation algorithms.
//!
//! Both are synchronous, allocation-light functions with no shared
//! state: trip segment derivation between two chosen stops, and the
//! filter-and-rank ordering behind the route type-ahead. Everything
//! around them (fetching, caching, rendering) lives elsewhere.

mod search;
mod segments;

pub use search::rank_routes;
pub use segments::compute_segments;
