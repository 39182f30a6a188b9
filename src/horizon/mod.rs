//! Horizon-specific geometry: candidate filtering, selection, projection.
//!
//! These stages turn the Hough voter's raw segments into a single horizon
//! estimate. All three are pure functions; the filter preserves input
//! order, which the selector relies on for stable tie-breaks.

pub mod filter;
pub mod project;
pub mod select;

pub use filter::{filter_candidates, FilterOptions};
pub use project::project_to_bounds;
pub use select::select_longest;
