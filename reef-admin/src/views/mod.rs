//! Per-view collection pipelines
//!
//! Each view owns its filter parameters and aggregate shapes. Filters take
//! the fetched collection by reference and return a fresh display copy; the
//! source is never mutated, so a view can re-filter with new parameters
//! without refetching.

pub mod chat;
pub mod dashboard;
pub mod orders;
pub mod products;
pub mod roles;

/// Case-insensitive substring match used by every search filter.
pub(crate) fn contains_ci(haystack: &str, needle_lower: &str) -> bool {
    haystack.to_lowercase().contains(needle_lower)
}
