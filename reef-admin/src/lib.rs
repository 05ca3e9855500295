//! Reef Admin - view pipeline for the admin console
//!
//! Pure filter/sort/aggregate functions over fetched collections, the
//! revenue period aggregator, and the polling refresher. Rendering is left
//! to the caller; everything here is computable without a UI.

pub mod poll;
pub mod revenue;
pub mod views;

pub use poll::{RefreshGuard, Refresher};
