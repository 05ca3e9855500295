//! Shared types for the Reef admin console
//!
//! Collection records, request/response DTOs, and the backend error-body
//! shape used by both the transport crate and the view pipeline.

pub mod client;
pub mod models;

// Re-exports
pub use serde::{Deserialize, Serialize};
