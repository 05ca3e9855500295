//! Reef Client - HTTP client for the admin backend
//!
//! Session storage, request envelope, and the typed endpoint surface over
//! the platform's REST API.

pub mod api;
pub mod config;
pub mod error;
pub mod http;
pub mod session;

pub use config::ClientConfig;
pub use error::{ClientError, ClientResult};
pub use http::HttpClient;
pub use session::SessionStore;

// Re-export shared types for convenience
pub use shared::client::{LoginRequest, LoginResponse};
