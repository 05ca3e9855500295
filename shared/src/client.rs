//! Client-related types shared between transport and views
//!
//! Request/response DTOs for the backend REST contract.

use serde::{Deserialize, Serialize};

// =============================================================================
// Auth API DTOs
// =============================================================================

/// Login request (`POST /login`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub nomor_hp: String,
    pub password: String,
}

/// Login response data
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginResponse {
    pub access_token: String,
}

// =============================================================================
// Order API DTOs
// =============================================================================

/// Status update payload (`PUT /orders/:id/status`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusUpdate {
    pub status: crate::models::OrderStatus,
}

// =============================================================================
// Chat API DTOs
// =============================================================================

/// Outbound chat message (`POST /chats/send`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SendChatRequest {
    pub receiver_phone: String,
    pub message: String,
}

// =============================================================================
// Role Change API DTOs
// =============================================================================

/// Rejection payload (`PUT /role-change/:id/reject`)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RejectRoleRequest {
    pub reason: String,
}

// =============================================================================
// Error body
// =============================================================================

/// Error payload the backend attaches to non-2xx responses
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
