//! Role Change Request Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Role change request status
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum RoleRequestStatus {
    #[default]
    Pending,
    Approved,
    Rejected,
}

/// Role change request entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoleRequest {
    pub id: i64,
    pub name: String,
    pub phone: String,
    pub reason: String,
    pub status: RoleRequestStatus,
    pub requested_at: DateTime<Utc>,
}

/// Envelope returned by `GET /role-change/requests`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RoleRequestList {
    #[serde(default)]
    pub data: Vec<RoleRequest>,
}
