//! User Profile Model

use serde::{Deserialize, Serialize};

/// User profile entity
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    pub id: i64,
    pub name: Option<String>,
    pub phone: Option<String>,
}

impl UserProfile {
    /// Display name, falling back when the backend has none.
    pub fn display_name(&self) -> &str {
        self.name.as_deref().unwrap_or("User")
    }
}
