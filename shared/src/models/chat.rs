//! Chat Message Model

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Single chat message
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub sender_id: i64,
    pub message: String,
    pub sent_at: DateTime<Utc>,
}

/// Envelope returned by `GET /chats/:userId`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatHistory {
    pub chat_id: Option<i64>,
    #[serde(default)]
    pub messages: Vec<ChatMessage>,
}
