//! SessionStore - durable bearer-token storage
//!
//! The admin session is a single opaque bearer token persisted under a fixed
//! key in `session.json` inside the data directory. No expiry is tracked
//! client-side; a stale token is only discovered when the backend rejects a
//! later request.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Fixed storage key for the admin token.
const TOKEN_KEY: &str = "admin_token";

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Session file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
struct SessionFile {
    #[serde(rename = "admin_token")]
    token: Option<String>,
}

/// File-backed token store
pub struct SessionStore {
    /// Session file path: {data_dir}/session.json
    file_path: PathBuf,
    data: SessionFile,
}

impl SessionStore {
    /// Create an empty store rooted at the given data directory.
    pub fn new(data_dir: &Path) -> Self {
        Self {
            file_path: data_dir.join("session.json"),
            data: SessionFile::default(),
        }
    }

    /// Load the store from disk, starting empty when no file exists.
    pub fn load(data_dir: &Path) -> Result<Self, SessionError> {
        let file_path = data_dir.join("session.json");

        let data = if file_path.exists() {
            let content = std::fs::read_to_string(&file_path)?;
            serde_json::from_str(&content)?
        } else {
            SessionFile::default()
        };

        Ok(Self { file_path, data })
    }

    fn save(&self) -> Result<(), SessionError> {
        if let Some(parent) = self.file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.data)?;
        std::fs::write(&self.file_path, content)?;
        Ok(())
    }

    /// Persist the token for subsequent requests.
    pub fn set_token(&mut self, token: impl Into<String>) -> Result<(), SessionError> {
        self.data.token = Some(token.into());
        self.save()?;
        tracing::debug!(key = TOKEN_KEY, "Session token stored");
        Ok(())
    }

    /// Current token, if any.
    pub fn token(&self) -> Option<&str> {
        self.data.token.as_deref()
    }

    /// Clear the stored token.
    pub fn clear(&mut self) -> Result<(), SessionError> {
        self.data.token = None;
        self.save()?;
        tracing::debug!("Session token cleared");
        Ok(())
    }

    /// True iff a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.data.token.as_deref().is_some_and(|t| !t.is_empty())
    }
}

pub mod claims {
    //! Unverified JWT payload inspection
    //!
    //! The chat view needs the admin's own user id to tell sent from received
    //! messages. The token payload carries it as `sub` (or legacy `identity`);
    //! decoding does not verify the signature, the backend remains the
    //! authority.

    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};

    /// Extract the subject user id from a JWT, if the payload is readable.
    pub fn subject(token: &str) -> Option<i64> {
        let parts: Vec<&str> = token.split('.').collect();
        if parts.len() != 3 {
            return None;
        }

        let payload_bytes = URL_SAFE_NO_PAD.decode(parts[1]).ok()?;
        let payload: serde_json::Value = serde_json::from_slice(&payload_bytes).ok()?;

        let claim = payload.get("sub").or_else(|| payload.get("identity"))?;
        match claim {
            serde_json::Value::Number(n) => n.as_i64(),
            serde_json::Value::String(s) => s.parse().ok(),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::{engine::general_purpose::URL_SAFE_NO_PAD, Engine};
    use tempfile::TempDir;

    fn fake_jwt(payload: serde_json::Value) -> String {
        let header = URL_SAFE_NO_PAD.encode(br#"{"alg":"HS256","typ":"JWT"}"#);
        let body = URL_SAFE_NO_PAD.encode(payload.to_string().as_bytes());
        format!("{}.{}.sig", header, body)
    }

    #[test]
    fn store_roundtrip() {
        let dir = TempDir::new().unwrap();
        let mut store = SessionStore::new(dir.path());

        assert!(!store.is_authenticated());
        store.set_token("tok-123").unwrap();
        assert_eq!(store.token(), Some("tok-123"));
        assert!(store.is_authenticated());

        // Reload from disk
        let loaded = SessionStore::load(dir.path()).unwrap();
        assert_eq!(loaded.token(), Some("tok-123"));

        let mut loaded = loaded;
        loaded.clear().unwrap();
        assert!(!loaded.is_authenticated());
        let reloaded = SessionStore::load(dir.path()).unwrap();
        assert_eq!(reloaded.token(), None);
    }

    #[test]
    fn empty_token_is_not_authenticated() {
        let dir = TempDir::new().unwrap();
        let mut store = SessionStore::new(dir.path());
        store.set_token("").unwrap();
        assert!(!store.is_authenticated());
    }

    #[test]
    fn subject_from_sub_claim() {
        let token = fake_jwt(serde_json::json!({"sub": 42, "exp": 9999999999u64}));
        assert_eq!(claims::subject(&token), Some(42));
    }

    #[test]
    fn subject_from_identity_string() {
        let token = fake_jwt(serde_json::json!({"identity": "7"}));
        assert_eq!(claims::subject(&token), Some(7));
    }

    #[test]
    fn subject_rejects_opaque_token() {
        assert_eq!(claims::subject("not-a-jwt"), None);
        assert_eq!(claims::subject("a.b"), None);
    }
}
