//! Client configuration

/// Default backend base URL when nothing is configured.
const DEFAULT_BASE_URL: &str = "http://localhost:5000/api";

/// Environment variable overriding the backend base URL.
const BASE_URL_ENV: &str = "REEF_API_URL";

/// Client configuration for connecting to the admin backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL including the API prefix (e.g. "http://localhost:5000/api")
    pub base_url: String,

    /// Bearer token for authentication
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: None,
            timeout: 30,
        }
    }

    /// Resolve the base URL from the environment, once at startup.
    ///
    /// Reads `REEF_API_URL` (set it in `.env` for deployed environments);
    /// falls back to the local development backend.
    pub fn from_env() -> Self {
        let base_url = std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::new(base_url)
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}
