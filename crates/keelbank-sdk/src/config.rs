//! Client configuration

use std::time::Duration;

/// Base URL of the sandbox environment.
pub const SANDBOX_API_URL: &str = "https://api.sandbox.keelbank.dev";

/// SDK configuration.
///
/// Read-only after construction; the client and every resource façade share
/// it without further synchronization.
#[derive(Debug, Clone)]
pub struct Config {
    /// API base URL
    pub base_url: String,
    /// Bearer token attached to every request
    pub token: String,
    /// Request timeout
    pub timeout: Duration,
    /// User-Agent header value
    pub user_agent: String,
}

impl Config {
    /// Configuration for an arbitrary environment.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            token: token.into(),
            timeout: Duration::from_secs(30),
            user_agent: concat!("keelbank-sdk/", env!("CARGO_PKG_VERSION")).to_string(),
        }
    }

    /// Configuration pointing at the sandbox environment.
    pub fn sandbox(token: impl Into<String>) -> Self {
        Self::new(SANDBOX_API_URL, token)
    }

    /// Override the request timeout.
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// Override the User-Agent header.
    pub fn user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }
}
