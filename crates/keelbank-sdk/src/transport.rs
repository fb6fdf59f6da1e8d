//! HTTP transport
//!
//! Resources never touch reqwest directly: they speak to an injected
//! [`HttpTransport`], which performs one HTTP exchange per call and hands
//! back the status code and parsed body. This layer defines no timeouts or
//! retries of its own beyond the client-wide request timeout.

use crate::config::Config;
use crate::error::{Error, Result};
use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, CONTENT_TYPE};
use serde_json::Value;

/// The JSON:API media type.
pub const JSON_API_CONTENT_TYPE: &str = "application/vnd.api+json";

/// Outcome of one HTTP exchange.
#[derive(Debug, Clone)]
pub struct TransportResponse {
    /// HTTP status code
    pub status: u16,
    /// Parsed response body; `Null` for empty bodies, the raw text as a
    /// string value when the body is not JSON
    pub body: Value,
}

impl TransportResponse {
    /// Whether the status is in the 2xx range.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// One-exchange-per-call HTTP collaborator, injected at construction.
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// GET with query parameters.
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<TransportResponse>;

    /// POST with an optional JSON:API document body.
    async fn post(&self, path: &str, body: Option<Value>) -> Result<TransportResponse>;

    /// PATCH with a JSON:API document body.
    async fn patch(&self, path: &str, body: Value) -> Result<TransportResponse>;

    /// DELETE.
    async fn delete(&self, path: &str) -> Result<TransportResponse>;
}

/// Production transport backed by reqwest.
#[derive(Debug)]
pub struct ReqwestTransport {
    client: reqwest::Client,
    base_url: String,
    token: String,
}

impl ReqwestTransport {
    /// Build a transport from client configuration.
    pub fn new(config: &Config) -> Result<Self> {
        if config.token.is_empty() {
            return Err(Error::Config("bearer token must not be empty".to_string()));
        }
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static(JSON_API_CONTENT_TYPE));
        let client = reqwest::Client::builder()
            .timeout(config.timeout)
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .build()?;
        Ok(Self {
            client,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            token: config.token.clone(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    async fn read(method: &str, path: &str, response: reqwest::Response) -> Result<TransportResponse> {
        let status = response.status().as_u16();
        let text = response.text().await?;
        let body = if text.is_empty() {
            Value::Null
        } else {
            // Keep a non-JSON body around as a string so error reporting
            // can still surface it.
            serde_json::from_str(&text).unwrap_or(Value::String(text))
        };
        tracing::debug!(method, path, status, "api exchange");
        Ok(TransportResponse { status, body })
    }
}

#[async_trait]
impl HttpTransport for ReqwestTransport {
    async fn get(&self, path: &str, query: &[(String, String)]) -> Result<TransportResponse> {
        let response = self
            .client
            .get(self.url(path))
            .bearer_auth(&self.token)
            .query(query)
            .send()
            .await?;
        Self::read("GET", path, response).await
    }

    async fn post(&self, path: &str, body: Option<Value>) -> Result<TransportResponse> {
        let mut request = self.client.post(self.url(path)).bearer_auth(&self.token);
        if let Some(body) = body {
            request = request.body(serde_json::to_vec(&body)?);
        }
        let response = request.send().await?;
        Self::read("POST", path, response).await
    }

    async fn patch(&self, path: &str, body: Value) -> Result<TransportResponse> {
        let response = self
            .client
            .patch(self.url(path))
            .bearer_auth(&self.token)
            .body(serde_json::to_vec(&body)?)
            .send()
            .await?;
        Self::read("PATCH", path, response).await
    }

    async fn delete(&self, path: &str) -> Result<TransportResponse> {
        let response = self
            .client
            .delete(self.url(path))
            .bearer_auth(&self.token)
            .send()
            .await?;
        Self::read("DELETE", path, response).await
    }
}
