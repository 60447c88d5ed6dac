//! Status check client.
//!
//! Fetches a JSON status document with a single GET. The body is decoded
//! whatever the HTTP status; a non-success status is only logged.

use std::time::Duration;

use thiserror::Error;
use tracing::instrument;

/// Endpoint queried when none is configured
pub const DEFAULT_ENDPOINT: &str = "https://api.github.com";

/// Request timeout when none is configured
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

// The GitHub API rejects requests without a User-Agent
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// Errors raised while fetching the status document.
#[derive(Debug, Error)]
pub enum StatusError {
    /// The HTTP client could not be built.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request failed or the body could not be read.
    #[error("request to {url} failed: {source}")]
    Request {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The body was not valid JSON.
    #[error("response body is not JSON: {0}")]
    Decode(#[from] serde_json::Error),
}

/// Client for one status endpoint.
pub struct StatusClient {
    endpoint: String,
    client: reqwest::Client,
}

impl StatusClient {
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Result<Self, StatusError> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(StatusError::Client)?;

        Ok(Self {
            endpoint: endpoint.into(),
            client,
        })
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// GET the endpoint and decode the body as JSON.
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    pub async fn fetch_data(&self) -> Result<serde_json::Value, StatusError> {
        let request_error = |source| StatusError::Request {
            url: self.endpoint.clone(),
            source,
        };

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(request_error)?;

        let status = response.status();
        if !status.is_success() {
            tracing::warn!(status = status.as_u16(), "status endpoint returned non-success");
        }

        let body = response.bytes().await.map_err(request_error)?;
        tracing::debug!(bytes = body.len(), "status body received");

        Ok(serde_json::from_slice(&body)?)
    }
}
