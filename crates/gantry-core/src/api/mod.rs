//! HTTP client for the project management API.
//!
//! This is the single I/O boundary of the library: four JSON-over-HTTP
//! endpoints on the external project collaborator. Requests carry a bearer
//! token when one is configured, time out after thirty seconds, and are
//! never retried; a failed call surfaces once and the operation is
//! abandoned.

use std::time::Duration;

use reqwest::{Client, RequestBuilder, Response};

use crate::error::{GantryError, Result, ResultExt};

pub mod events;
pub mod projects;

#[cfg(test)]
mod tests;

/// Request timeout applied to every API call.
const REQUEST_TIMEOUT_SECS: u64 = 30;

/// Thin HTTP wrapper around the project management API.
#[derive(Debug, Clone)]
pub struct ApiClient {
    base_url: String,
    api_token: Option<String>,
    client: Client,
}

impl ApiClient {
    /// Create a client for the API rooted at `base_url`.
    ///
    /// A trailing slash on the base URL is tolerated and stripped.
    pub fn new(base_url: impl Into<String>, api_token: Option<String>) -> Result<Self> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        let client = Client::builder()
            .timeout(Duration::from_secs(REQUEST_TIMEOUT_SECS))
            .build()
            .with_context("Failed to construct HTTP client")?;

        Ok(Self {
            base_url,
            api_token,
            client,
        })
    }

    /// The base URL this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Attach the bearer token when one is configured.
    fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        match &self.api_token {
            Some(token) => request.bearer_auth(token),
            None => request,
        }
    }

    /// Turn a non-success response into a server error carrying the
    /// response body as the message.
    async fn check_status(response: Response) -> Result<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let message = response.text().await.unwrap_or_default();
        Err(GantryError::Server {
            status: status.as_u16(),
            message,
        })
    }
}
