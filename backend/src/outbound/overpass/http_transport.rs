//! Reqwest-backed Overpass transport.
//!
//! This adapter owns transport details only: request serialisation, client
//! timeout, HTTP error mapping, and JSON decoding.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, StatusCode, Url};
use tracing::debug;

use super::dto::OverpassResponse;
use super::transport::{OverpassTransport, OverpassTransportError};

/// Public Overpass interpreter endpoint.
pub const DEFAULT_OVERPASS_ENDPOINT: &str = "https://overpass-api.de/api/interpreter";
/// Client-side request timeout. Kept above the query's server-side timeout so
/// Overpass gets the chance to answer first.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);
/// User-agent sent when none is configured.
pub const DEFAULT_USER_AGENT: &str = "restaurant-discovery-backend/0.1";

/// Overpass transport that performs HTTP GET requests against one endpoint.
pub struct OverpassHttpTransport {
    client: Client,
    endpoint: Url,
}

impl OverpassHttpTransport {
    /// Build a transport with the default user-agent.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn new(endpoint: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        Self::with_user_agent(endpoint, timeout, DEFAULT_USER_AGENT)
    }

    /// Build a transport with an explicit user-agent.
    ///
    /// # Errors
    ///
    /// Returns an error when the reqwest client cannot be constructed.
    pub fn with_user_agent(
        endpoint: Url,
        timeout: Duration,
        user_agent: &str,
    ) -> Result<Self, reqwest::Error> {
        let client = Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self { client, endpoint })
    }
}

#[async_trait]
impl OverpassTransport for OverpassHttpTransport {
    async fn fetch(&self, query: &str) -> Result<OverpassResponse, OverpassTransportError> {
        let response = self
            .client
            .get(self.endpoint.clone())
            .query(&[("data", query)])
            .header(reqwest::header::ACCEPT, "application/json")
            .send()
            .await
            .map_err(map_transport_error)?;

        let status = response.status();
        let body = response.bytes().await.map_err(map_transport_error)?;
        if !status.is_success() {
            return Err(map_status_error(status, body.as_ref()));
        }

        debug!(
            endpoint = %self.endpoint,
            bytes = body.len(),
            "overpass response received"
        );
        parse_response(body.as_ref())
    }
}

fn parse_response(body: &[u8]) -> Result<OverpassResponse, OverpassTransportError> {
    serde_json::from_slice(body).map_err(|error| {
        OverpassTransportError::decode(format!("invalid Overpass JSON payload: {error}"))
    })
}

fn map_transport_error(error: reqwest::Error) -> OverpassTransportError {
    if error.is_timeout() {
        OverpassTransportError::timeout(error.to_string())
    } else {
        OverpassTransportError::transport(error.to_string())
    }
}

fn map_status_error(status: StatusCode, body: &[u8]) -> OverpassTransportError {
    let preview = body_preview(body);
    let message = if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {}", status.as_u16(), preview)
    };

    match status {
        StatusCode::TOO_MANY_REQUESTS => OverpassTransportError::rate_limited(message),
        StatusCode::GATEWAY_TIMEOUT => OverpassTransportError::timeout(message),
        _ => OverpassTransportError::status(status.as_u16(), preview),
    }
}

fn body_preview(body: &[u8]) -> String {
    const PREVIEW_CHAR_LIMIT: usize = 160;

    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}
