//! Transport seam between the restaurant repository and Overpass.

use async_trait::async_trait;

use super::dto::OverpassResponse;
use crate::domain::ports::define_port_error;

define_port_error! {
    /// Errors surfaced while calling Overpass.
    pub enum OverpassTransportError {
        /// Network transport failed before a complete response arrived.
        Transport { message: String } =>
            "overpass transport failed: {message}",
        /// The request exceeded the client timeout.
        Timeout { message: String } =>
            "overpass timeout: {message}",
        /// Overpass rate-limited the request.
        RateLimited { message: String } =>
            "overpass rate limited request: {message}",
        /// Overpass answered with a non-success status.
        Status { status: u16, message: String } =>
            "overpass returned status {status}: {message}",
        /// The response body was not a valid Overpass JSON document.
        Decode { message: String } =>
            "overpass response decode failed: {message}",
    }
}

/// Executes one Overpass QL query and decodes the JSON response.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait OverpassTransport: Send + Sync {
    /// Send `query` to the interpreter endpoint.
    async fn fetch(&self, query: &str) -> Result<OverpassResponse, OverpassTransportError>;
}
