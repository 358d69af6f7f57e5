//! Application settings loaded via OrthoConfig.
//!
//! Values come from `RESTAURANTS_*` environment variables, configuration
//! files, or CLI flags; every field is optional and falls back to a default.

use std::net::SocketAddr;
use std::time::Duration;

use ortho_config::OrthoConfig;
use serde::Deserialize;

use crate::outbound::overpass::{
    DEFAULT_OVERPASS_ENDPOINT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT,
};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

/// Errors raised when a configured value cannot be interpreted.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SettingsError {
    /// The bind address is not a valid socket address.
    #[error("invalid bind address {value:?}: {message}")]
    InvalidBindAddr {
        /// Raw configured value.
        value: String,
        /// Parser error.
        message: String,
    },
    /// The Overpass endpoint is not a valid URL.
    #[error("invalid Overpass endpoint {value:?}: {message}")]
    InvalidEndpoint {
        /// Raw configured value.
        value: String,
        /// Parser error.
        message: String,
    },
}

/// Runtime settings for the restaurant discovery server.
#[derive(Debug, Clone, Deserialize, OrthoConfig)]
#[ortho_config(prefix = "RESTAURANTS")]
pub struct AppSettings {
    /// Socket address the HTTP server binds to.
    pub bind_addr: Option<String>,
    /// Overpass interpreter endpoint.
    pub overpass_endpoint: Option<String>,
    /// Client-side timeout for Overpass requests, in seconds.
    pub overpass_timeout_secs: Option<u64>,
    /// Server-side timeout embedded in Overpass queries, in seconds.
    #[ortho_config(default = 25)]
    pub overpass_query_timeout_secs: u32,
    /// User-agent sent to Overpass.
    pub overpass_user_agent: Option<String>,
}

impl AppSettings {
    /// Return the parsed bind address, falling back to `0.0.0.0:8080`.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidBindAddr`] when the value does not parse.
    pub fn bind_addr(&self) -> Result<SocketAddr, SettingsError> {
        let raw = self.bind_addr.as_deref().unwrap_or(DEFAULT_BIND_ADDR);
        raw.parse().map_err(|error: std::net::AddrParseError| {
            SettingsError::InvalidBindAddr {
                value: raw.to_owned(),
                message: error.to_string(),
            }
        })
    }

    /// Return the parsed Overpass endpoint, falling back to the public API.
    ///
    /// # Errors
    ///
    /// Returns [`SettingsError::InvalidEndpoint`] when the value does not parse.
    pub fn overpass_endpoint(&self) -> Result<url::Url, SettingsError> {
        let raw = self
            .overpass_endpoint
            .as_deref()
            .unwrap_or(DEFAULT_OVERPASS_ENDPOINT);
        url::Url::parse(raw).map_err(|error| SettingsError::InvalidEndpoint {
            value: raw.to_owned(),
            message: error.to_string(),
        })
    }

    /// Return the Overpass client timeout.
    pub fn overpass_timeout(&self) -> Duration {
        self.overpass_timeout_secs
            .map_or(DEFAULT_REQUEST_TIMEOUT, Duration::from_secs)
    }

    /// Return the server-side query timeout in seconds.
    pub fn overpass_query_timeout_secs(&self) -> u32 {
        self.overpass_query_timeout_secs
    }

    /// Return the user-agent sent to Overpass.
    pub fn overpass_user_agent(&self) -> &str {
        self.overpass_user_agent
            .as_deref()
            .unwrap_or(DEFAULT_USER_AGENT)
    }
}
