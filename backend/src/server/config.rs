//! HTTP server configuration object.

use std::net::SocketAddr;

use restaurant_discovery::inbound::http::state::HttpState;

/// Everything the HTTP server needs besides the health state.
pub struct ServerConfig {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) http_state: HttpState,
}

impl ServerConfig {
    /// Construct a server configuration from a bind address and port wiring.
    #[must_use]
    pub fn new(bind_addr: SocketAddr, http_state: HttpState) -> Self {
        Self {
            bind_addr,
            http_state,
        }
    }
}
