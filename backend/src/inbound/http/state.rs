//! Shared HTTP adapter state.
//!
//! HTTP handlers accept this state via `actix_web::web::Data` so they only
//! depend on domain ports and remain testable without I/O.

use std::sync::Arc;

use crate::domain::ports::{LoginService, RestaurantRepository};

/// Dependency bundle for HTTP handlers.
#[derive(Clone)]
pub struct HttpState {
    /// Nearby-restaurant lookups.
    pub restaurants: Arc<dyn RestaurantRepository>,
    /// Credential checks for the login endpoint.
    pub login: Arc<dyn LoginService>,
}

impl HttpState {
    /// Construct state from port implementations.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    ///
    /// use restaurant_discovery::domain::ports::{FixtureLoginService, FixtureRestaurantRepository};
    /// use restaurant_discovery::inbound::http::state::HttpState;
    ///
    /// let state = HttpState::new(Arc::new(FixtureRestaurantRepository), Arc::new(FixtureLoginService));
    /// let _login = state.login.clone();
    /// ```
    pub fn new(restaurants: Arc<dyn RestaurantRepository>, login: Arc<dyn LoginService>) -> Self {
        Self { restaurants, login }
    }
}
