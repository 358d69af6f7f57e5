//! Domain ports and supporting types for the hexagonal boundary.

mod macros;
pub(crate) use macros::define_port_error;

mod login_service;
mod restaurant_repository;

#[cfg(test)]
pub use login_service::MockLoginService;
pub use login_service::{
    FIXTURE_LOGIN_EMAIL, FIXTURE_LOGIN_PASSWORD, FixtureLoginService, LoginService,
};
#[cfg(test)]
pub use restaurant_repository::MockRestaurantRepository;
pub use restaurant_repository::{
    DEFAULT_SEARCH_RADIUS_METRES, FixtureRestaurantRepository, NearbyQuery, RestaurantRepository,
};
