//! Overpass outbound adapters.
//!
//! This module provides the Overpass-backed implementation of the
//! `RestaurantRepository` port together with its transport and mapping
//! collaborators.

mod dto;
mod http_transport;
mod mapper;
mod query;
mod restaurant_repository;
mod transport;

pub use dto::{
    OverpassBounds, OverpassCoordinate, OverpassElement, OverpassMember, OverpassResponse,
};
pub use http_transport::{
    DEFAULT_OVERPASS_ENDPOINT, DEFAULT_REQUEST_TIMEOUT, DEFAULT_USER_AGENT, OverpassHttpTransport,
};
pub use mapper::{OsmRestaurantMapper, RestaurantMapper, RestaurantMappingError};
pub use query::{DEFAULT_QUERY_TIMEOUT_SECONDS, build_nearby_restaurants_query};
pub use restaurant_repository::{NearbyLookupError, OverpassRestaurantRepository};
pub use transport::{OverpassTransport, OverpassTransportError};
