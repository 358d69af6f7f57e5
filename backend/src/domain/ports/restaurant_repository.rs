//! Driven port for discovering restaurants near a coordinate.
//!
//! Lookups never fail visibly: implementations reduce every failure to an
//! empty result and record the cause in the logs.

use async_trait::async_trait;

use crate::domain::Restaurant;

/// Search radius applied when the caller does not supply one, in metres.
pub const DEFAULT_SEARCH_RADIUS_METRES: f64 = 1000.0;

/// Coordinate and radius describing one nearby-restaurant lookup.
///
/// Values are not range-checked; out-of-range coordinates simply produce a
/// query that matches nothing.
///
/// # Examples
/// ```
/// use restaurant_discovery::domain::ports::{DEFAULT_SEARCH_RADIUS_METRES, NearbyQuery};
///
/// let query = NearbyQuery::new(51.5074, -0.1278);
/// assert_eq!(query.radius_metres, DEFAULT_SEARCH_RADIUS_METRES);
/// assert_eq!(query.with_radius(250.0).radius_metres, 250.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NearbyQuery {
    /// Latitude of the search centre in degrees.
    pub latitude: f64,
    /// Longitude of the search centre in degrees.
    pub longitude: f64,
    /// Search radius in metres.
    pub radius_metres: f64,
}

impl NearbyQuery {
    /// Build a query using [`DEFAULT_SEARCH_RADIUS_METRES`].
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            radius_metres: DEFAULT_SEARCH_RADIUS_METRES,
        }
    }

    /// Build a query from an optional radius, falling back to the default.
    pub fn around(latitude: f64, longitude: f64, radius_metres: Option<f64>) -> Self {
        let query = Self::new(latitude, longitude);
        match radius_metres {
            Some(radius) => query.with_radius(radius),
            None => query,
        }
    }

    /// Override the search radius.
    pub fn with_radius(mut self, radius_metres: f64) -> Self {
        self.radius_metres = radius_metres;
        self
    }
}

/// Port for finding restaurants around a coordinate.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait RestaurantRepository: Send + Sync {
    /// Return restaurants within the query radius.
    ///
    /// An empty result means either that nothing was found or that the
    /// lookup failed; callers cannot tell the two apart.
    async fn find_nearby_restaurants(&self, query: &NearbyQuery) -> Vec<Restaurant>;
}

/// Fixture implementation returning no restaurants.
#[derive(Debug, Clone, Copy, Default)]
pub struct FixtureRestaurantRepository;

#[async_trait]
impl RestaurantRepository for FixtureRestaurantRepository {
    async fn find_nearby_restaurants(&self, _query: &NearbyQuery) -> Vec<Restaurant> {
        Vec::new()
    }
}
