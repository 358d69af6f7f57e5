//! Overpass-backed implementation of the `RestaurantRepository` port.
//!
//! Every failure (transport, HTTP status, decoding, mapping) is logged once
//! and reduced to an empty result, so discovery degrades to "nothing found"
//! instead of failing the caller.

use std::sync::Arc;

use async_trait::async_trait;
use tracing::{debug, error};

use super::mapper::{RestaurantMapper, RestaurantMappingError};
use super::query::{DEFAULT_QUERY_TIMEOUT_SECONDS, build_nearby_restaurants_query};
use super::transport::{OverpassTransport, OverpassTransportError};
use crate::domain::Restaurant;
use crate::domain::ports::{NearbyQuery, RestaurantRepository};

/// Failure of a single nearby lookup, before it is reduced to an empty result.
#[derive(Debug, thiserror::Error)]
pub enum NearbyLookupError {
    /// Fetching from Overpass failed.
    #[error(transparent)]
    Transport(#[from] OverpassTransportError),
    /// The response could not be mapped to restaurants.
    #[error(transparent)]
    Mapping(#[from] RestaurantMappingError),
}

/// Finds restaurants around a coordinate via the Overpass API.
///
/// Holds no mutable state; one instance can serve concurrent lookups.
///
/// # Examples
/// ```no_run
/// use std::sync::Arc;
/// use std::time::Duration;
///
/// use restaurant_discovery::domain::ports::{NearbyQuery, RestaurantRepository};
/// use restaurant_discovery::outbound::overpass::{
///     DEFAULT_OVERPASS_ENDPOINT, OsmRestaurantMapper, OverpassHttpTransport,
///     OverpassRestaurantRepository,
/// };
///
/// # async fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// let transport =
///     OverpassHttpTransport::new(DEFAULT_OVERPASS_ENDPOINT.parse()?, Duration::from_secs(30))?;
/// let repository =
///     OverpassRestaurantRepository::new(Arc::new(transport), Arc::new(OsmRestaurantMapper));
/// let restaurants = repository
///     .find_nearby_restaurants(&NearbyQuery::new(51.5074, -0.1278))
///     .await;
/// println!("found {}", restaurants.len());
/// # Ok(())
/// # }
/// ```
pub struct OverpassRestaurantRepository {
    transport: Arc<dyn OverpassTransport>,
    mapper: Arc<dyn RestaurantMapper>,
    query_timeout_seconds: u32,
}

impl OverpassRestaurantRepository {
    /// Build a repository using the default query timeout.
    pub fn new(transport: Arc<dyn OverpassTransport>, mapper: Arc<dyn RestaurantMapper>) -> Self {
        Self {
            transport,
            mapper,
            query_timeout_seconds: DEFAULT_QUERY_TIMEOUT_SECONDS,
        }
    }

    /// Override the server-side timeout embedded in each query. Clamped to at
    /// least one second.
    pub fn with_query_timeout(mut self, seconds: u32) -> Self {
        self.query_timeout_seconds = seconds.max(1);
        self
    }

    /// Run one lookup without swallowing failures.
    ///
    /// # Errors
    ///
    /// Returns [`NearbyLookupError`] when the transport or the mapper fails.
    pub async fn try_find_nearby(
        &self,
        query: &NearbyQuery,
    ) -> Result<Vec<Restaurant>, NearbyLookupError> {
        let text = build_nearby_restaurants_query(query, self.query_timeout_seconds);
        let response = self.transport.fetch(&text).await?;
        Ok(self.mapper.map_to_restaurants(response.elements)?)
    }
}

#[async_trait]
impl RestaurantRepository for OverpassRestaurantRepository {
    async fn find_nearby_restaurants(&self, query: &NearbyQuery) -> Vec<Restaurant> {
        match self.try_find_nearby(query).await {
            Ok(restaurants) => {
                debug!(
                    latitude = query.latitude,
                    longitude = query.longitude,
                    radius = query.radius_metres,
                    count = restaurants.len(),
                    "nearby restaurants fetched"
                );
                restaurants
            }
            Err(error) => {
                error!(
                    %error,
                    latitude = query.latitude,
                    longitude = query.longitude,
                    radius = query.radius_metres,
                    "failed to fetch restaurants"
                );
                Vec::new()
            }
        }
    }
}
