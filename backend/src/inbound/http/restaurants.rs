//! Restaurant discovery handlers.
//!
//! ```text
//! GET /api/v1/restaurants/nearby?latitude=51.5074&longitude=-0.1278&radius=500
//! ```

use actix_web::{HttpResponse, get, web};
use serde::Deserialize;

use crate::domain::ports::NearbyQuery;
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Query string for `GET /api/v1/restaurants/nearby`.
#[derive(Debug, Deserialize)]
pub struct NearbyParams {
    /// Latitude of the search centre in degrees.
    pub latitude: f64,
    /// Longitude of the search centre in degrees.
    pub longitude: f64,
    /// Search radius in metres; defaults to 1000 when omitted.
    pub radius: Option<f64>,
}

impl From<NearbyParams> for NearbyQuery {
    fn from(value: NearbyParams) -> Self {
        Self::around(value.latitude, value.longitude, value.radius)
    }
}

/// Find restaurants around a coordinate.
///
/// Upstream failures never reach the client: the response is then an empty
/// array.
#[get("/restaurants/nearby")]
pub async fn nearby_restaurants(
    state: web::Data<HttpState>,
    params: web::Query<NearbyParams>,
) -> ApiResult<HttpResponse> {
    let query = NearbyQuery::from(params.into_inner());
    let restaurants = state.restaurants.find_nearby_restaurants(&query).await;
    Ok(HttpResponse::Ok().json(restaurants))
}
