//! Backend entry-point: loads settings, wires the Overpass adapter, and
//! serves the REST endpoints.

mod server;

use std::sync::Arc;

use actix_web::web;
use ortho_config::OrthoConfig;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

use restaurant_discovery::config::AppSettings;
use restaurant_discovery::domain::ports::FixtureLoginService;
use restaurant_discovery::inbound::http::health::HealthState;
use restaurant_discovery::inbound::http::state::HttpState;
use restaurant_discovery::outbound::overpass::{
    OsmRestaurantMapper, OverpassHttpTransport, OverpassRestaurantRepository,
};
use server::{ServerConfig, create_server};

/// Application bootstrap.
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    if let Err(e) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .try_init()
    {
        warn!(error = %e, "tracing init failed");
    }

    let settings = AppSettings::load_from_iter(std::env::args_os())
        .map_err(|e| std::io::Error::other(format!("failed to load settings: {e}")))?;
    let bind_addr = settings.bind_addr().map_err(std::io::Error::other)?;
    let endpoint = settings.overpass_endpoint().map_err(std::io::Error::other)?;

    let transport = OverpassHttpTransport::with_user_agent(
        endpoint.clone(),
        settings.overpass_timeout(),
        settings.overpass_user_agent(),
    )
    .map_err(|e| std::io::Error::other(format!("failed to build Overpass client: {e}")))?;
    let restaurants =
        OverpassRestaurantRepository::new(Arc::new(transport), Arc::new(OsmRestaurantMapper))
            .with_query_timeout(settings.overpass_query_timeout_secs());

    let http_state = HttpState::new(Arc::new(restaurants), Arc::new(FixtureLoginService));
    let health_state = web::Data::new(HealthState::new());
    let server = create_server(health_state, ServerConfig::new(bind_addr, http_state))?;

    info!(%bind_addr, overpass_endpoint = %endpoint, "server listening");
    server.await
}
