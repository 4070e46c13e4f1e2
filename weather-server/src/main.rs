use std::net::SocketAddr;

use tracing_subscriber::EnvFilter;

use weather_server::viacep::{ViaCepClient, ViaCepConfig};
use weather_server::weatherapi::{WeatherApiClient, WeatherApiConfig};
use weather_server::web::{AppState, create_router};

/// Port used when PORT is not set.
const DEFAULT_PORT: u16 = 8080;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // Get the weather credential from the environment
    let api_key = std::env::var("WEATHER_API_KEY").unwrap_or_else(|_| {
        tracing::warn!("WEATHER_API_KEY not set. Weather lookups will fail.");
        String::new()
    });

    let port = std::env::var("PORT")
        .ok()
        .and_then(|p| p.parse().ok())
        .unwrap_or(DEFAULT_PORT);

    // Create upstream clients
    let resolver = ViaCepClient::new(ViaCepConfig::new()).expect("Failed to create ViaCEP client");
    let weather = WeatherApiClient::new(WeatherApiConfig::new(api_key))
        .expect("Failed to create WeatherAPI client");

    // Build app state and router
    let state = AppState::new(resolver, weather);
    let app = create_router(state);

    // Bind and serve
    let addr = SocketAddr::from(([0, 0, 0, 0], port));
    tracing::info!("weather server listening on http://{addr}");
    tracing::info!("  GET /weather/:cep - current temperature for a postal code");
    tracing::info!("  GET /health       - health check");

    let listener = tokio::net::TcpListener::bind(addr).await.unwrap();
    axum::serve(listener, app).await.unwrap();
}
