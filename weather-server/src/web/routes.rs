//! HTTP route handlers.
//!
//! The weather endpoint runs a fixed pipeline: validate the postal code,
//! resolve it to a city, fetch that city's current weather, convert,
//! respond. Each stage either feeds the next or short-circuits the request
//! with one of three fixed error responses.

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use tower_http::trace::TraceLayer;

use crate::domain::{Cep, TemperatureReport};
use crate::viacep::{CepResolver, ViaCepError};
use crate::weatherapi::{WeatherError, WeatherProvider};

use super::dto::{ErrorResponse, TemperatureResponse};
use super::state::AppState;

/// Create the application router.
pub fn create_router<R, W>(state: AppState<R, W>) -> Router
where
    R: CepResolver + 'static,
    W: WeatherProvider + 'static,
{
    Router::new()
        .route("/weather/:cep", get(weather_for_cep::<R, W>))
        .route("/health", get(health))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Health check endpoint.
async fn health() -> &'static str {
    "OK"
}

/// Current temperature for a postal code.
async fn weather_for_cep<R, W>(
    State(state): State<AppState<R, W>>,
    Path(raw_cep): Path<String>,
) -> Result<Json<TemperatureResponse>, AppError>
where
    R: CepResolver + 'static,
    W: WeatherProvider + 'static,
{
    let report =
        lookup_temperature(state.resolver.as_ref(), state.weather.as_ref(), &raw_cep).await?;
    Ok(Json(TemperatureResponse::from(report)))
}

/// Run the lookup pipeline for a raw postal code string.
///
/// The stages are strictly sequential: the weather query needs the city
/// name the resolver produces, so the two upstream calls cannot overlap.
async fn lookup_temperature<R, W>(
    resolver: &R,
    weather: &W,
    raw_cep: &str,
) -> Result<TemperatureReport, AppError>
where
    R: CepResolver,
    W: WeatherProvider,
{
    let cep = Cep::parse(raw_cep).map_err(|_| AppError::InvalidCep)?;

    let address = resolver.resolve(&cep).await?;

    tracing::info!(%cep, city = %address.city, "fetching current weather");

    let conditions = weather.current(&address.city).await?;

    Ok(TemperatureReport::from_celsius(conditions.temp_c))
}

/// Application error type.
///
/// Callers see one of three fixed message bodies; the `detail` strings are
/// only ever logged server-side.
#[derive(Debug)]
pub enum AppError {
    /// Postal code failed format validation
    InvalidCep,
    /// Postal code could not be resolved to an address
    CepLookupFailed { detail: String },
    /// Weather provider could not supply a reading
    WeatherFetchFailed { detail: String },
}

impl From<ViaCepError> for AppError {
    fn from(e: ViaCepError) -> Self {
        // Transport failures during resolution collapse into the same
        // outcome as an unknown CEP. Callers cannot tell the two apart;
        // the log line emitted on response is where the difference
        // survives.
        AppError::CepLookupFailed {
            detail: e.to_string(),
        }
    }
}

impl From<WeatherError> for AppError {
    fn from(e: WeatherError) -> Self {
        AppError::WeatherFetchFailed {
            detail: e.to_string(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            AppError::InvalidCep => (StatusCode::UNPROCESSABLE_ENTITY, "invalid zipcode"),
            AppError::CepLookupFailed { detail } => {
                tracing::warn!(%detail, "CEP lookup failed");
                (StatusCode::NOT_FOUND, "can not find zipcode")
            }
            AppError::WeatherFetchFailed { detail } => {
                tracing::error!(%detail, "weather fetch failed");
                (StatusCode::INTERNAL_SERVER_ERROR, "error fetching weather data")
            }
        };

        (status, Json(ErrorResponse { message })).into_response()
    }
}
