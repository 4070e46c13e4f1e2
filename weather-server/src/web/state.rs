//! Application state for the web layer.

use std::sync::Arc;

use crate::viacep::CepResolver;
use crate::weatherapi::WeatherProvider;

/// Shared application state.
///
/// Generic over the two upstream capabilities so the full pipeline can be
/// run against deterministic fakes in tests.
pub struct AppState<R, W> {
    /// Postal code resolver
    pub resolver: Arc<R>,

    /// Weather provider
    pub weather: Arc<W>,
}

impl<R, W> AppState<R, W>
where
    R: CepResolver,
    W: WeatherProvider,
{
    /// Create a new app state.
    pub fn new(resolver: R, weather: W) -> Self {
        Self {
            resolver: Arc::new(resolver),
            weather: Arc::new(weather),
        }
    }
}

// Derived Clone would demand R: Clone and W: Clone; only the Arcs are
// cloned.
impl<R, W> Clone for AppState<R, W> {
    fn clone(&self) -> Self {
        Self {
            resolver: Arc::clone(&self.resolver),
            weather: Arc::clone(&self.weather),
        }
    }
}
