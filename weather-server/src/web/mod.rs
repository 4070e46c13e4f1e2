//! Web layer for the weather service.
//!
//! Provides the HTTP endpoints: current temperature by postal code, and a
//! liveness probe.

mod dto;
mod routes;
mod state;

pub use dto::*;
pub use routes::create_router;
pub use state::AppState;
