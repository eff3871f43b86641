//! HTTP API layer with Axum routes.
//!
//! This crate provides:
//! - The conversion route
//! - Response and error payload types

pub mod routes;

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use kawase_core::currency::ConversionService;

/// Application state shared across handlers.
#[derive(Clone)]
pub struct AppState {
    /// Conversion service over the static rate table.
    pub converter: Arc<ConversionService>,
}

/// Creates the main application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(routes::api_routes())
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}
