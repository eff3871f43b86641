//! API route definitions.

use axum::Router;

use crate::AppState;

pub mod convert;

/// Creates the API router with all routes.
pub fn api_routes() -> Router<AppState> {
    Router::new().merge(convert::routes())
}
