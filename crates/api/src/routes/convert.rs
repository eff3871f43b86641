//! Currency conversion route.

use axum::{
    Json, Router,
    extract::{State, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
};
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::warn;

use crate::AppState;

/// Creates the conversion routes.
pub fn routes() -> Router<AppState> {
    Router::new().route("/convert", post(convert))
}

/// Request body for a conversion.
#[derive(Debug, Deserialize)]
pub struct ConvertRequest {
    /// Currency code followed by an integer amount, e.g. `USD100`.
    pub value: String,
}

/// Response body for a successful conversion.
#[derive(Debug, Serialize)]
pub struct ConvertResponse {
    /// Amount expressed in the reference currency, floored.
    pub answer: i64,
}

/// POST `/convert` - Convert a `<code><amount>` value into the reference currency.
async fn convert(
    State(state): State<AppState>,
    payload: Result<Json<ConvertRequest>, JsonRejection>,
) -> Response {
    let Ok(Json(request)) = payload else {
        return bad_request("Failed to decode data");
    };

    match state.converter.convert(&request.value) {
        Ok(answer) => (StatusCode::OK, Json(ConvertResponse { answer })).into_response(),
        Err(e) => {
            warn!(value = %request.value, "Rejected conversion request");
            bad_request(&e.to_string())
        }
    }
}

fn bad_request(message: &str) -> Response {
    (
        StatusCode::BAD_REQUEST,
        Json(json!({
            "error": "Bad Request",
            "message": message
        })),
    )
        .into_response()
}
