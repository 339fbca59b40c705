use crate::response::ApiResponse;
use crate::routes::common::error_response;
use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use util::state::AppState;

pub fn health_routes() -> Router<AppState> {
    Router::new().route("/", get(health_check))
}

/// GET /api/health
///
/// Pings the database so a dead store shows up here before it shows up as
/// failing result pages.
///
/// ### Responses
/// - `200 OK` with `data: "OK"`
/// - `503 Service Unavailable` when the database does not answer
async fn health_check(State(app_state): State<AppState>) -> Response {
    match app_state.db().ping().await {
        Ok(()) => Json(ApiResponse::success("OK", "Health check passed")).into_response(),
        Err(e) => {
            tracing::error!(error = %e, "Health check failed");
            error_response(StatusCode::SERVICE_UNAVAILABLE, "Database unavailable")
        }
    }
}
