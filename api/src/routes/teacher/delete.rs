use crate::response::{ApiResponse, Empty};
use crate::routes::common::{domain_error, not_found, parse_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::authoring;
use util::state::AppState;

/// DELETE /api/teacher/tests/{test_id}
///
/// Removes the test, its questions and every attempt submitted for it.
///
/// ### Responses
/// - `200 OK`
/// - `404 Not Found` when the test does not exist
pub async fn delete_test(
    State(app_state): State<AppState>,
    Path(test_id): Path<String>,
) -> Response {
    let Some(test_id) = parse_id(&test_id) else {
        return not_found("Test");
    };

    match authoring::delete_test(app_state.db(), test_id).await {
        Ok(()) => (
            StatusCode::OK,
            Json(ApiResponse::success(Empty::default(), "Test deleted successfully")),
        )
            .into_response(),
        Err(e) => domain_error(e),
    }
}
