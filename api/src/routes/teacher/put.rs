use super::common::{TestResponse, UpdateTestRequest};
use crate::response::ApiResponse;
use crate::routes::common::{domain_error, not_found, parse_id, validation_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::authoring;
use util::state::AppState;
use validator::Validate;

/// PUT /api/teacher/tests/{test_id}
///
/// Replaces title, subject and questions. Attempts already submitted keep
/// the score and `totalPoints` they were graded with.
///
/// ### Responses
/// - `200 OK` with the updated test
/// - `400 Bad Request` on invalid input
/// - `404 Not Found` when the test does not exist
pub async fn update_test(
    State(app_state): State<AppState>,
    Path(test_id): Path<String>,
    Json(req): Json<UpdateTestRequest>,
) -> Response {
    let Some(test_id) = parse_id(&test_id) else {
        return not_found("Test");
    };
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }

    match authoring::update_test(app_state.db(), test_id, req.into()).await {
        Ok(full) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TestResponse::new(full, true),
                "Test updated successfully",
            )),
        )
            .into_response(),
        Err(e) => domain_error(e),
    }
}
