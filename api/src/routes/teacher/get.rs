use super::common::{TestResponse, TestSummaryResponse};
use crate::response::ApiResponse;
use crate::routes::common::{domain_error, not_found, parse_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::authoring;
use util::state::AppState;

/// GET /api/teacher/{teacher_id}/tests
///
/// The teacher's tests, newest first, with question and attempt counts.
///
/// ### Responses
/// - `200 OK`
/// - `400 Bad Request` when the user is not a teacher
/// - `404 Not Found` when the teacher does not exist
pub async fn list_teacher_tests(
    State(app_state): State<AppState>,
    Path(teacher_id): Path<String>,
) -> Response {
    let Some(teacher_id) = parse_id(&teacher_id) else {
        return not_found("Teacher");
    };

    match authoring::list_teacher_tests(app_state.db(), teacher_id).await {
        Ok(tests) => {
            let tests: Vec<TestSummaryResponse> =
                tests.into_iter().map(TestSummaryResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(tests, "Tests retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => domain_error(e),
    }
}

/// GET /api/teacher/tests/{test_id}
///
/// Full test including the correct option of every question.
pub async fn get_test(State(app_state): State<AppState>, Path(test_id): Path<String>) -> Response {
    let Some(test_id) = parse_id(&test_id) else {
        return not_found("Test");
    };

    match authoring::get_test(app_state.db(), test_id).await {
        Ok(full) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TestResponse::new(full, true),
                "Test retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => domain_error(e),
    }
}
