use super::common::{StudentAttemptResponse, pass_threshold};
use crate::response::ApiResponse;
use crate::routes::common::{domain_error, not_found, parse_id};
use crate::routes::teacher::common::{TestResponse, TestSummaryResponse};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::{authoring, grading};
use util::state::AppState;

/// GET /api/student/tests
///
/// Every available test, newest first.
pub async fn list_tests(State(app_state): State<AppState>) -> Response {
    match authoring::list_tests(app_state.db()).await {
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

/// GET /api/student/tests/{test_id}
///
/// The test as shown while taking it: `correctOption` is left out.
pub async fn get_test_for_student(
    State(app_state): State<AppState>,
    Path(test_id): Path<String>,
) -> Response {
    let Some(test_id) = parse_id(&test_id) else {
        return not_found("Test");
    };

    match authoring::get_test(app_state.db(), test_id).await {
        Ok(full) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                TestResponse::new(full, false),
                "Test retrieved successfully",
            )),
        )
            .into_response(),
        Err(e) => domain_error(e),
    }
}

/// GET /api/student/{student_id}/attempts
///
/// ### Responses
/// - `200 OK` with the student's attempts, oldest first
/// - `400 Bad Request` when the user is not a student
/// - `404 Not Found` when the student does not exist
pub async fn list_student_attempts(
    State(app_state): State<AppState>,
    Path(student_id): Path<String>,
) -> Response {
    let Some(student_id) = parse_id(&student_id) else {
        return not_found("Student");
    };

    match grading::student_attempts(app_state.db(), student_id).await {
        Ok(rows) => {
            let threshold = pass_threshold(&app_state);
            let attempts: Vec<StudentAttemptResponse> = rows
                .into_iter()
                .map(|row| StudentAttemptResponse::new(row, threshold))
                .collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(
                    attempts,
                    "Attempts retrieved successfully",
                )),
            )
                .into_response()
        }
        Err(e) => domain_error(e),
    }
}
