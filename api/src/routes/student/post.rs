use super::common::{SubmitTestRequest, SubmitTestResponse, pass_threshold};
use crate::response::ApiResponse;
use crate::routes::common::{domain_error, not_found, parse_id};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::grading;
use util::state::AppState;

/// POST /api/student/tests/{test_id}/submit
///
/// ### Request Body
/// ```json
/// { "studentId": 7, "answers": [{ "questionId": 3, "selectedOption": 1 }] }
/// ```
///
/// ### Responses
/// - `201 Created` with `{ _id, score, totalPoints, percentage, passed }`
/// - `400 Bad Request` when the user is not a student
/// - `404 Not Found` when the test or student does not exist
/// - `409 Conflict` when the student already submitted this test
pub async fn submit_test(
    State(app_state): State<AppState>,
    Path(test_id): Path<String>,
    Json(req): Json<SubmitTestRequest>,
) -> Response {
    let Some(test_id) = parse_id(&test_id) else {
        return not_found("Test");
    };

    match grading::submit_attempt(app_state.db(), test_id, req.student_id, &req.answers).await {
        Ok(attempt) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                SubmitTestResponse::new(&attempt, pass_threshold(&app_state)),
                "Test submitted successfully",
            )),
        )
            .into_response(),
        Err(e) => domain_error(e),
    }
}
