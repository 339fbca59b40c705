use super::common::{CreateTestRequest, TestResponse};
use crate::response::ApiResponse;
use crate::routes::common::{domain_error, validation_error};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::authoring;
use util::state::AppState;
use validator::Validate;

/// POST /api/teacher/tests
///
/// ### Request Body
/// ```json
/// {
///   "teacherId": 1,
///   "title": "Fractions",
///   "subject": "Maths",
///   "questions": [
///     { "text": "1/2 + 1/4?", "options": ["3/4", "2/6"], "correctOption": 0, "points": 5 }
///   ]
/// }
/// ```
///
/// ### Responses
/// - `201 Created` with the test; `totalPoints` is the sum of question points
/// - `400 Bad Request` on invalid questions or when the user is not a teacher
/// - `404 Not Found` when the teacher does not exist
pub async fn create_test(
    State(app_state): State<AppState>,
    Json(req): Json<CreateTestRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }

    let teacher_id = req.teacher_id;
    match authoring::create_test(app_state.db(), teacher_id, req.into()).await {
        Ok(full) => (
            StatusCode::CREATED,
            Json(ApiResponse::success(
                TestResponse::new(full, true),
                "Test created successfully",
            )),
        )
            .into_response(),
        Err(e) => domain_error(e),
    }
}
