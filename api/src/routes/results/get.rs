use crate::routes::common::{error_response, not_found, parse_id, store_error};
use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::results::{self, ResultQueryError};
use util::state::AppState;

/// GET /api/results/test/{test_id}
///
/// Test metadata plus every attempt for it, each joined with the submitting
/// student. Attempts are in submission order.
///
/// ### Responses
///
/// - `200 OK` (bare payload, no envelope)
/// ```json
/// {
///   "testTitle": "Fractions",
///   "testSubject": "Maths",
///   "attempts": [
///     {
///       "_id": 4,
///       "testId": 2,
///       "score": 30,
///       "totalPoints": 50,
///       "submittedAt": "2025-05-23T18:00:00Z",
///       "studentId": { "_id": 9, "name": "Thandi" }
///     }
///   ]
/// }
/// ```
///
/// - `404 Not Found` when the test does not exist
/// - `500 Internal Server Error` when the database is unavailable
pub async fn get_test_results(
    State(app_state): State<AppState>,
    Path(test_id): Path<String>,
) -> Response {
    let Some(test_id) = parse_id(&test_id) else {
        return not_found("Test");
    };

    match results::get_test_results(app_state.db(), test_id).await {
        Ok(payload) => (StatusCode::OK, Json(payload)).into_response(),
        Err(err @ ResultQueryError::NotFound(_)) => {
            error_response(StatusCode::NOT_FOUND, err.to_string())
        }
        Err(ResultQueryError::Store(e)) => store_error(e),
    }
}
