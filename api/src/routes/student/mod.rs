//! # Student Routes Module
//!
//! Test taking under `/api/student`.
//!
//! - `GET /api/student/tests` → `list_tests`
//! - `GET /api/student/tests/{test_id}` → `get_test_for_student`
//! - `POST /api/student/tests/{test_id}/submit` → `submit_test`
//! - `GET /api/student/{student_id}/attempts` → `list_student_attempts`

use axum::{
    Router,
    routing::{get, post},
};
use get::{get_test_for_student, list_student_attempts, list_tests};
use post::submit_test;
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

pub fn student_routes() -> Router<AppState> {
    Router::new()
        .route("/tests", get(list_tests))
        .route("/tests/{test_id}", get(get_test_for_student))
        .route("/tests/{test_id}/submit", post(submit_test))
        .route("/{student_id}/attempts", get(list_student_attempts))
}
