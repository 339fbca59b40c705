//! # Teacher Routes Module
//!
//! Test authoring under `/api/teacher`.
//!
//! - `GET /api/teacher/{teacher_id}/tests` → `list_teacher_tests`
//! - `POST /api/teacher/tests` → `create_test`
//! - `GET /api/teacher/tests/{test_id}` → `get_test`
//! - `PUT /api/teacher/tests/{test_id}` → `update_test`
//! - `DELETE /api/teacher/tests/{test_id}` → `delete_test`

use axum::{
    Router,
    routing::{get, post},
};
use delete::delete_test;
use get::{get_test, list_teacher_tests};
use post::create_test;
use put::update_test;
use util::state::AppState;

pub mod common;
pub mod delete;
pub mod get;
pub mod post;
pub mod put;

pub fn teacher_routes() -> Router<AppState> {
    Router::new()
        .route("/tests", post(create_test))
        .route(
            "/tests/{test_id}",
            get(get_test).put(update_test).delete(delete_test),
        )
        .route("/{teacher_id}/tests", get(list_teacher_tests))
}
