//! HTTP route entry point.
//!
//! Route groups:
//! - `/` → plain-text greeting
//! - `/users` → registration, credential check, user lookup
//! - `/api/health` → health check
//! - `/api/teacher` → test authoring and management
//! - `/api/student` → test taking and own attempts
//! - `/api/results` → per-test results for the teacher dashboard

use crate::routes::{
    health::health_routes, results::results_routes, student::student_routes,
    teacher::teacher_routes, users::users_routes,
};
use axum::{Router, routing::get};
use util::state::AppState;

pub mod common;
pub mod health;
pub mod results;
pub mod student;
pub mod teacher;
pub mod users;

/// Builds the complete application router with its state attached.
pub fn routes(app_state: AppState) -> Router {
    let api: Router<AppState> = Router::new()
        .nest("/health", health_routes())
        .nest("/teacher", teacher_routes())
        .nest("/student", student_routes())
        .nest("/results", results_routes());

    Router::new()
        .route("/", get(root))
        .nest("/users", users_routes())
        .nest("/api", api)
        .with_state(app_state)
}

/// GET /
async fn root() -> &'static str {
    "Hello World!"
}
