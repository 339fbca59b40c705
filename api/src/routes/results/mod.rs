//! # Results Routes Module
//!
//! - `GET /api/results/test/{test_id}` → `get_test_results`

use axum::{Router, routing::get};
use get::get_test_results;
use util::state::AppState;

pub mod get;

pub fn results_routes() -> Router<AppState> {
    Router::new().route("/test/{test_id}", get(get_test_results))
}
