use api::routes::routes;
use axum::{
    body::{Body, to_bytes},
    http::Request,
    response::Response,
};
use db::test_utils::setup_test_db;
use serde_json::Value;
use std::convert::Infallible;
use tower::ServiceExt;
use tower::util::BoxCloneService;
use util::state::AppState;

/// Router backed by a fresh in-memory database, plus the state it runs on so
/// tests can seed data directly.
pub async fn make_test_app() -> (BoxCloneService<Request<Body>, Response, Infallible>, AppState) {
    build(AppState::new(setup_test_db().await))
}

/// Same as [`make_test_app`] with a custom pass mark.
pub async fn make_test_app_with_threshold(
    percent: u32,
) -> (BoxCloneService<Request<Body>, Response, Infallible>, AppState) {
    build(AppState::new(setup_test_db().await).with_pass_threshold(percent))
}

fn build(app_state: AppState) -> (BoxCloneService<Request<Body>, Response, Infallible>, AppState) {
    let service = routes(app_state.clone()).into_service().boxed_clone();
    (service, app_state)
}

pub async fn json_body(response: Response) -> Value {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}
