//! # Users Routes Module
//!
//! Routes for the `/users` endpoint group.
//!
//! - `get.rs`: list users, fetch one user
//! - `post.rs`: register, credential check

use axum::{
    Router,
    routing::{get, post},
};
use get::{get_user, list_users};
use post::{login, register};
use util::state::AppState;

pub mod common;
pub mod get;
pub mod post;

/// Builds the `/users` route group.
///
/// - `POST /users/register` → `register`
/// - `POST /users/login` → `login`
/// - `GET /users` → `list_users`
/// - `GET /users/{user_id}` → `get_user`
pub fn users_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .route("/register", post(register))
        .route("/login", post(login))
        .route("/{user_id}", get(get_user))
}
