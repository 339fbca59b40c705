//! Response helpers shared by every route group.

use crate::response::{ApiResponse, Empty};
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::DomainError;
use validator::ValidationErrors;

pub fn error_response(status: StatusCode, message: impl Into<String>) -> Response {
    (status, Json(ApiResponse::<Empty>::error(message))).into_response()
}

pub fn validation_error(errors: &ValidationErrors) -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        ::common::format_validation_errors(errors),
    )
}

/// Logs and hides the details of store failures; everything else is echoed.
pub fn store_error(err: impl std::fmt::Display) -> Response {
    tracing::error!(error = %err, "Database error");
    error_response(StatusCode::INTERNAL_SERVER_ERROR, "Database error")
}

pub fn domain_error(err: DomainError) -> Response {
    match err {
        DomainError::NotFound(_) => error_response(StatusCode::NOT_FOUND, err.to_string()),
        DomainError::Conflict(msg) => error_response(StatusCode::CONFLICT, msg),
        DomainError::Invalid(msg) => error_response(StatusCode::BAD_REQUEST, msg),
        DomainError::Store(e) => store_error(e),
    }
}

/// Parses a path identifier. Anything that is not a positive integer cannot
/// name an existing record, so callers answer 404 for `None`.
pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse::<i64>().ok().filter(|id| *id > 0)
}

pub fn not_found(what: &str) -> Response {
    error_response(StatusCode::NOT_FOUND, format!("{what} not found"))
}
