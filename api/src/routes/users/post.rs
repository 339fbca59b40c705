use super::common::{LoginRequest, RegisterRequest, UserResponse};
use crate::response::ApiResponse;
use crate::routes::common::{error_response, store_error, validation_error};
use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::Model as UserModel;
use sea_orm::SqlErr;
use util::state::AppState;
use validator::Validate;

fn email_taken() -> Response {
    error_response(StatusCode::CONFLICT, "A user with this email already exists")
}

/// POST /users/register
///
/// ### Request Body
/// ```json
/// { "name": "Thandi", "email": "thandi@school.test", "password": "secret1", "role": "student" }
/// ```
///
/// ### Responses
/// - `201 Created` with the new user (no password hash)
/// - `400 Bad Request` on validation failure
/// - `409 Conflict` when the email is already registered
pub async fn register(
    State(app_state): State<AppState>,
    Json(req): Json<RegisterRequest>,
) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }
    if req.name.trim().is_empty() {
        return error_response(StatusCode::BAD_REQUEST, "Name is required");
    }

    let db = app_state.db();
    match UserModel::find_by_email(db, &req.email).await {
        Ok(Some(_)) => return email_taken(),
        Ok(None) => {}
        Err(e) => return store_error(e),
    }

    match UserModel::create(db, &req.name, &req.email, &req.password, req.role).await {
        Ok(user) => {
            tracing::info!(user_id = user.id, role = %user.role, "User registered");
            (
                StatusCode::CREATED,
                Json(ApiResponse::success(
                    UserResponse::from(user),
                    "User registered successfully",
                )),
            )
                .into_response()
        }
        Err(e) if matches!(e.sql_err(), Some(SqlErr::UniqueConstraintViolation(_))) => {
            email_taken()
        }
        Err(e) => store_error(e),
    }
}

/// POST /users/login
///
/// Checks the credentials and returns the matching user. Issuing a session
/// is left to the surrounding auth layer.
///
/// ### Responses
/// - `200 OK` with the user
/// - `400 Bad Request` on validation failure
/// - `401 Unauthorized` on unknown email or wrong password
pub async fn login(State(app_state): State<AppState>, Json(req): Json<LoginRequest>) -> Response {
    if let Err(e) = req.validate() {
        return validation_error(&e);
    }

    match UserModel::verify_credentials(app_state.db(), &req.email, &req.password).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "Login successful",
            )),
        )
            .into_response(),
        Ok(None) => error_response(StatusCode::UNAUTHORIZED, "Invalid email or password"),
        Err(e) => store_error(e),
    }
}
