use super::common::{ListUsersQuery, UserResponse};
use crate::response::ApiResponse;
use crate::routes::common::{not_found, parse_id, store_error};
use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use db::models::user::{Column as UserColumn, Entity as UserEntity};
use sea_orm::{ColumnTrait, EntityTrait, QueryFilter, QueryOrder};
use util::state::AppState;

/// GET /users
///
/// Lists users ordered by id, optionally filtered by `?role=teacher|student`.
///
/// ### Responses
/// - `200 OK` with `data` as an array of users
/// - `500 Internal Server Error` on database failure
pub async fn list_users(
    State(app_state): State<AppState>,
    Query(query): Query<ListUsersQuery>,
) -> Response {
    let mut select = UserEntity::find().order_by_asc(UserColumn::Id);
    if let Some(role) = query.role {
        select = select.filter(UserColumn::Role.eq(role));
    }

    match select.all(app_state.db()).await {
        Ok(users) => {
            let users: Vec<UserResponse> = users.into_iter().map(UserResponse::from).collect();
            (
                StatusCode::OK,
                Json(ApiResponse::success(users, "Users retrieved successfully")),
            )
                .into_response()
        }
        Err(e) => store_error(e),
    }
}

/// GET /users/{user_id}
///
/// ### Responses
/// - `200 OK` with the user
/// - `404 Not Found` when no such user exists
pub async fn get_user(State(app_state): State<AppState>, Path(user_id): Path<String>) -> Response {
    let Some(user_id) = parse_id(&user_id) else {
        return not_found("User");
    };

    match UserEntity::find_by_id(user_id).one(app_state.db()).await {
        Ok(Some(user)) => (
            StatusCode::OK,
            Json(ApiResponse::success(
                UserResponse::from(user),
                "User retrieved successfully",
            )),
        )
            .into_response(),
        Ok(None) => not_found("User"),
        Err(e) => store_error(e),
    }
}
