use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult, models::User, routes::favorites, services::user_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_users))
        .nest("/{user_id}/favorites", favorites::router())
}

#[utoipa::path(
    get,
    path = "/api/users",
    responses(
        (status = 200, description = "All users, without passwords", body = Vec<User>),
        (status = 500, description = "Database failure")
    ),
    tag = "Users"
)]
pub async fn list_users(State(state): State<AppState>) -> AppResult<Json<Vec<User>>> {
    let users = user_service::fetch_users(&state).await?;
    Ok(Json(users))
}
