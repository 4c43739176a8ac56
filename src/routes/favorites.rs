use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    routing::{delete, get},
};
use uuid::Uuid;

use crate::{
    dto::favorites::{AddFavoriteRequest, NewFavorite},
    error::AppResult,
    extract::{ApiJson, ApiPath},
    models::{Favorite, FavoriteProduct},
    services::favorite_service,
    state::AppState,
};

/// Mounted under `/api/users/{user_id}/favorites`.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_favorites).post(add_favorite))
        .route("/{favorite_id}", delete(remove_favorite))
}

#[utoipa::path(
    get,
    path = "/api/users/{user_id}/favorites",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    responses(
        (status = 200, description = "Favorites of the user with product names", body = Vec<FavoriteProduct>),
        (status = 500, description = "Database failure")
    ),
    tag = "Favorites"
)]
pub async fn list_favorites(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
) -> AppResult<Json<Vec<FavoriteProduct>>> {
    let favorites = favorite_service::fetch_favorites(&state, user_id).await?;
    Ok(Json(favorites))
}

#[utoipa::path(
    post,
    path = "/api/users/{user_id}/favorites",
    params(
        ("user_id" = Uuid, Path, description = "User ID")
    ),
    request_body = AddFavoriteRequest,
    responses(
        (status = 201, description = "Favorite created", body = Favorite),
        (status = 400, description = "Unknown user or product"),
        (status = 409, description = "Product is already a favorite of this user")
    ),
    tag = "Favorites"
)]
pub async fn add_favorite(
    State(state): State<AppState>,
    ApiPath(user_id): ApiPath<Uuid>,
    ApiJson(payload): ApiJson<AddFavoriteRequest>,
) -> AppResult<(StatusCode, Json<Favorite>)> {
    let favorite = favorite_service::create_favorite(
        &state,
        NewFavorite {
            user_id,
            product_id: payload.product_id,
        },
    )
    .await?;
    Ok((StatusCode::CREATED, Json(favorite)))
}

#[utoipa::path(
    delete,
    path = "/api/users/{user_id}/favorites/{favorite_id}",
    params(
        ("user_id" = Uuid, Path, description = "Owner of the favorite"),
        ("favorite_id" = Uuid, Path, description = "Favorite ID")
    ),
    responses(
        (status = 204, description = "Deleted, or nothing matched the pair")
    ),
    tag = "Favorites"
)]
pub async fn remove_favorite(
    State(state): State<AppState>,
    ApiPath((user_id, favorite_id)): ApiPath<(Uuid, Uuid)>,
) -> AppResult<StatusCode> {
    let removed = favorite_service::destroy_favorite(&state, favorite_id, user_id).await?;
    if removed == 0 {
        tracing::debug!(%user_id, %favorite_id, "no favorite matched, nothing deleted");
    }
    Ok(StatusCode::NO_CONTENT)
}
