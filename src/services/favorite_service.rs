use uuid::Uuid;

use crate::{
    dto::favorites::NewFavorite,
    error::AppResult,
    models::{Favorite, FavoriteProduct},
    state::AppState,
};

/// Fails with a conflict on a duplicate pair and a bad request on an unknown user or product;
/// both come straight from the table constraints.
pub async fn create_favorite(state: &AppState, payload: NewFavorite) -> AppResult<Favorite> {
    let id = Uuid::new_v4();
    let favorite = sqlx::query_as::<_, Favorite>(
        r#"
        INSERT INTO favorites (id, user_id, product_id)
        VALUES ($1, $2, $3)
        RETURNING id, user_id, product_id
        "#,
    )
    .bind(id)
    .bind(payload.user_id)
    .bind(payload.product_id)
    .fetch_one(&state.pool)
    .await?;

    tracing::debug!(
        favorite_id = %favorite.id,
        user_id = %favorite.user_id,
        product_id = %favorite.product_id,
        "favorite created"
    );
    Ok(favorite)
}

/// Empty for a user with no favorites as well as for an unknown user.
pub async fn fetch_favorites(state: &AppState, user_id: Uuid) -> AppResult<Vec<FavoriteProduct>> {
    let favorites = sqlx::query_as::<_, FavoriteProduct>(
        r#"
        SELECT f.id, p.name AS product_name
        FROM favorites f
        JOIN products p ON p.id = f.product_id
        WHERE f.user_id = $1
        "#,
    )
    .bind(user_id)
    .fetch_all(&state.pool)
    .await?;
    Ok(favorites)
}

/// Deletes the favorite only when it belongs to `user_id`. Returns the number of rows removed,
/// which is zero when nothing matched.
pub async fn destroy_favorite(state: &AppState, id: Uuid, user_id: Uuid) -> AppResult<u64> {
    let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
        .bind(id)
        .bind(user_id)
        .execute(&state.pool)
        .await?;

    Ok(result.rows_affected())
}
