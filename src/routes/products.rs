use axum::{Json, Router, extract::State, routing::get};

use crate::{
    error::AppResult, models::Product, services::product_service, state::AppState,
};

pub fn router() -> Router<AppState> {
    Router::new().route("/", get(list_products))
}

#[utoipa::path(
    get,
    path = "/api/products",
    responses(
        (status = 200, description = "All products", body = Vec<Product>),
        (status = 500, description = "Database failure")
    ),
    tag = "Products"
)]
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Vec<Product>>> {
    let products = product_service::fetch_products(&state).await?;
    Ok(Json(products))
}
