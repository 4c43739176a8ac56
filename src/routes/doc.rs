use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::favorites::AddFavoriteRequest,
    models::{Favorite, FavoriteProduct, Product, User},
    routes::{favorites, health, products, users},
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        users::list_users,
        products::list_products,
        favorites::list_favorites,
        favorites::add_favorite,
        favorites::remove_favorite
    ),
    components(
        schemas(
            User,
            Product,
            Favorite,
            FavoriteProduct,
            AddFavoriteRequest,
            health::HealthData
        )
    ),
    tags(
        (name = "Health", description = "Health check endpoint"),
        (name = "Users", description = "User endpoints"),
        (name = "Products", description = "Product endpoints"),
        (name = "Favorites", description = "Favorite endpoints, scoped by user"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
