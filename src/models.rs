use sea_orm::FromQueryResult;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Public view of a user. The password hash is never part of it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, FromQueryResult)]
pub struct User {
    pub id: Uuid,
    pub username: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Product {
    pub id: Uuid,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct Favorite {
    pub id: Uuid,
    pub user_id: Uuid,
    pub product_id: Uuid,
}

/// A favorite joined with the name of the product it points at.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema, sqlx::FromRow)]
pub struct FavoriteProduct {
    pub id: Uuid,
    pub product_name: String,
}
