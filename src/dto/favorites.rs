use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

/// Body of `POST /api/users/{user_id}/favorites`. The user comes from the path.
#[derive(Debug, Deserialize, Serialize, ToSchema)]
pub struct AddFavoriteRequest {
    pub product_id: Uuid,
}

#[derive(Debug, Clone, Copy)]
pub struct NewFavorite {
    pub user_id: Uuid,
    pub product_id: Uuid,
}
