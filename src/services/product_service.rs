use sea_orm::{ActiveModelTrait, EntityTrait, Set};
use uuid::Uuid;

use crate::{
    dto::products::NewProduct,
    entity::products::{ActiveModel, Entity as Products, Model as ProductModel},
    error::AppResult,
    models::Product,
    state::AppState,
};

pub async fn create_product(state: &AppState, payload: NewProduct) -> AppResult<Product> {
    let active = ActiveModel {
        id: Set(Uuid::new_v4()),
        name: Set(payload.name),
    };
    let product = active.insert(&state.orm).await?;

    tracing::debug!(product_id = %product.id, "product created");
    Ok(product_from_entity(product))
}

pub async fn fetch_products(state: &AppState) -> AppResult<Vec<Product>> {
    let products = Products::find()
        .all(&state.orm)
        .await?
        .into_iter()
        .map(product_from_entity)
        .collect();
    Ok(products)
}

fn product_from_entity(model: ProductModel) -> Product {
    Product {
        id: model.id,
        name: model.name,
    }
}
