use crate::{
    dto::{favorites::NewFavorite, products::NewProduct, users::NewUser},
    error::AppResult,
    models::{Favorite, Product, User},
    services::{favorite_service, product_service, user_service},
    state::AppState,
};

#[derive(Debug)]
pub struct SeedData {
    pub users: Vec<User>,
    pub products: Vec<Product>,
    pub favorites: Vec<Favorite>,
}

/// Inserts the demo users, products and one favorite. Expects a freshly reset schema.
pub async fn seed_demo_data(state: &AppState) -> AppResult<SeedData> {
    let (alexis, erick) = tokio::try_join!(
        user_service::create_user(state, new_user("Alexis", "password123")),
        user_service::create_user(state, new_user("Erick", "securepass")),
    )?;

    let (laptop, phone) = tokio::try_join!(
        product_service::create_product(state, new_product("Laptop")),
        product_service::create_product(state, new_product("Phone")),
    )?;

    let favorite = favorite_service::create_favorite(
        state,
        NewFavorite {
            user_id: alexis.id,
            product_id: laptop.id,
        },
    )
    .await?;

    tracing::info!("seeded 2 users, 2 products and 1 favorite");
    Ok(SeedData {
        users: vec![alexis, erick],
        products: vec![laptop, phone],
        favorites: vec![favorite],
    })
}

fn new_user(username: &str, password: &str) -> NewUser {
    NewUser {
        username: username.to_string(),
        password: password.to_string(),
    }
}

fn new_product(name: &str) -> NewProduct {
    NewProduct {
        name: name.to_string(),
    }
}
