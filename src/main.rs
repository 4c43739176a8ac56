use std::net::{IpAddr, SocketAddr};

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use acme_store_api::{
    config::AppConfig,
    db::{create_pool, initialize_schema},
    routes::create_app,
    seed::seed_demo_data,
    services::{favorite_service, product_service, user_service},
    state::AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,acme_store_api=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = AppConfig::from_env()?;

    tracing::info!("connecting to database");
    let state = AppState::new(create_pool(&config.database_url).await?);
    tracing::info!("connected to database");

    initialize_schema(&state.orm).await?;
    tracing::info!("tables created");

    let seeded = seed_demo_data(&state).await?;
    tracing::info!(users = ?user_service::fetch_users(&state).await?, "users");
    tracing::info!(products = ?product_service::fetch_products(&state).await?, "products");
    if let Some(alexis) = seeded.users.first() {
        let favorites = favorite_service::fetch_favorites(&state, alexis.id).await?;
        tracing::info!(?favorites, "favorites for {}", alexis.username);
    }

    let addr = SocketAddr::from((config.host.parse::<IpAddr>()?, config.port));
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("server running on {}", addr);

    axum::serve(listener, create_app(state)).await?;

    Ok(())
}
