use anyhow::Result;
use sea_orm::{ConnectionTrait, DatabaseConnection, SqlxPostgresConnector, Statement};
use sqlx::postgres::PgPoolOptions;

pub type DbPool = sqlx::PgPool;
pub type OrmConn = DatabaseConnection;

const RESET_SCHEMA: &str = r#"
    DROP TABLE IF EXISTS favorites;
    DROP TABLE IF EXISTS products;
    DROP TABLE IF EXISTS users;

    CREATE TABLE users (
      id UUID PRIMARY KEY,
      username VARCHAR(50) UNIQUE NOT NULL,
      password VARCHAR(255) NOT NULL
    );

    CREATE TABLE products (
      id UUID PRIMARY KEY,
      name VARCHAR(50) UNIQUE NOT NULL
    );

    CREATE TABLE favorites (
      id UUID PRIMARY KEY,
      user_id UUID REFERENCES users(id) NOT NULL,
      product_id UUID REFERENCES products(id) NOT NULL,
      CONSTRAINT unique_favorite UNIQUE (user_id, product_id)
    );
"#;

pub async fn create_pool(database_url: &str) -> Result<DbPool> {
    let pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(database_url)
        .await?;
    Ok(pool)
}

/// Wrap an existing sqlx pool in a SeaORM connection.
pub fn orm_from_pool(pool: DbPool) -> OrmConn {
    SqlxPostgresConnector::from_sqlx_postgres_pool(pool)
}

/// Drops and recreates every table. Destructive: all rows are lost.
pub async fn initialize_schema(conn: &OrmConn) -> Result<()> {
    let backend = conn.get_database_backend();
    // Postgres prepared statements cannot contain multiple commands,
    // so split the script and run each statement individually.
    for stmt in RESET_SCHEMA.split(';') {
        let stmt = stmt.trim();
        if stmt.is_empty() {
            continue;
        }
        let statement = format!("{stmt};");
        conn.execute(Statement::from_string(backend, statement))
            .await?;
    }
    tracing::debug!("schema reset");

    Ok(())
}
