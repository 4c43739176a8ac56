use crate::db::{DbPool, OrmConn};

/// Handles shared by every request. Both point at the same underlying pool.
#[derive(Clone)]
pub struct AppState {
    pub pool: DbPool,
    pub orm: OrmConn,
}

impl AppState {
    pub fn new(pool: DbPool) -> Self {
        let orm = crate::db::orm_from_pool(pool.clone());
        Self { pool, orm }
    }
}
