pub mod manager;
pub mod models;
pub mod repository;
pub mod schema;
pub mod seed;

pub use manager::{DatabaseError, DatabaseManager};
pub use schema::{create_schema, table_counts, TableCounts};
pub use seed::seed;

#[cfg(test)]
pub(crate) async fn seeded_pool() -> sqlx::SqlitePool {
    let pool = DatabaseManager::connect(&crate::config::AppConfig::development().database)
        .await
        .expect("in-memory pool");
    create_schema(&pool).await.expect("schema");
    seed(&pool).await.expect("seed");
    pool
}
