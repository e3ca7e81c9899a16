use idm_db::{SqliteAccountStore, create_memory_pool, run_migrations};

use sqlx::SqlitePool;

/// Creates an in-memory SQLite pool with migrations run
pub async fn create_test_pool() -> SqlitePool {
    let pool = create_memory_pool()
        .await
        .expect("Failed to create test pool");

    run_migrations(&pool)
        .await
        .expect("Failed to run migrations");

    pool
}

pub async fn create_test_store() -> SqliteAccountStore {
    SqliteAccountStore::new(create_test_pool().await)
}
