pub mod connection;
pub mod error;
pub mod repositories;

pub use connection::sqlite_pool::{MEMORY_PATH, create_memory_pool, create_pool, run_migrations};
pub use error::{DbError, Result};
pub use repositories::sqlite_account_store::SqliteAccountStore;
