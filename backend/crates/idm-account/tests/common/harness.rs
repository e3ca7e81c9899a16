use idm_account::{AccountService, Registration};
use idm_auth::{Argon2Hasher, AuthError, CredentialHasher, JwtTokenIssuer};
use idm_core::AccountStore;
use idm_db::{SqliteAccountStore, create_memory_pool, create_pool, run_migrations};

use std::panic::Location;
use std::path::Path;
use std::sync::Arc;
use std::time::Duration;

use idm_core::ErrorLocation;

pub const TEST_SECRET: &[u8] = b"test-secret-key-at-least-32-bytes";

/// Cheap Argon2id parameters so tests stay fast
pub fn fast_hasher() -> Arc<Argon2Hasher> {
    Arc::new(Argon2Hasher::with_params(1024, 1, 1).expect("valid argon2 params"))
}

pub fn test_issuer() -> Arc<JwtTokenIssuer> {
    Arc::new(
        JwtTokenIssuer::with_hs256(TEST_SECRET, "idm", Duration::from_secs(3600))
            .expect("valid issuer"),
    )
}

pub async fn memory_store() -> Arc<SqliteAccountStore> {
    let pool = create_memory_pool().await.expect("memory pool");
    run_migrations(&pool).await.expect("migrations");
    Arc::new(SqliteAccountStore::new(pool))
}

pub async fn file_store(path: &Path) -> Arc<SqliteAccountStore> {
    let pool = create_pool(path, 8, Duration::from_secs(5))
        .await
        .expect("file pool");
    run_migrations(&pool).await.expect("migrations");
    Arc::new(SqliteAccountStore::new(pool))
}

pub fn service_over(store: Arc<dyn AccountStore>) -> AccountService {
    AccountService::new(store, fast_hasher(), test_issuer())
}

pub async fn memory_service() -> (AccountService, Arc<SqliteAccountStore>) {
    let store = memory_store().await;
    (service_over(store.clone()), store)
}

pub fn registration(username: &str, password: &str) -> Registration {
    Registration {
        username: username.to_string(),
        email: format!("{username}@example.com"),
        password: password.to_string(),
        display_name: format!("{username} display"),
    }
}

/// Hasher that always fails, for error-path tests
pub struct BrokenHasher;

impl CredentialHasher for BrokenHasher {
    fn hash(&self, _password: &str) -> idm_auth::Result<String> {
        Err(AuthError::Hashing {
            message: "entropy source unavailable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }

    fn verify(&self, _password: &str, _hash: &str) -> idm_auth::Result<bool> {
        Err(AuthError::MalformedHash {
            message: "unreadable".to_string(),
            location: ErrorLocation::from(Location::caller()),
        })
    }
}
