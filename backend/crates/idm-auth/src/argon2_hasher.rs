use crate::{AuthError, CredentialHasher, Result as AuthErrorResult};

use std::panic::Location;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::{self, SaltString};
use argon2::{Algorithm, Argon2, Params, PasswordHash, PasswordHasher, PasswordVerifier, Version};
use error_location::ErrorLocation;

/// Argon2id hasher producing PHC strings (`$argon2id$v=19$...`).
#[derive(Clone)]
pub struct Argon2Hasher {
    params: Params,
}

impl Argon2Hasher {
    /// Default OWASP-level cost (19 MiB, 2 iterations, 1 lane).
    pub fn new() -> Self {
        Self {
            params: Params::default(),
        }
    }

    #[track_caller]
    pub fn with_params(memory_kib: u32, iterations: u32, parallelism: u32) -> AuthErrorResult<Self> {
        let params = Params::new(memory_kib, iterations, parallelism, None).map_err(|e| {
            AuthError::Hashing {
                message: format!("Invalid Argon2 parameters: {e}"),
                location: ErrorLocation::from(Location::caller()),
            }
        })?;
        Ok(Self { params })
    }

    fn argon2(&self) -> Argon2<'static> {
        Argon2::new(Algorithm::Argon2id, Version::V0x13, self.params.clone())
    }
}

impl Default for Argon2Hasher {
    fn default() -> Self {
        Self::new()
    }
}

impl CredentialHasher for Argon2Hasher {
    #[track_caller]
    fn hash(&self, password: &str) -> AuthErrorResult<String> {
        let salt = SaltString::generate(&mut OsRng);

        let hash = self
            .argon2()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| AuthError::Hashing {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            })?;

        Ok(hash.to_string())
    }

    #[track_caller]
    fn verify(&self, password: &str, hash: &str) -> AuthErrorResult<bool> {
        let parsed = PasswordHash::new(hash).map_err(|e| AuthError::MalformedHash {
            message: e.to_string(),
            location: ErrorLocation::from(Location::caller()),
        })?;

        // Cost parameters come from the PHC string, not from self.params.
        match self.argon2().verify_password(password.as_bytes(), &parsed) {
            Ok(()) => Ok(true),
            Err(password_hash::Error::Password) => Ok(false),
            Err(e) => Err(AuthError::MalformedHash {
                message: e.to_string(),
                location: ErrorLocation::from(Location::caller()),
            }),
        }
    }
}
