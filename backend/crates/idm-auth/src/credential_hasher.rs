use crate::Result;

/// One-way salted credential hashing.
///
/// `verify` answers `Ok(false)` for a wrong password. An `Err` means the
/// stored hash itself could not be used.
pub trait CredentialHasher: Send + Sync {
    fn hash(&self, password: &str) -> Result<String>;

    fn verify(&self, password: &str, hash: &str) -> Result<bool>;
}
