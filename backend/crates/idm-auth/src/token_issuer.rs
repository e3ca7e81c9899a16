use crate::Result;

use idm_core::Account;

use chrono::{DateTime, Utc};

#[derive(Debug, Clone)]
pub struct IssuedToken {
    pub token: String,
    pub expires_at: DateTime<Utc>,
}

/// Produces an opaque bearer token for an authenticated account.
pub trait TokenIssuer: Send + Sync {
    fn issue(&self, account: &Account) -> Result<IssuedToken>;
}
