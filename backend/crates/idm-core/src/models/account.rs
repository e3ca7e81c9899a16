//! Account entity - a registered identity.

use crate::{AccountId, AccountStatus};

use std::fmt;

use chrono::{DateTime, Utc};

/// A persisted account.
///
/// Not `Serialize`: outward projections are built at the
/// request boundary and never include `credential_hash`.
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    pub id: AccountId,
    /// Unique, immutable after creation
    pub username: String,
    /// Unique
    pub email: String,
    /// PHC-formatted one-way hash, never empty
    pub credential_hash: String,
    pub display_name: String,
    /// URI or path, may be empty
    pub avatar_reference: String,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Account {
    pub fn is_active(&self) -> bool {
        self.status.is_active()
    }
}

impl fmt::Debug for Account {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("credential_hash", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("avatar_reference", &self.avatar_reference)
            .field("status", &self.status)
            .field("created_at", &self.created_at)
            .field("updated_at", &self.updated_at)
            .finish()
    }
}
