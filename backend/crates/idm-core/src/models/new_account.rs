use crate::AccountStatus;

use std::fmt;

/// Account fields supplied to the store on creation.
/// Identity and timestamps are assigned by the store.
#[derive(Clone, PartialEq, Eq)]
pub struct NewAccount {
    pub username: String,
    pub email: String,
    pub credential_hash: String,
    pub display_name: String,
    pub avatar_reference: String,
    pub status: AccountStatus,
}

impl NewAccount {
    /// Active account with an empty avatar
    pub fn active(
        username: String,
        email: String,
        credential_hash: String,
        display_name: String,
    ) -> Self {
        Self {
            username,
            email,
            credential_hash,
            display_name,
            avatar_reference: String::new(),
            status: AccountStatus::Active,
        }
    }
}

impl fmt::Debug for NewAccount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NewAccount")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("credential_hash", &"<redacted>")
            .field("display_name", &self.display_name)
            .field("avatar_reference", &self.avatar_reference)
            .field("status", &self.status)
            .finish()
    }
}
