use idm_core::{Account, AccountStatus};

use serde::Serialize;

/// Public account projection. The credential hash never leaves the server.
#[derive(Debug, Serialize)]
pub struct AccountDto {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub avatar_reference: String,
    pub status: AccountStatus,
    pub created_at: i64,
    pub updated_at: i64,
}

impl From<Account> for AccountDto {
    fn from(a: Account) -> Self {
        Self {
            id: a.id.0,
            username: a.username,
            email: a.email,
            display_name: a.display_name,
            avatar_reference: a.avatar_reference,
            status: a.status,
            created_at: a.created_at.timestamp(),
            updated_at: a.updated_at.timestamp(),
        }
    }
}
