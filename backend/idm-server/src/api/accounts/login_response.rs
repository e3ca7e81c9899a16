use crate::AccountDto;

use idm_account::Authenticated;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
    /// Unix seconds, same as the token's `exp` claim
    pub expires_at: i64,
    pub account: AccountDto,
}

impl From<Authenticated> for LoginResponse {
    fn from(a: Authenticated) -> Self {
        Self {
            token: a.token,
            expires_at: a.expires_at.timestamp(),
            account: a.account.into(),
        }
    }
}
