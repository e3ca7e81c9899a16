//! Business operations on accounts.

use idm_core::{Account, AccountId, AccountPage, RequestContext, Result};

use std::fmt;

use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// Input to [`AccountWorkflow::register`]
#[derive(Clone)]
pub struct Registration {
    pub username: String,
    pub email: String,
    pub password: String,
    pub display_name: String,
}

impl fmt::Debug for Registration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Registration")
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .field("display_name", &self.display_name)
            .finish()
    }
}

/// Profile changes. `None` and `Some("")` both leave a field unchanged.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub display_name: Option<String>,
    pub avatar_reference: Option<String>,
}

/// Successful authentication
#[derive(Debug, Clone)]
pub struct Authenticated {
    pub token: String,
    pub expires_at: DateTime<Utc>,
    pub account: Account,
}

/// Account lifecycle and authentication.
///
/// Every failure is an `AppError` whose kind comes from the closed taxonomy.
#[async_trait]
pub trait AccountWorkflow: Send + Sync {
    async fn register(&self, ctx: &RequestContext, registration: Registration) -> Result<Account>;

    async fn authenticate(
        &self,
        ctx: &RequestContext,
        username: &str,
        password: &str,
    ) -> Result<Authenticated>;

    async fn get_by_id(&self, ctx: &RequestContext, id: AccountId) -> Result<Account>;

    async fn update(
        &self,
        ctx: &RequestContext,
        id: AccountId,
        changes: ProfileUpdate,
    ) -> Result<Account>;

    async fn delete(&self, ctx: &RequestContext, id: AccountId) -> Result<()>;

    /// Raw paging parameters are coerced, never rejected
    async fn list(&self, ctx: &RequestContext, page: i64, page_size: i64) -> Result<AccountPage>;

    /// Store liveness, for readiness probes
    async fn ping(&self, ctx: &RequestContext) -> Result<()>;
}
