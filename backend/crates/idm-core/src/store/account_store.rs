//! Persistence contract consumed by the account workflow.

use crate::{Account, AccountId, NewAccount, RequestContext, StoreResult};

use async_trait::async_trait;

/// Account persistence.
///
/// Implementations must enforce uniqueness of username and email on
/// `create` independently of any lookup the caller made beforehand, and
/// report a violation as [`StoreError::Duplicate`](crate::StoreError::Duplicate).
/// Every operation honours the context's cancellation and deadline.
#[async_trait]
pub trait AccountStore: Send + Sync {
    /// Insert a new account, assigning identity and timestamps
    async fn create(&self, ctx: &RequestContext, account: NewAccount) -> StoreResult<Account>;

    async fn get_by_id(&self, ctx: &RequestContext, id: AccountId) -> StoreResult<Account>;

    async fn get_by_username(&self, ctx: &RequestContext, username: &str)
    -> StoreResult<Account>;

    async fn get_by_email(&self, ctx: &RequestContext, email: &str) -> StoreResult<Account>;

    /// Replace the mutable fields (display name, avatar, status) and
    /// refresh `updated_at`. Fails with `NotFound` for an unknown id.
    async fn update(&self, ctx: &RequestContext, account: &Account) -> StoreResult<Account>;

    /// Unconditional delete. Deleting an unknown id succeeds.
    async fn delete(&self, ctx: &RequestContext, id: AccountId) -> StoreResult<()>;

    /// Accounts ordered by id ascending, plus the total count
    async fn list(
        &self,
        ctx: &RequestContext,
        offset: u64,
        limit: u32,
    ) -> StoreResult<(Vec<Account>, u64)>;

    /// Cheap round-trip to the backing engine
    async fn ping(&self, ctx: &RequestContext) -> StoreResult<()>;
}
