use idm_core::{
    Account, AccountId, AccountStore, NewAccount, RequestContext, StoreError, StoreResult,
};

use std::sync::Arc;

use async_trait::async_trait;

/// Store whose username/email lookups never find anything.
///
/// Simulates a registration whose pre-checks ran before a competing
/// registration committed, so only the store's UNIQUE constraints stand
/// between the workflow and a duplicate.
pub struct BlindLookupStore {
    inner: Arc<dyn AccountStore>,
}

impl BlindLookupStore {
    pub fn new(inner: Arc<dyn AccountStore>) -> Self {
        Self { inner }
    }
}

#[async_trait]
impl AccountStore for BlindLookupStore {
    async fn create(&self, ctx: &RequestContext, account: NewAccount) -> StoreResult<Account> {
        self.inner.create(ctx, account).await
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: AccountId) -> StoreResult<Account> {
        self.inner.get_by_id(ctx, id).await
    }

    async fn get_by_username(
        &self,
        _ctx: &RequestContext,
        username: &str,
    ) -> StoreResult<Account> {
        Err(StoreError::not_found(format!("username={username}")))
    }

    async fn get_by_email(&self, _ctx: &RequestContext, email: &str) -> StoreResult<Account> {
        Err(StoreError::not_found(format!("email={email}")))
    }

    async fn update(&self, ctx: &RequestContext, account: &Account) -> StoreResult<Account> {
        self.inner.update(ctx, account).await
    }

    async fn delete(&self, ctx: &RequestContext, id: AccountId) -> StoreResult<()> {
        self.inner.delete(ctx, id).await
    }

    async fn list(
        &self,
        ctx: &RequestContext,
        offset: u64,
        limit: u32,
    ) -> StoreResult<(Vec<Account>, u64)> {
        self.inner.list(ctx, offset, limit).await
    }

    async fn ping(&self, ctx: &RequestContext) -> StoreResult<()> {
        self.inner.ping(ctx).await
    }
}
