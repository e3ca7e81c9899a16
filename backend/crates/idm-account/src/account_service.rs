//! The account workflow over a store, a hasher and a token issuer.
//!
//! Register's pre-checks and `create` are not atomic. Two registrations of
//! the same name can both pass the lookups; the store's UNIQUE constraint
//! rejects the second and its `Duplicate` is reported as `UserAlreadyExists`.

use crate::{AccountWorkflow, Authenticated, PageRequest, ProfileUpdate, Registration};

use idm_auth::{AuthError, CredentialHasher, TokenIssuer};
use idm_core::{
    Account, AccountId, AccountPage, AccountStore, AppError, ErrorKind, NewAccount,
    RequestContext, Result, StoreError,
};

use std::sync::Arc;

use async_trait::async_trait;

#[derive(Clone)]
pub struct AccountService {
    store: Arc<dyn AccountStore>,
    hasher: Arc<dyn CredentialHasher>,
    tokens: Arc<dyn TokenIssuer>,
}

impl AccountService {
    pub fn new(
        store: Arc<dyn AccountStore>,
        hasher: Arc<dyn CredentialHasher>,
        tokens: Arc<dyn TokenIssuer>,
    ) -> Self {
        Self {
            store,
            hasher,
            tokens,
        }
    }

    /// Ok(true) when `lookup` found an account, Ok(false) on NotFound
    #[track_caller]
    fn exists(result: std::result::Result<Account, StoreError>, what: &str) -> Result<bool> {
        match result {
            Ok(_) => Ok(true),
            Err(e) if e.is_not_found() => Ok(false),
            Err(e) => Err(database_error(format!("failed to check {what}"), e)),
        }
    }

    async fn hash_password(&self, password: String) -> Result<String> {
        let hasher = Arc::clone(&self.hasher);
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|e| AppError::wrap(ErrorKind::InternalError, "hashing task failed", e))?
            .map_err(|e| internal_auth_error("failed to hash password", e))
    }

    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool> {
        let hasher = Arc::clone(&self.hasher);
        let password = password.to_string();
        let hash = hash.to_string();
        tokio::task::spawn_blocking(move || hasher.verify(&password, &hash))
            .await
            .map_err(|e| AppError::wrap(ErrorKind::InternalError, "verify task failed", e))?
            .map_err(|e| internal_auth_error("failed to verify password", e))
    }
}

#[async_trait]
impl AccountWorkflow for AccountService {
    async fn register(&self, ctx: &RequestContext, registration: Registration) -> Result<Account> {
        log::debug!("{} Register '{}'", ctx.log_prefix(), registration.username);

        // 1. Username must be free
        let taken = self
            .store
            .get_by_username(ctx, &registration.username)
            .await;
        if Self::exists(taken, "username")? {
            return Err(AppError::new(
                ErrorKind::UserAlreadyExists,
                "username already exists",
            ));
        }

        // 2. Email must be free
        let taken = self.store.get_by_email(ctx, &registration.email).await;
        if Self::exists(taken, "email")? {
            return Err(AppError::new(
                ErrorKind::UserAlreadyExists,
                "email already exists",
            ));
        }

        // 3. Hash off the async workers
        let credential_hash = self.hash_password(registration.password).await?;

        // 4. Persist. UNIQUE constraints catch a registration that raced past 1-2.
        let new_account = NewAccount::active(
            registration.username,
            registration.email,
            credential_hash,
            registration.display_name,
        );

        let account = match self.store.create(ctx, new_account).await {
            Ok(account) => account,
            Err(StoreError::Duplicate { field, .. }) => {
                log::info!(
                    "{} Registration lost a race on {}",
                    ctx.log_prefix(),
                    field
                );
                return Err(AppError::new(
                    ErrorKind::UserAlreadyExists,
                    format!("{field} already exists"),
                ));
            }
            Err(e) => return Err(database_error("failed to create account", e)),
        };

        log::info!(
            "{} Registered account {} ({})",
            ctx.log_prefix(),
            account.id,
            account.username
        );

        Ok(account)
    }

    async fn authenticate(
        &self,
        ctx: &RequestContext,
        username: &str,
        password: &str,
    ) -> Result<Authenticated> {
        // 1. Resolve
        let account = match self.store.get_by_username(ctx, username).await {
            Ok(account) => account,
            Err(e) if e.is_not_found() => {
                return Err(AppError::from_kind(ErrorKind::UserNotFound));
            }
            Err(e) => return Err(database_error("failed to load account", e)),
        };

        // 2. Verify
        if !self
            .verify_password(password, &account.credential_hash)
            .await?
        {
            log::info!(
                "{} Invalid password for account {}",
                ctx.log_prefix(),
                account.id
            );
            return Err(AppError::from_kind(ErrorKind::InvalidCredential));
        }

        // 3. Status gate, only after a correct password
        if !account.is_active() {
            log::info!(
                "{} Login refused for disabled account {}",
                ctx.log_prefix(),
                account.id
            );
            return Err(AppError::from_kind(ErrorKind::UserDisabled));
        }

        // 4. Mint
        let issued = self
            .tokens
            .issue(&account)
            .map_err(|e| internal_auth_error("failed to issue token", e))?;

        log::info!(
            "{} Account {} authenticated",
            ctx.log_prefix(),
            account.id
        );

        Ok(Authenticated {
            token: issued.token,
            expires_at: issued.expires_at,
            account,
        })
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: AccountId) -> Result<Account> {
        self.store
            .get_by_id(ctx, id)
            .await
            .map_err(|e| lookup_error(id, e))
    }

    async fn update(
        &self,
        ctx: &RequestContext,
        id: AccountId,
        changes: ProfileUpdate,
    ) -> Result<Account> {
        let mut account = self
            .store
            .get_by_id(ctx, id)
            .await
            .map_err(|e| lookup_error(id, e))?;

        // Only provided, non-empty fields overwrite
        if let Some(display_name) = changes.display_name.filter(|v| !v.is_empty()) {
            account.display_name = display_name;
        }
        if let Some(avatar_reference) = changes.avatar_reference.filter(|v| !v.is_empty()) {
            account.avatar_reference = avatar_reference;
        }

        let updated = self
            .store
            .update(ctx, &account)
            .await
            .map_err(|e| lookup_error(id, e))?;

        log::debug!("{} Updated account {}", ctx.log_prefix(), id);

        Ok(updated)
    }

    async fn delete(&self, ctx: &RequestContext, id: AccountId) -> Result<()> {
        self.store
            .delete(ctx, id)
            .await
            .map_err(|e| database_error("failed to delete account", e))?;

        log::info!("{} Deleted account {}", ctx.log_prefix(), id);

        Ok(())
    }

    async fn list(&self, ctx: &RequestContext, page: i64, page_size: i64) -> Result<AccountPage> {
        let request = PageRequest::normalize(page, page_size);

        let (accounts, total) = self
            .store
            .list(ctx, request.offset(), request.page_size)
            .await
            .map_err(|e| database_error("failed to list accounts", e))?;

        Ok(AccountPage {
            accounts,
            total,
            page: request.page,
            page_size: request.page_size,
        })
    }

    async fn ping(&self, ctx: &RequestContext) -> Result<()> {
        self.store
            .ping(ctx)
            .await
            .map_err(|e| database_error("store ping failed", e))
    }
}

#[track_caller]
fn database_error<S: Into<String>>(message: S, err: StoreError) -> AppError {
    AppError::wrap(ErrorKind::DatabaseError, message, err)
}

#[track_caller]
fn lookup_error(id: AccountId, err: StoreError) -> AppError {
    if err.is_not_found() {
        let kind = ErrorKind::UserNotFound;
        AppError::wrap(kind, kind.default_message(), err)
    } else {
        database_error(format!("failed to load account {id}"), err)
    }
}

#[track_caller]
fn internal_auth_error(message: &str, err: AuthError) -> AppError {
    AppError::wrap(ErrorKind::InternalError, message, err)
}
