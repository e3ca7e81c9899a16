//! SQLite-backed [`AccountStore`].
//!
//! Timestamps are stored as Unix milliseconds and status as `1`/`0`.
//! Uniqueness of username and email is enforced by the table's UNIQUE
//! constraints; a violation surfaces as `StoreError::Duplicate` no matter
//! what lookups the caller made first.

use crate::{DbError, Result as DbErrorResult};

use idm_core::{
    Account, AccountId, AccountStatus, AccountStore, ErrorLocation, NewAccount, RequestContext,
    StoreError, StoreResult,
};

use std::panic::Location;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::sqlite::SqliteRow;
use sqlx::{Row, SqliteExecutor, SqlitePool};

const TABLE: &str = "accounts";

const SELECT_ACCOUNT: &str = r#"
    SELECT id, username, email, credential_hash, display_name, avatar_reference,
        status, created_at, updated_at
    FROM accounts
"#;

#[derive(Clone)]
pub struct SqliteAccountStore {
    pool: SqlitePool,
}

impl SqliteAccountStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    async fn insert(&self, account: &NewAccount) -> DbErrorResult<Account> {
        if account.credential_hash.is_empty() {
            return Err(DbError::InvalidRow {
                table: TABLE,
                message: "credential_hash must not be empty".to_string(),
                location: ErrorLocation::from(Location::caller()),
            });
        }

        let now = now_millis();
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                INSERT INTO accounts (
                    username, email, credential_hash, display_name, avatar_reference,
                    status, created_at, updated_at
                ) VALUES (?, ?, ?, ?, ?, ?, ?, ?)
            "#,
        )
        .bind(&account.username)
        .bind(&account.email)
        .bind(&account.credential_hash)
        .bind(&account.display_name)
        .bind(&account.avatar_reference)
        .bind(account.status.as_i64())
        .bind(now)
        .bind(now)
        .execute(&mut *tx)
        .await?;

        let id = result.last_insert_rowid();
        let created = find_by_id(&mut *tx, id)
            .await?
            .ok_or_else(|| DbError::InvalidRow {
                table: TABLE,
                message: format!("inserted row {id} not readable"),
                location: ErrorLocation::from(Location::caller()),
            })?;

        tx.commit().await?;

        Ok(created)
    }

    async fn replace(&self, account: &Account) -> DbErrorResult<Option<Account>> {
        let mut tx = self.pool.begin().await?;

        let result = sqlx::query(
            r#"
                UPDATE accounts
                SET display_name = ?, avatar_reference = ?, status = ?, updated_at = ?
                WHERE id = ?
            "#,
        )
        .bind(&account.display_name)
        .bind(&account.avatar_reference)
        .bind(account.status.as_i64())
        .bind(now_millis())
        .bind(account.id.value())
        .execute(&mut *tx)
        .await?;

        if result.rows_affected() == 0 {
            return Ok(None);
        }

        let updated = find_by_id(&mut *tx, account.id.value()).await?;
        tx.commit().await?;

        Ok(updated)
    }

    async fn remove(&self, id: AccountId) -> DbErrorResult<u64> {
        let result = sqlx::query("DELETE FROM accounts WHERE id = ?")
            .bind(id.value())
            .execute(&self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    async fn page(&self, offset: u64, limit: u32) -> DbErrorResult<(Vec<Account>, u64)> {
        let offset = i64::try_from(offset).unwrap_or(i64::MAX);

        let rows = sqlx::query(&format!("{SELECT_ACCOUNT} ORDER BY id ASC LIMIT ? OFFSET ?"))
            .bind(i64::from(limit))
            .bind(offset)
            .fetch_all(&self.pool)
            .await?;

        let accounts = rows
            .iter()
            .map(row_to_account)
            .collect::<DbErrorResult<Vec<_>>>()?;

        let total: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM accounts")
            .fetch_one(&self.pool)
            .await?;

        Ok((accounts, u64::try_from(total).unwrap_or(0)))
    }
}

#[async_trait]
impl AccountStore for SqliteAccountStore {
    async fn create(&self, ctx: &RequestContext, account: NewAccount) -> StoreResult<Account> {
        let created = ctx.run(self.insert(&account)).await??;

        log::debug!(
            "{} Created account {} ({})",
            ctx.log_prefix(),
            created.id,
            created.username
        );

        Ok(created)
    }

    async fn get_by_id(&self, ctx: &RequestContext, id: AccountId) -> StoreResult<Account> {
        ctx.run(find_by_id(&self.pool, id.value()))
            .await??
            .ok_or_else(|| StoreError::not_found(format!("id={id}")))
    }

    async fn get_by_username(
        &self,
        ctx: &RequestContext,
        username: &str,
    ) -> StoreResult<Account> {
        ctx.run(find_by_column(&self.pool, "username", username))
            .await??
            .ok_or_else(|| StoreError::not_found(format!("username={username}")))
    }

    async fn get_by_email(&self, ctx: &RequestContext, email: &str) -> StoreResult<Account> {
        ctx.run(find_by_column(&self.pool, "email", email))
            .await??
            .ok_or_else(|| StoreError::not_found(format!("email={email}")))
    }

    async fn update(&self, ctx: &RequestContext, account: &Account) -> StoreResult<Account> {
        ctx.run(self.replace(account))
            .await??
            .ok_or_else(|| StoreError::not_found(format!("id={}", account.id)))
    }

    async fn delete(&self, ctx: &RequestContext, id: AccountId) -> StoreResult<()> {
        let removed = ctx.run(self.remove(id)).await??;

        if removed == 0 {
            log::debug!("{} Delete of unknown account {}", ctx.log_prefix(), id);
        }

        Ok(())
    }

    async fn list(
        &self,
        ctx: &RequestContext,
        offset: u64,
        limit: u32,
    ) -> StoreResult<(Vec<Account>, u64)> {
        Ok(ctx.run(self.page(offset, limit)).await??)
    }

    async fn ping(&self, ctx: &RequestContext) -> StoreResult<()> {
        ctx.run(async {
            sqlx::query("SELECT 1")
                .execute(&self.pool)
                .await
                .map_err(DbError::from)
        })
        .await??;

        Ok(())
    }
}

async fn find_by_id<'e, E>(executor: E, id: i64) -> DbErrorResult<Option<Account>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(&format!("{SELECT_ACCOUNT} WHERE id = ?"))
        .bind(id)
        .fetch_optional(executor)
        .await?;

    row.as_ref().map(row_to_account).transpose()
}

/// Match on a unique column, using the column's NOCASE collation
async fn find_by_column<'e, E>(
    executor: E,
    column: &'static str,
    value: &str,
) -> DbErrorResult<Option<Account>>
where
    E: SqliteExecutor<'e>,
{
    let row = sqlx::query(&format!("{SELECT_ACCOUNT} WHERE {column} = ?"))
        .bind(value)
        .fetch_optional(executor)
        .await?;

    row.as_ref().map(row_to_account).transpose()
}

fn row_to_account(row: &SqliteRow) -> DbErrorResult<Account> {
    Ok(Account {
        id: AccountId(row.try_get("id")?),
        username: row.try_get("username")?,
        email: row.try_get("email")?,
        credential_hash: row.try_get("credential_hash")?,
        display_name: row.try_get("display_name")?,
        avatar_reference: row.try_get("avatar_reference")?,
        status: AccountStatus::from_i64(row.try_get("status")?),
        created_at: from_millis(row.try_get("created_at")?, "created_at")?,
        updated_at: from_millis(row.try_get("updated_at")?, "updated_at")?,
    })
}

#[track_caller]
fn from_millis(millis: i64, column: &str) -> DbErrorResult<DateTime<Utc>> {
    DateTime::from_timestamp_millis(millis).ok_or_else(|| DbError::InvalidRow {
        table: TABLE,
        message: format!("Invalid timestamp in accounts.{column}: {millis}"),
        location: ErrorLocation::from(Location::caller()),
    })
}

fn now_millis() -> i64 {
    Utc::now().timestamp_millis()
}
