//! PostgreSQL implementation of the AccountRepository trait.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use courier_core::domain::entities::Account;
use courier_core::errors::RepositoryError;
use courier_core::repositories::AccountRepository;

use super::map_sqlx_error;

/// PostgreSQL implementation of AccountRepository
///
/// Email and username uniqueness is enforced by the `accounts_email_key` and
/// `accounts_username_key` constraints.
pub struct PgAccountRepository {
    /// Database connection pool
    pool: PgPool,
}

impl PgAccountRepository {
    /// Create a new Postgres account repository
    ///
    /// # Arguments
    /// * `pool` - PostgreSQL connection pool from SQLx
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Convert database row to Account entity
    fn row_to_account(row: &PgRow) -> Result<Account, RepositoryError> {
        Ok(Account {
            id: row.try_get::<Uuid, _>("id").map_err(map_sqlx_error)?,
            username: row.try_get("username").map_err(map_sqlx_error)?,
            email: row.try_get("email").map_err(map_sqlx_error)?,
            password_hash: row.try_get("password_hash").map_err(map_sqlx_error)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(map_sqlx_error)?,
        })
    }

    async fn find_one(&self, query: &str, value: &str) -> Result<Option<Account>, RepositoryError> {
        let row = sqlx::query(query)
            .bind(value)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(Self::row_to_account).transpose()
    }
}

#[async_trait]
impl AccountRepository for PgAccountRepository {
    async fn create(&self, account: Account) -> Result<Account, RepositoryError> {
        let query = r#"
            INSERT INTO accounts (id, username, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4, $5)
            RETURNING id, username, email, password_hash, created_at
        "#;

        let row = sqlx::query(query)
            .bind(account.id)
            .bind(&account.username)
            .bind(&account.email)
            .bind(&account.password_hash)
            .bind(account.created_at)
            .fetch_one(&self.pool)
            .await
            .map_err(|e| {
                let mapped = map_sqlx_error(e);
                if !matches!(mapped, RepositoryError::UniqueViolation { .. }) {
                    tracing::error!(error = %mapped, "Failed to insert account");
                }
                mapped
            })?;

        tracing::debug!(account_id = %account.id, "Account row inserted");
        Self::row_to_account(&row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError> {
        self.find_one(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM accounts
            WHERE email = $1
            "#,
            email,
        )
        .await
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError> {
        self.find_one(
            r#"
            SELECT id, username, email, password_hash, created_at
            FROM accounts
            WHERE username = $1
            "#,
            username,
        )
        .await
    }

    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepositoryError> {
        let query = r#"
            SELECT id, username, email, password_hash, created_at
            FROM accounts
            WHERE id = $1
        "#;

        let row = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(Self::row_to_account).transpose()
    }
}
