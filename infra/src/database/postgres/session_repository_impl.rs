//! PostgreSQL implementation of the RefreshTokenStore trait.
//!
//! Tokens are stored verbatim and matched exactly. Logout deletes the row;
//! nothing here updates a session in place.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use courier_core::domain::entities::RefreshSession;
use courier_core::errors::RepositoryError;
use courier_core::repositories::RefreshTokenStore;

use super::map_sqlx_error;

/// PostgreSQL implementation of RefreshTokenStore
pub struct PgRefreshTokenStore {
    /// Database connection pool
    pool: PgPool,
}

impl PgRefreshTokenStore {
    /// Create a new Postgres refresh token store
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    fn row_to_session(row: &PgRow) -> Result<RefreshSession, RepositoryError> {
        Ok(RefreshSession {
            id: row.try_get::<Uuid, _>("id").map_err(map_sqlx_error)?,
            account_id: row.try_get::<Uuid, _>("account_id").map_err(map_sqlx_error)?,
            token: row.try_get("token").map_err(map_sqlx_error)?,
            expires_at: row
                .try_get::<DateTime<Utc>, _>("expires_at")
                .map_err(map_sqlx_error)?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(map_sqlx_error)?,
        })
    }

    /// Delete sessions whose expiry has passed
    ///
    /// Not called by the auth flows. Meant for an external scheduler that
    /// wants to reclaim storage.
    ///
    /// # Returns
    /// * `Ok(count)` - Number of rows removed
    pub async fn purge_expired(&self) -> Result<u64, RepositoryError> {
        let result = sqlx::query("DELETE FROM refresh_sessions WHERE expires_at <= NOW()")
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        let purged = result.rows_affected();
        tracing::info!(purged, "Expired refresh sessions purged");
        Ok(purged)
    }
}

#[async_trait]
impl RefreshTokenStore for PgRefreshTokenStore {
    async fn put(
        &self,
        account_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshSession, RepositoryError> {
        let session = RefreshSession::new(account_id, token.to_string(), expires_at);

        let query = r#"
            INSERT INTO refresh_sessions (id, account_id, token, expires_at, created_at)
            VALUES ($1, $2, $3, $4, $5)
        "#;

        sqlx::query(query)
            .bind(session.id)
            .bind(session.account_id)
            .bind(&session.token)
            .bind(session.expires_at)
            .bind(session.created_at)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        tracing::debug!(session_id = %session.id, account_id = %account_id, "Refresh session stored");
        Ok(session)
    }

    async fn get_by_token(&self, token: &str) -> Result<Option<RefreshSession>, RepositoryError> {
        let query = r#"
            SELECT id, account_id, token, expires_at, created_at
            FROM refresh_sessions
            WHERE token = $1
            LIMIT 1
        "#;

        let row = sqlx::query(query)
            .bind(token)
            .fetch_optional(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        row.as_ref().map(Self::row_to_session).transpose()
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM refresh_sessions WHERE token = $1")
            .bind(token)
            .execute(&self.pool)
            .await
            .map_err(map_sqlx_error)?;

        Ok(result.rows_affected() > 0)
    }
}
