//! Refresh token store trait.
//!
//! The store is the source of truth for refresh token revocation: a refresh
//! token is accepted only while a session holding the exact token string
//! exists. There is no expiry sweep here; expired rows are harmless because
//! the token itself no longer verifies.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::domain::entities::RefreshSession;
use crate::errors::RepositoryError;

/// Persistence operations for refresh sessions
#[async_trait]
pub trait RefreshTokenStore: Send + Sync {
    /// Record a newly issued refresh token
    ///
    /// # Arguments
    /// * `account_id` - Owning account
    /// * `token` - The signed refresh token, stored verbatim
    /// * `expires_at` - Expiry of the token
    ///
    /// # Returns
    /// * `Ok(RefreshSession)` - The stored session
    /// * `Err(RepositoryError)` - Storage failure
    async fn put(
        &self,
        account_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshSession, RepositoryError>;

    /// Find the session holding exactly this token string
    ///
    /// # Returns
    /// * `Ok(Some(RefreshSession))` - Session is live
    /// * `Ok(None)` - Revoked or never issued
    /// * `Err(RepositoryError)` - Storage failure
    async fn get_by_token(&self, token: &str) -> Result<Option<RefreshSession>, RepositoryError>;

    /// Delete the session holding exactly this token string
    ///
    /// # Returns
    /// * `Ok(true)` - Session was deleted
    /// * `Ok(false)` - No such session
    /// * `Err(RepositoryError)` - Storage failure
    async fn delete_by_token(&self, token: &str) -> Result<bool, RepositoryError>;
}
