//! Refresh session entity, the persisted record backing refresh tokens.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A live long-lived session.
///
/// A refresh token is accepted only while a session holding the exact token
/// string exists. Rows are inserted on register/login and deleted on logout;
/// they are never updated in place.
#[derive(Clone, PartialEq, Eq)]
pub struct RefreshSession {
    /// Unique identifier for the session row
    pub id: Uuid,

    /// Account the session belongs to
    pub account_id: Uuid,

    /// The signed refresh token, stored verbatim
    pub token: String,

    /// When the refresh token stops verifying
    pub expires_at: DateTime<Utc>,

    /// When the session was created
    pub created_at: DateTime<Utc>,
}

impl RefreshSession {
    /// Creates a new session record for a freshly issued refresh token
    pub fn new(account_id: Uuid, token: String, expires_at: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            account_id,
            token,
            expires_at,
            created_at: Utc::now(),
        }
    }

    /// Whether the session's expiry has passed
    pub fn is_expired(&self) -> bool {
        Utc::now() >= self.expires_at
    }
}

impl std::fmt::Debug for RefreshSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RefreshSession")
            .field("id", &self.id)
            .field("account_id", &self.account_id)
            .field("token", &"[REDACTED]")
            .field("expires_at", &self.expires_at)
            .field("created_at", &self.created_at)
            .finish()
    }
}
