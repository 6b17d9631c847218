//! Token entities for JWT-based sessions.

use chrono::{DateTime, Duration, TimeZone, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::TokenError;

/// Claims carried inside an access token.
///
/// Access tokens have no persisted counterpart. Once issued, one stays valid
/// until `exp` and cannot be revoked earlier.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    /// Account identifier
    pub user_id: Uuid,

    /// Username at issue time
    pub username: String,

    /// Email at issue time
    pub email: String,

    /// Expiration timestamp
    pub exp: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// JWT ID (unique identifier for the token)
    pub jti: String,
}

impl AccessClaims {
    /// Creates access claims valid from `issued_at` for `ttl`
    ///
    /// Fails with [`TokenError::Signing`] if the expiry overflows.
    pub fn new(
        user_id: Uuid,
        username: String,
        email: String,
        issued_at: DateTime<Utc>,
        ttl: Duration,
    ) -> Result<Self, TokenError> {
        let now = issued_at.timestamp();
        Ok(Self {
            user_id,
            username,
            email,
            exp: expiry(issued_at, ttl)?,
            iat: now,
            nbf: now,
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

/// Claims carried inside a refresh token: the subject plus temporal fields.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    /// Subject (account ID)
    pub sub: String,

    /// Expiration timestamp
    pub exp: i64,

    /// Issued at timestamp
    pub iat: i64,

    /// Not before timestamp
    pub nbf: i64,

    /// JWT ID; keeps two tokens minted in the same second distinct
    pub jti: String,
}

impl RefreshClaims {
    /// Creates refresh claims for an account valid from `issued_at` for `ttl`
    pub fn new(account_id: Uuid, issued_at: DateTime<Utc>, ttl: Duration) -> Result<Self, TokenError> {
        let now = issued_at.timestamp();
        Ok(Self {
            sub: account_id.to_string(),
            exp: expiry(issued_at, ttl)?,
            iat: now,
            nbf: now,
            jti: Uuid::new_v4().to_string(),
        })
    }

    /// Expiration as a timestamp
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        Utc.timestamp_opt(self.exp, 0).single()
    }
}

fn expiry(issued_at: DateTime<Utc>, ttl: Duration) -> Result<i64, TokenError> {
    issued_at
        .checked_add_signed(ttl)
        .map(|exp| exp.timestamp())
        .ok_or(TokenError::Signing)
}

/// Access and refresh token issued together
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenPair {
    /// Short-lived JWT for authenticating requests
    pub access_token: String,

    /// Long-lived JWT for minting new access tokens
    pub refresh_token: String,
}

impl TokenPair {
    pub fn new(access_token: String, refresh_token: String) -> Self {
        Self {
            access_token,
            refresh_token,
        }
    }
}

impl std::fmt::Debug for TokenPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenPair")
            .field("access_token", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}
