//! Configuration for the authentication service

use chrono::Duration;
use courier_shared::config::{JwtConfig, SecretString};
use courier_shared::ConfigError;

/// Secrets and token lifetimes used by [`AuthService`](super::AuthService)
#[derive(Debug, Clone)]
pub struct AuthServiceConfig {
    /// Signing secret for access tokens
    pub access_secret: SecretString,
    /// Signing secret for refresh tokens
    pub refresh_secret: SecretString,
    /// Access token lifetime
    pub access_token_ttl: Duration,
    /// Refresh token lifetime
    pub refresh_token_ttl: Duration,
}

impl AuthServiceConfig {
    /// Create with the two secrets and default lifetimes (1 hour / 7 days)
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: SecretString::new(access_secret),
            refresh_secret: SecretString::new(refresh_secret),
            access_token_ttl: Duration::hours(1),
            refresh_token_ttl: Duration::days(7),
        }
    }

    /// Build from JWT settings, failing on a lifetime chrono cannot represent
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            access_secret: config.access_secret.clone(),
            refresh_secret: config.refresh_secret.clone(),
            access_token_ttl: ttl("auth.jwt.access_token_ttl_secs", config.access_token_ttl_secs)?,
            refresh_token_ttl: ttl("auth.jwt.refresh_token_ttl_secs", config.refresh_token_ttl_secs)?,
        })
    }
}

fn ttl(key: &str, secs: i64) -> Result<Duration, ConfigError> {
    Duration::try_seconds(secs)
        .ok_or_else(|| ConfigError::InvalidValue(format!("{} out of range: {}", key, secs)))
}
