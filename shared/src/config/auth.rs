//! Authentication configuration: token signing secrets, token lifetimes and
//! password hashing cost.

use serde::Deserialize;

use crate::errors::ConfigError;

/// HMAC algorithms accepted for session tokens
pub const SUPPORTED_ALGORITHMS: [&str; 3] = ["HS256", "HS384", "HS512"];

/// bcrypt's accepted cost range
pub const MIN_BCRYPT_COST: u32 = 4;
pub const MAX_BCRYPT_COST: u32 = 31;

/// Longest lifetime accepted for either token, one year in seconds
pub const MAX_TOKEN_TTL_SECS: i64 = 365 * 86400;

/// A secret value that never shows up in logs or debug output.
#[derive(Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(transparent)]
pub struct SecretString(String);

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Raw secret bytes, for handing to a signing key constructor.
    pub fn expose_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl std::fmt::Debug for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl std::fmt::Display for SecretString {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl From<&str> for SecretString {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// JWT signing configuration.
///
/// Access and refresh tokens are signed in two independent domains, each with
/// its own secret.
#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    /// Secret for short-lived access tokens
    #[serde(default)]
    pub access_secret: SecretString,

    /// Secret for long-lived refresh tokens
    #[serde(default)]
    pub refresh_secret: SecretString,

    /// Access token lifetime in seconds
    #[serde(default = "default_access_ttl")]
    pub access_token_ttl_secs: i64,

    /// Refresh token lifetime in seconds
    #[serde(default = "default_refresh_ttl")]
    pub refresh_token_ttl_secs: i64,

    /// Signing algorithm, HMAC family only
    #[serde(default = "default_algorithm")]
    pub algorithm: String,

    /// Clock skew tolerated on exp/nbf checks, in seconds
    #[serde(default)]
    pub leeway_secs: u64,
}

impl Default for JwtConfig {
    fn default() -> Self {
        Self {
            access_secret: SecretString::default(),
            refresh_secret: SecretString::default(),
            access_token_ttl_secs: default_access_ttl(),
            refresh_token_ttl_secs: default_refresh_ttl(),
            algorithm: default_algorithm(),
            leeway_secs: 0,
        }
    }
}

impl JwtConfig {
    /// Create a configuration with the two secrets and default lifetimes
    pub fn new(access_secret: impl Into<String>, refresh_secret: impl Into<String>) -> Self {
        Self {
            access_secret: SecretString::new(access_secret),
            refresh_secret: SecretString::new(refresh_secret),
            ..Default::default()
        }
    }

    /// Create from the plain `JWT_*` environment variables
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            access_secret: SecretString::new(std::env::var("JWT_ACCESS_SECRET").unwrap_or_default()),
            refresh_secret: SecretString::new(std::env::var("JWT_REFRESH_SECRET").unwrap_or_default()),
            access_token_ttl_secs: std::env::var("JWT_ACCESS_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.access_token_ttl_secs),
            refresh_token_ttl_secs: std::env::var("JWT_REFRESH_TTL_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.refresh_token_ttl_secs),
            algorithm: std::env::var("JWT_ALGORITHM").unwrap_or(defaults.algorithm),
            leeway_secs: defaults.leeway_secs,
        }
    }

    /// Set access token lifetime in minutes
    pub fn with_access_ttl_minutes(mut self, minutes: i64) -> Self {
        self.access_token_ttl_secs = minutes * 60;
        self
    }

    /// Set refresh token lifetime in days
    pub fn with_refresh_ttl_days(mut self, days: i64) -> Self {
        self.refresh_token_ttl_secs = days * 86400;
        self
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.access_secret.is_empty() {
            return Err(ConfigError::MissingRequired("auth.jwt.access_secret".to_string()));
        }
        if self.refresh_secret.is_empty() {
            return Err(ConfigError::MissingRequired("auth.jwt.refresh_secret".to_string()));
        }
        if self.access_secret == self.refresh_secret {
            return Err(ConfigError::InvalidValue(
                "access and refresh secrets must differ".to_string(),
            ));
        }
        if self.access_token_ttl_secs <= 0 || self.refresh_token_ttl_secs <= 0 {
            return Err(ConfigError::InvalidValue(
                "token lifetimes must be positive".to_string(),
            ));
        }
        if self.access_token_ttl_secs > MAX_TOKEN_TTL_SECS
            || self.refresh_token_ttl_secs > MAX_TOKEN_TTL_SECS
        {
            return Err(ConfigError::InvalidValue(format!(
                "token lifetimes must not exceed {} seconds",
                MAX_TOKEN_TTL_SECS
            )));
        }
        if self.refresh_token_ttl_secs <= self.access_token_ttl_secs {
            return Err(ConfigError::InvalidValue(
                "refresh token lifetime must exceed access token lifetime".to_string(),
            ));
        }
        if !SUPPORTED_ALGORITHMS.contains(&self.algorithm.as_str()) {
            return Err(ConfigError::InvalidValue(format!(
                "unsupported signing algorithm: {}",
                self.algorithm
            )));
        }
        Ok(())
    }
}

/// Password hashing configuration
#[derive(Debug, Clone, Deserialize)]
pub struct PasswordConfig {
    /// bcrypt cost; 12 means 2^12 rounds
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
}

impl Default for PasswordConfig {
    fn default() -> Self {
        Self {
            bcrypt_cost: default_bcrypt_cost(),
        }
    }
}

impl PasswordConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&self.bcrypt_cost) {
            return Err(ConfigError::InvalidValue(format!(
                "bcrypt cost must be between {} and {}, got {}",
                MIN_BCRYPT_COST, MAX_BCRYPT_COST, self.bcrypt_cost
            )));
        }
        Ok(())
    }
}

/// Complete authentication configuration
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AuthConfig {
    /// JWT configuration
    #[serde(default)]
    pub jwt: JwtConfig,

    /// Password hashing configuration
    #[serde(default)]
    pub password: PasswordConfig,
}

impl AuthConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        let password = std::env::var("BCRYPT_COST")
            .ok()
            .and_then(|v| v.parse().ok())
            .map(|bcrypt_cost| PasswordConfig { bcrypt_cost })
            .unwrap_or_default();

        Self {
            jwt: JwtConfig::from_env(),
            password,
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        self.jwt.validate()?;
        self.password.validate()
    }
}

fn default_access_ttl() -> i64 {
    3600 // 1 hour
}

fn default_refresh_ttl() -> i64 {
    604800 // 7 days
}

fn default_algorithm() -> String {
    String::from("HS256")
}

fn default_bcrypt_cost() -> u32 {
    12
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_jwt_config_default() {
        let config = JwtConfig::default();
        assert_eq!(config.access_token_ttl_secs, 3600);
        assert_eq!(config.refresh_token_ttl_secs, 604800);
        assert_eq!(config.algorithm, "HS256");
        assert_eq!(config.leeway_secs, 0);
    }

    #[test]
    fn test_jwt_config_builder() {
        let config = JwtConfig::new("access", "refresh")
            .with_access_ttl_minutes(30)
            .with_refresh_ttl_days(14);

        assert_eq!(config.access_token_ttl_secs, 1800);
        assert_eq!(config.refresh_token_ttl_secs, 1209600);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_missing_secret_rejected() {
        let config = JwtConfig::new("", "refresh");
        assert!(matches!(config.validate(), Err(ConfigError::MissingRequired(_))));

        let config = JwtConfig::new("access", "");
        assert!(matches!(config.validate(), Err(ConfigError::MissingRequired(_))));
    }

    #[test]
    fn test_shared_secret_rejected() {
        let config = JwtConfig::new("same", "same");
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));
    }

    #[test]
    fn test_non_hmac_algorithm_rejected() {
        let mut config = JwtConfig::new("access", "refresh");
        config.algorithm = "RS256".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_refresh_must_outlive_access() {
        let mut config = JwtConfig::new("access", "refresh");
        config.refresh_token_ttl_secs = config.access_token_ttl_secs;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_oversized_ttl_rejected() {
        let mut config = JwtConfig::new("access", "refresh");
        config.refresh_token_ttl_secs = i64::MAX;
        assert!(matches!(config.validate(), Err(ConfigError::InvalidValue(_))));

        let mut config = JwtConfig::new("access", "refresh");
        config.refresh_token_ttl_secs = MAX_TOKEN_TTL_SECS;
        assert!(config.validate().is_ok());
        config.refresh_token_ttl_secs = MAX_TOKEN_TTL_SECS + 1;
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_bcrypt_cost_bounds() {
        assert!(PasswordConfig::default().validate().is_ok());
        assert!(PasswordConfig { bcrypt_cost: 3 }.validate().is_err());
        assert!(PasswordConfig { bcrypt_cost: 32 }.validate().is_err());
    }

    #[test]
    fn test_secrets_are_redacted() {
        let config = JwtConfig::new("super-secret-access", "super-secret-refresh");
        let debug = format!("{:?}", config);
        assert!(!debug.contains("super-secret"));
        assert!(debug.contains("[REDACTED]"));
    }
}
