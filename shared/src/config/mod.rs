//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical areas:
//! - `auth` - Token signing and password hashing configuration
//! - `database` - Database connection and pool configuration
//! - `environment` - Environment detection and logging configuration
//!
//! [`AppConfig::load`] layers, lowest precedence first: built-in defaults, the
//! optional per-environment TOML file, `COURIER__*` environment variables, and
//! finally the plain `JWT_*` / `DATABASE_URL` variables.

pub mod auth;
pub mod database;
pub mod environment;

use ::config::{Config, File, FileFormat};
use serde::Deserialize;

use crate::errors::{ConfigError, ConfigResult};

// Re-export commonly used types
pub use auth::{AuthConfig, JwtConfig, PasswordConfig, SecretString};
pub use database::DatabaseConfig;
pub use environment::{Environment, LogFormat, LoggingConfig};

/// Plain variable names accepted on top of the `COURIER__` prefixed ones
const PLAIN_ENV_OVERRIDES: [(&str, &str); 5] = [
    ("JWT_ACCESS_SECRET", "auth.jwt.access_secret"),
    ("JWT_REFRESH_SECRET", "auth.jwt.refresh_secret"),
    ("JWT_ACCESS_TTL_SECS", "auth.jwt.access_token_ttl_secs"),
    ("JWT_REFRESH_TTL_SECS", "auth.jwt.refresh_token_ttl_secs"),
    ("DATABASE_URL", "database.url"),
];

/// Complete application configuration combining all sub-configurations
#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    /// Environment configuration
    #[serde(default)]
    pub environment: Environment,

    /// Database configuration
    #[serde(default)]
    pub database: DatabaseConfig,

    /// Authentication configuration
    #[serde(default)]
    pub auth: AuthConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        let env = Environment::default();
        Self {
            environment: env,
            database: DatabaseConfig::default(),
            auth: AuthConfig::default(),
            logging: LoggingConfig::for_environment(env),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration for the current environment.
    ///
    /// Reads `.env` first if one exists.
    pub fn load() -> ConfigResult<Self> {
        let _ = dotenvy::dotenv();
        let env = Environment::from_env();

        let config = Self::builder(env)?.build()?;
        let mut app: AppConfig = config.try_deserialize()?;
        app.environment = env;
        app.validate()?;
        Ok(app)
    }

    /// Create from environment variables only, without a config file
    pub fn from_env() -> Self {
        let env = Environment::from_env();
        Self {
            environment: env,
            database: DatabaseConfig::from_env(),
            auth: AuthConfig::from_env(),
            logging: LoggingConfig::for_environment(env),
        }
    }

    fn builder(
        env: Environment,
    ) -> ConfigResult<::config::builder::ConfigBuilder<::config::builder::DefaultState>> {
        let logging = LoggingConfig::for_environment(env);
        let format = match logging.format {
            LogFormat::Json => "json",
            LogFormat::Pretty => "pretty",
            LogFormat::Compact => "compact",
        };

        let mut builder = Config::builder()
            .set_default("logging.level", logging.level)?
            .set_default("logging.format", format)?
            .set_default("logging.colored", logging.colored)?
            .set_default("logging.source_location", logging.source_location)?
            .add_source(File::new(env.config_file(), FileFormat::Toml).required(false))
            .add_source(
                ::config::Environment::with_prefix("COURIER")
                    .prefix_separator("__")
                    .separator("__"),
            );

        for (var, key) in PLAIN_ENV_OVERRIDES {
            if let Ok(value) = std::env::var(var) {
                builder = builder.set_override(key, value)?;
            }
        }

        Ok(builder)
    }

    /// Check every section, failing on the first invalid value
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.database.validate()?;
        self.auth.validate()?;
        if self.logging.level.is_empty() {
            return Err(ConfigError::MissingRequired("logging.level".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_requires_secrets() {
        let config = AppConfig::default();
        assert!(matches!(
            config.validate(),
            Err(ConfigError::MissingRequired(_))
        ));
    }

    #[test]
    fn test_config_with_secrets_is_valid() {
        let mut config = AppConfig::default();
        config.auth.jwt = JwtConfig::new("access-secret", "refresh-secret");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_deserialize_from_toml_source() {
        let source = r#"
            [auth.jwt]
            access_secret = "a-secret"
            refresh_secret = "r-secret"
            access_token_ttl_secs = 900

            [auth.password]
            bcrypt_cost = 10

            [database]
            url = "postgres://localhost/courier_test"
        "#;

        let config: AppConfig = Config::builder()
            .add_source(File::from_str(source, FileFormat::Toml))
            .build()
            .and_then(|c| c.try_deserialize())
            .unwrap();

        assert_eq!(config.auth.jwt.access_token_ttl_secs, 900);
        assert_eq!(config.auth.jwt.refresh_token_ttl_secs, 604800);
        assert_eq!(config.auth.password.bcrypt_cost, 10);
        assert_eq!(config.database.max_connections, 25);
        assert!(config.validate().is_ok());
    }
}
