//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for Courier, following
//! Clean Architecture principles. It provides:
//! - **Database**: PostgreSQL pool management and migrations using SQLx
//! - **Repositories**: Postgres implementations of the core account and
//!   refresh session traits
//! - **Bootstrap**: wiring configuration, pool and repositories into an
//!   `AuthService`

pub mod bootstrap;
pub mod database;

pub use bootstrap::{AuthStack, PgAuthService};
pub use database::{DatabasePool, PgAccountRepository, PgRefreshTokenStore, PoolStatistics};

use courier_shared::ConfigError;

/// Infrastructure-specific error types
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Schema migration error
    #[error("Migration error: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<ConfigError> for InfrastructureError {
    fn from(error: ConfigError) -> Self {
        InfrastructureError::Config(error.to_string())
    }
}
