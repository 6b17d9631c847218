//! PostgreSQL repository implementations

mod account_repository_impl;
mod session_repository_impl;

pub use account_repository_impl::PgAccountRepository;
pub use session_repository_impl::PgRefreshTokenStore;

use courier_core::errors::{RepositoryError, UniqueField};

/// Named unique constraints on the `accounts` table
const ACCOUNTS_EMAIL_KEY: &str = "accounts_email_key";
const ACCOUNTS_USERNAME_KEY: &str = "accounts_username_key";

/// Translate a driver error into the repository contract.
///
/// Unique violations are recognised through the driver's error kind and the
/// violated constraint's name.
pub(crate) fn map_sqlx_error(error: sqlx::Error) -> RepositoryError {
    match &error {
        sqlx::Error::Database(db) if db.is_unique_violation() => match db.constraint() {
            Some(ACCOUNTS_EMAIL_KEY) => RepositoryError::UniqueViolation {
                field: UniqueField::Email,
            },
            Some(ACCOUNTS_USERNAME_KEY) => RepositoryError::UniqueViolation {
                field: UniqueField::Username,
            },
            _ => RepositoryError::storage(error.to_string()),
        },
        sqlx::Error::PoolTimedOut => RepositoryError::Timeout,
        _ => RepositoryError::storage(error.to_string()),
    }
}
