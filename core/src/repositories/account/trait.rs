//! Account repository trait defining the interface for account persistence.
//!
//! Lookups distinguish "not found" (`Ok(None)`) from storage failure
//! (`Err`). Uniqueness of username and email is enforced by the store itself
//! so that concurrent registrations cannot both succeed.

use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::entities::Account;
use crate::errors::RepositoryError;

/// Repository trait for Account persistence operations
#[async_trait]
pub trait AccountRepository: Send + Sync {
    /// Insert a new account
    ///
    /// # Arguments
    /// * `account` - The Account entity to persist
    ///
    /// # Returns
    /// * `Ok(Account)` - The stored account
    /// * `Err(RepositoryError::UniqueViolation { field })` - Email or username taken
    /// * `Err(RepositoryError)` - Any other storage failure
    async fn create(&self, account: Account) -> Result<Account, RepositoryError>;

    /// Find an account by exact email
    ///
    /// # Returns
    /// * `Ok(Some(Account))` - Account found
    /// * `Ok(None)` - No account with this email
    /// * `Err(RepositoryError)` - Storage error occurred
    async fn find_by_email(&self, email: &str) -> Result<Option<Account>, RepositoryError>;

    /// Find an account by exact username
    async fn find_by_username(&self, username: &str) -> Result<Option<Account>, RepositoryError>;

    /// Find an account by its identifier
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, RepositoryError>;
}
