//! Account entity for registered users.

use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Minimum username length, counted in characters
pub const USERNAME_MIN_CHARS: usize = 3;

/// Maximum username length, counted in characters
pub const USERNAME_MAX_CHARS: usize = 50;

/// Minimum password length, counted in characters
pub const PASSWORD_MIN_CHARS: usize = 6;

/// bcrypt only reads this many bytes of its input
pub const PASSWORD_MAX_BYTES: usize = 72;

/// A registered account.
///
/// Created once by registration and never mutated by the auth flows.
/// `password_hash` is an opaque bcrypt digest; it is omitted from `Debug`
/// output and never leaves the domain layer (see [`AccountView`]).
///
/// [`AccountView`]: crate::domain::value_objects::AccountView
#[derive(Clone, PartialEq, Eq)]
pub struct Account {
    /// Unique identifier for the account
    pub id: Uuid,

    /// Unique display name, 3 to 50 characters
    pub username: String,

    /// Unique email address
    pub email: String,

    /// bcrypt digest of the password, salt included
    pub password_hash: String,

    /// Timestamp when the account was created
    pub created_at: DateTime<Utc>,
}

impl Account {
    /// Creates a new account with a fresh identifier
    ///
    /// # Arguments
    ///
    /// * `username` - Display name, already validated
    /// * `email` - Email address, already validated
    /// * `password_hash` - bcrypt digest of the password
    pub fn new(username: String, email: String, password_hash: String) -> Self {
        Self {
            id: Uuid::new_v4(),
            username,
            email,
            password_hash,
            created_at: Utc::now(),
        }
    }
}

impl std::fmt::Debug for Account {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Account")
            .field("id", &self.id)
            .field("username", &self.username)
            .field("email", &self.email)
            .field("password_hash", &"[REDACTED]")
            .field("created_at", &self.created_at)
            .finish()
    }
}
