//! Lower-level error types raised by the hasher, the token codec, the
//! repositories and input validation.
//!
//! None of these cross the service boundary as-is; `AuthService` folds them
//! into [`DomainError`](super::DomainError).

use std::fmt;
use thiserror::Error;

/// Token codec errors
///
/// Every verification failure maps to `DomainError::InvalidToken` at the
/// service boundary; the distinct variants exist for logs and tests.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TokenError {
    #[error("Malformed token")]
    Malformed,

    #[error("Token signature verification failed")]
    SignatureMismatch,

    #[error("Unexpected signing algorithm")]
    UnexpectedAlgorithm,

    #[error("Token expired")]
    Expired,

    #[error("Token not yet valid")]
    NotYetValid,

    #[error("Token subject is not an account id")]
    InvalidSubject,

    #[error("Token signing failed")]
    Signing,

    #[error("Unsupported signing algorithm: {0}")]
    UnsupportedAlgorithm(String),
}

/// Password hashing errors
#[derive(Error, Debug)]
pub enum PasswordError {
    #[error("Password hashing failed")]
    Hashing(#[source] bcrypt::BcryptError),

    #[error("bcrypt cost {cost} outside 4..=31")]
    InvalidCost { cost: u32 },

    #[error("Password exceeds {max_bytes} bytes")]
    TooLong { max_bytes: usize },

    #[error("Hashing task did not complete")]
    TaskFailed,
}

/// Column a uniqueness constraint guards
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UniqueField {
    Email,
    Username,
}

impl fmt::Display for UniqueField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            UniqueField::Email => write!(f, "email"),
            UniqueField::Username => write!(f, "username"),
        }
    }
}

/// Storage errors reported by repository implementations
///
/// "Not found" is not an error; lookups return `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum RepositoryError {
    #[error("Unique constraint violated on {field}")]
    UniqueViolation { field: UniqueField },

    #[error("Storage operation timed out")]
    Timeout,

    #[error("Storage error: {message}")]
    Storage { message: String },
}

impl RepositoryError {
    pub fn storage(message: impl Into<String>) -> Self {
        Self::Storage {
            message: message.into(),
        }
    }
}

/// Input validation errors
///
/// Messages are safe to show to the caller.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    RequiredField { field: &'static str },

    #[error("{field} must be between {min} and {max} characters")]
    InvalidLength {
        field: &'static str,
        min: usize,
        max: usize,
    },

    #[error("{field} must be at least {min} characters")]
    TooShort { field: &'static str, min: usize },

    #[error("{field} must be at most {max_bytes} bytes")]
    TooLong {
        field: &'static str,
        max_bytes: usize,
    },

    #[error("Invalid email format")]
    InvalidEmail,
}
