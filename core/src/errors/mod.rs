//! Domain-specific error types and error handling.

mod types;


pub use types::{PasswordError, RepositoryError, TokenError, UniqueField, ValidationError};

use thiserror::Error;

/// Errors returned by the auth flows.
///
/// Authentication failures share one message whatever the cause, and
/// infrastructure failures carry their cause only as `source()`.
#[derive(Error, Debug)]
pub enum DomainError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("{field} already in use")]
    Conflict { field: UniqueField },

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("invalid credentials")]
    InvalidToken,

    #[error("{resource} not found")]
    NotFound { resource: &'static str },

    #[error("internal error")]
    Persistence {
        #[source]
        source: RepositoryError,
    },

    #[error("internal error")]
    Crypto {
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
}

/// Machine-readable error category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    InvalidCredentials,
    NotFound,
    Internal,
}

impl ErrorKind {
    /// Stable code a transport layer can map on
    pub fn code(&self) -> &'static str {
        match self {
            ErrorKind::Validation => "VALIDATION_ERROR",
            ErrorKind::Conflict => "CONFLICT",
            ErrorKind::InvalidCredentials => "INVALID_CREDENTIALS",
            ErrorKind::NotFound => "NOT_FOUND",
            ErrorKind::Internal => "INTERNAL_ERROR",
        }
    }
}

impl DomainError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            DomainError::Validation(_) => ErrorKind::Validation,
            DomainError::Conflict { .. } => ErrorKind::Conflict,
            DomainError::InvalidCredentials | DomainError::InvalidToken => {
                ErrorKind::InvalidCredentials
            }
            DomainError::NotFound { .. } => ErrorKind::NotFound,
            DomainError::Persistence { .. } | DomainError::Crypto { .. } => ErrorKind::Internal,
        }
    }

    pub(crate) fn crypto(source: impl std::error::Error + Send + Sync + 'static) -> Self {
        DomainError::Crypto {
            source: Box::new(source),
        }
    }
}

impl From<RepositoryError> for DomainError {
    fn from(error: RepositoryError) -> Self {
        match error {
            RepositoryError::UniqueViolation { field } => DomainError::Conflict { field },
            other => DomainError::Persistence { source: other },
        }
    }
}

impl From<PasswordError> for DomainError {
    fn from(error: PasswordError) -> Self {
        DomainError::crypto(error)
    }
}

pub type DomainResult<T> = Result<T, DomainError>;
