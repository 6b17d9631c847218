//! # Courier Core
//!
//! Domain layer of the Courier credential and session subsystem.
//! This crate contains domain entities, the error taxonomy, repository
//! interfaces, the password hasher, the token codec and the authentication
//! flows built on top of them.

pub mod domain;
pub mod errors;
pub mod repositories;
pub mod services;

// Re-export commonly used types for convenience
pub use domain::entities::{AccessClaims, Account, RefreshClaims, RefreshSession, TokenPair};
pub use domain::value_objects::{AccountView, AuthResponse, LoginInput, RegisterInput};
pub use errors::{
    DomainError, DomainResult, ErrorKind, PasswordError, RepositoryError, TokenError,
    UniqueField, ValidationError,
};
pub use repositories::{AccountRepository, RefreshTokenStore};
pub use services::{
    AuthService, AuthServiceConfig, PasswordHasher, RequestContext, TokenCodec, TokenCodecConfig,
};
