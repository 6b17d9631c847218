//! Authentication service module
//!
//! This module composes the password hasher, the token codec and the two
//! repositories into the account and session flows:
//! - Registration and login
//! - Access token renewal from a refresh token
//! - Logout (refresh session revocation)
//! - Access token authentication for protected routes

mod config;
mod context;
mod service;
mod validation;

#[cfg(test)]
mod tests;

pub use config::AuthServiceConfig;
pub use context::RequestContext;
pub use service::AuthService;
