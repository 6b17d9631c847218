//! Shared utilities for the Courier server
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types and loading
//! - Configuration errors
//! - Input validation predicates
//! - Tracing initialisation

pub mod config;
pub mod errors;
pub mod telemetry;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{
    AppConfig, AuthConfig, DatabaseConfig, Environment, JwtConfig, LogFormat, LoggingConfig,
    PasswordConfig, SecretString,
};
pub use errors::{ConfigError, ConfigResult};
pub use telemetry::init_tracing;
pub use utils::validators;
