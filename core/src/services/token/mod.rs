//! Token codec module for JWT management
//!
//! This module handles:
//! - Access token issuance and verification
//! - Refresh token issuance and subject extraction
//! - Algorithm pinning against algorithm-confusion attacks

mod codec;
mod config;

#[cfg(test)]
mod tests;

pub use codec::TokenCodec;
pub use config::TokenCodecConfig;
