//! Configuration for the token codec

use std::str::FromStr;

use courier_shared::config::JwtConfig;
use jsonwebtoken::Algorithm;

use crate::errors::TokenError;

/// Configuration for the token codec
///
/// Holds no secrets; those are passed into every codec call.
#[derive(Debug, Clone, Copy)]
pub struct TokenCodecConfig {
    /// Pinned JWT signing algorithm, HMAC family only
    pub algorithm: Algorithm,
    /// Clock skew tolerated on exp/nbf, in seconds
    pub leeway_secs: u64,
}

impl Default for TokenCodecConfig {
    fn default() -> Self {
        Self {
            algorithm: Algorithm::HS256,
            leeway_secs: 0,
        }
    }
}

impl TokenCodecConfig {
    /// Build from the shared JWT configuration
    pub fn from_jwt_config(config: &JwtConfig) -> Result<Self, TokenError> {
        let algorithm = Algorithm::from_str(&config.algorithm)
            .map_err(|_| TokenError::UnsupportedAlgorithm(config.algorithm.clone()))?;

        Ok(Self {
            algorithm,
            leeway_secs: config.leeway_secs,
        })
    }
}
