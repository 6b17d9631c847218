//! bcrypt password hasher

use courier_shared::config::auth::{PasswordConfig, MAX_BCRYPT_COST, MIN_BCRYPT_COST};
use tracing::warn;

use crate::domain::entities::account::PASSWORD_MAX_BYTES;
use crate::errors::PasswordError;

/// One-way adaptive password hashing.
///
/// Hashing at the default cost takes hundreds of milliseconds. Async callers
/// should use [`hash_async`](Self::hash_async) and
/// [`verify_async`](Self::verify_async), which run on the blocking pool.
#[derive(Debug, Clone, Copy)]
pub struct PasswordHasher {
    cost: u32,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self {
            cost: bcrypt::DEFAULT_COST,
        }
    }
}

impl PasswordHasher {
    /// Creates a hasher with the given bcrypt cost
    ///
    /// # Returns
    ///
    /// * `Ok(PasswordHasher)` - Cost is within 4..=31
    /// * `Err(PasswordError::InvalidCost)` - Otherwise
    pub fn new(cost: u32) -> Result<Self, PasswordError> {
        if !(MIN_BCRYPT_COST..=MAX_BCRYPT_COST).contains(&cost) {
            return Err(PasswordError::InvalidCost { cost });
        }
        Ok(Self { cost })
    }

    pub fn from_config(config: &PasswordConfig) -> Result<Self, PasswordError> {
        Self::new(config.bcrypt_cost)
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hashes a password with a fresh random salt
    ///
    /// Passwords longer than 72 bytes are refused rather than truncated.
    pub fn hash(&self, password: &str) -> Result<String, PasswordError> {
        if password.len() > PASSWORD_MAX_BYTES {
            return Err(PasswordError::TooLong {
                max_bytes: PASSWORD_MAX_BYTES,
            });
        }
        bcrypt::hash(password, self.cost).map_err(PasswordError::Hashing)
    }

    /// Checks a password against a digest.
    ///
    /// Returns `false` on mismatch, when the digest cannot be parsed, and for
    /// any password over 72 bytes, which could never have been hashed.
    pub fn verify(&self, password: &str, digest: &str) -> bool {
        if password.len() > PASSWORD_MAX_BYTES {
            return false;
        }
        match bcrypt::verify(password, digest) {
            Ok(matches) => matches,
            Err(e) => {
                warn!(error = %e, "Stored password digest could not be parsed");
                false
            }
        }
    }

    /// [`hash`](Self::hash) on the blocking thread pool
    pub async fn hash_async(&self, password: String) -> Result<String, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.hash(&password))
            .await
            .map_err(|_| PasswordError::TaskFailed)?
    }

    /// [`verify`](Self::verify) on the blocking thread pool
    pub async fn verify_async(&self, password: String, digest: String) -> Result<bool, PasswordError> {
        let hasher = *self;
        tokio::task::spawn_blocking(move || hasher.verify(&password, &digest))
            .await
            .map_err(|_| PasswordError::TaskFailed)
    }
}
