//! JWT signing and verification for access and refresh tokens

use chrono::{DateTime, Duration, Utc};
use courier_shared::config::SecretString;
use jsonwebtoken::errors::ErrorKind;
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

use crate::domain::entities::{AccessClaims, RefreshClaims};
use crate::errors::TokenError;

use super::config::TokenCodecConfig;

/// Signs and verifies session tokens.
///
/// Access and refresh tokens live in separate signing domains; the caller
/// picks the domain by passing the matching secret. Verification pins the
/// configured HMAC algorithm, so a token whose header names `none`, an
/// asymmetric algorithm or another HMAC variant is rejected before its
/// signature is looked at.
#[derive(Debug, Clone)]
pub struct TokenCodec {
    algorithm: Algorithm,
    validation: Validation,
}

impl TokenCodec {
    /// Creates a codec pinned to `config.algorithm`
    ///
    /// # Returns
    ///
    /// * `Ok(TokenCodec)` - For HS256, HS384 and HS512
    /// * `Err(TokenError::UnsupportedAlgorithm)` - For anything else
    pub fn new(config: TokenCodecConfig) -> Result<Self, TokenError> {
        match config.algorithm {
            Algorithm::HS256 | Algorithm::HS384 | Algorithm::HS512 => {}
            other => return Err(TokenError::UnsupportedAlgorithm(format!("{:?}", other))),
        }

        let mut validation = Validation::new(config.algorithm);
        validation.leeway = config.leeway_secs;
        validation.validate_exp = true;
        validation.validate_nbf = true;
        validation.validate_aud = false;
        validation.set_required_spec_claims(&["exp", "nbf"]);

        Ok(Self {
            algorithm: config.algorithm,
            validation,
        })
    }

    /// The pinned signing algorithm
    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Issues an access token valid from now for `ttl`
    ///
    /// # Arguments
    ///
    /// * `account_id` - The account's UUID
    /// * `username` - Username embedded in the claims
    /// * `email` - Email embedded in the claims
    /// * `secret` - Access signing secret
    /// * `ttl` - Token lifetime
    pub fn issue_access(
        &self,
        account_id: Uuid,
        username: &str,
        email: &str,
        secret: &SecretString,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.issue_access_at(account_id, username, email, secret, ttl, Utc::now())
    }

    pub(crate) fn issue_access_at(
        &self,
        account_id: Uuid,
        username: &str,
        email: &str,
        secret: &SecretString,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = AccessClaims::new(
            account_id,
            username.to_string(),
            email.to_string(),
            now,
            ttl,
        )?;
        self.sign(&claims, secret)
    }

    /// Issues a refresh token for `account_id` valid from now for `ttl`
    pub fn issue_refresh(
        &self,
        account_id: Uuid,
        secret: &SecretString,
        ttl: Duration,
    ) -> Result<String, TokenError> {
        self.issue_refresh_at(account_id, secret, ttl, Utc::now())
    }

    pub(crate) fn issue_refresh_at(
        &self,
        account_id: Uuid,
        secret: &SecretString,
        ttl: Duration,
        now: DateTime<Utc>,
    ) -> Result<String, TokenError> {
        let claims = RefreshClaims::new(account_id, now, ttl)?;
        self.sign(&claims, secret)
    }

    /// Verifies an access token and returns its claims
    ///
    /// # Returns
    ///
    /// * `Ok(AccessClaims)` - Signature, algorithm and time window all check out
    /// * `Err(TokenError)` - The specific reason the token was rejected
    pub fn verify_access(
        &self,
        token: &str,
        secret: &SecretString,
    ) -> Result<AccessClaims, TokenError> {
        self.verify(token, secret)
    }

    /// Verifies a refresh token and returns its claims
    pub fn verify_refresh(
        &self,
        token: &str,
        secret: &SecretString,
    ) -> Result<RefreshClaims, TokenError> {
        self.verify(token, secret)
    }

    /// Verifies a refresh token and returns only its subject
    pub fn verify_subject(&self, token: &str, secret: &SecretString) -> Result<Uuid, TokenError> {
        let claims = self.verify_refresh(token, secret)?;
        Uuid::parse_str(&claims.sub).map_err(|_| TokenError::InvalidSubject)
    }

    fn sign<T: Serialize>(&self, claims: &T, secret: &SecretString) -> Result<String, TokenError> {
        let header = Header::new(self.algorithm);
        encode(&header, claims, &EncodingKey::from_secret(secret.expose_bytes()))
            .map_err(|_| TokenError::Signing)
    }

    fn verify<T: DeserializeOwned>(&self, token: &str, secret: &SecretString) -> Result<T, TokenError> {
        let key = DecodingKey::from_secret(secret.expose_bytes());
        decode::<T>(token, &key, &self.validation)
            .map(|data| data.claims)
            .map_err(|e| match e.kind() {
                ErrorKind::InvalidSignature => TokenError::SignatureMismatch,
                ErrorKind::ExpiredSignature => TokenError::Expired,
                ErrorKind::ImmatureSignature => TokenError::NotYetValid,
                ErrorKind::InvalidAlgorithm => TokenError::UnexpectedAlgorithm,
                _ => TokenError::Malformed,
            })
    }
}
