//! Main authentication service implementation

use std::sync::Arc;

use chrono::Utc;
use tokio::sync::OnceCell;
use tracing::{debug, error, info, warn};

use crate::domain::entities::{AccessClaims, Account, TokenPair};
use crate::domain::value_objects::{AuthResponse, LoginInput, RegisterInput};
use crate::errors::{DomainError, DomainResult, RepositoryError, UniqueField};
use crate::repositories::{AccountRepository, RefreshTokenStore};
use crate::services::password::PasswordHasher;
use crate::services::token::TokenCodec;

use super::config::AuthServiceConfig;
use super::context::RequestContext;
use super::validation::{require_token, validate_login, validate_registration};

/// Hashed once per service and checked against on unknown-email logins
const DUMMY_PASSWORD: &str = "courier-dummy-password";

/// Authentication service for the account and session flows.
///
/// Holds no mutable state of its own; every flow may run concurrently with
/// any other. Uniqueness races are settled by the account store and
/// revocation by the refresh token store.
///
/// Access tokens cannot be revoked: logout removes the refresh session, but
/// an access token already issued stays valid until it expires.
pub struct AuthService<A, S>
where
    A: AccountRepository,
    S: RefreshTokenStore,
{
    /// Account persistence
    accounts: Arc<A>,
    /// Refresh session persistence, the revocation source of truth
    sessions: Arc<S>,
    /// Password hashing
    hasher: PasswordHasher,
    /// Token signing and verification
    codec: TokenCodec,
    /// Secrets and lifetimes
    config: AuthServiceConfig,
    /// Digest at the configured cost, created on first use
    dummy_digest: OnceCell<String>,
}

impl<A, S> AuthService<A, S>
where
    A: AccountRepository,
    S: RefreshTokenStore,
{
    /// Create a new authentication service
    ///
    /// # Arguments
    ///
    /// * `accounts` - Repository for account persistence
    /// * `sessions` - Store for refresh sessions
    /// * `hasher` - Password hasher
    /// * `codec` - Token codec pinned to the signing algorithm
    /// * `config` - Secrets and token lifetimes
    pub fn new(
        accounts: Arc<A>,
        sessions: Arc<S>,
        hasher: PasswordHasher,
        codec: TokenCodec,
        config: AuthServiceConfig,
    ) -> Self {
        Self {
            accounts,
            sessions,
            hasher,
            codec,
            config,
            dummy_digest: OnceCell::new(),
        }
    }

    /// Register a new account and open its first session
    ///
    /// This method:
    /// 1. Validates username, email and password shape
    /// 2. Rejects an email, then a username, that is already taken
    /// 3. Hashes the password off the async executor
    /// 4. Creates the account; a uniqueness violation from the store is
    ///    reported exactly like the pre-check
    /// 5. Issues a token pair and records the refresh session
    ///
    /// Steps 4 and 5 are not atomic. If recording the session fails the
    /// account still exists, the caller sees an internal error, and a retry
    /// reports a conflict; the client recovers by logging in.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The account view and its tokens
    /// * `Err(DomainError::Validation)` - Malformed input
    /// * `Err(DomainError::Conflict)` - Email or username already in use
    /// * `Err(DomainError)` - Storage or hashing failure
    pub async fn register(
        &self,
        ctx: &RequestContext,
        input: RegisterInput,
    ) -> DomainResult<AuthResponse> {
        validate_registration(&input)?;

        if ctx
            .run(self.accounts.find_by_email(&input.email))
            .await
            .map_err(storage_failure)?
            .is_some()
        {
            warn!("Registration rejected: email already in use");
            return Err(DomainError::Conflict {
                field: UniqueField::Email,
            });
        }

        if ctx
            .run(self.accounts.find_by_username(&input.username))
            .await
            .map_err(storage_failure)?
            .is_some()
        {
            warn!("Registration rejected: username already in use");
            return Err(DomainError::Conflict {
                field: UniqueField::Username,
            });
        }

        let password_hash = self.hasher.hash_async(input.password).await?;
        let account = Account::new(input.username, input.email, password_hash);

        let account = match ctx.run(self.accounts.create(account)).await {
            Ok(account) => account,
            Err(RepositoryError::UniqueViolation { field }) => {
                warn!(%field, "Registration lost a uniqueness race");
                return Err(DomainError::Conflict { field });
            }
            Err(e) => return Err(storage_failure(e)),
        };

        let tokens = match self.open_session(ctx, &account).await {
            Ok(tokens) => tokens,
            Err(e) => {
                error!(account_id = %account.id, "Account created but its first session was not opened");
                return Err(e);
            }
        };

        info!(account_id = %account.id, "Account registered");
        Ok(AuthResponse::new(&account, tokens))
    }

    /// Authenticate by email and password and open a new session
    ///
    /// An unknown email and a wrong password produce the same error and both
    /// cost one bcrypt verify. Each login adds a session; earlier sessions
    /// stay valid.
    ///
    /// # Returns
    ///
    /// * `Ok(AuthResponse)` - The account view and a fresh token pair
    /// * `Err(DomainError::InvalidCredentials)` - Unknown account or wrong password
    pub async fn login(&self, ctx: &RequestContext, input: LoginInput) -> DomainResult<AuthResponse> {
        validate_login(&input)?;

        let account = match ctx.run(self.accounts.find_by_email(&input.email)).await {
            Ok(Some(account)) => account,
            Ok(None) => {
                self.verify_against_dummy(input.password).await?;
                warn!("Login rejected");
                return Err(DomainError::InvalidCredentials);
            }
            Err(e) => return Err(storage_failure(e)),
        };

        let verified = self
            .hasher
            .verify_async(input.password, account.password_hash.clone())
            .await?;
        if !verified {
            warn!(account_id = %account.id, "Login rejected");
            return Err(DomainError::InvalidCredentials);
        }

        let tokens = self.open_session(ctx, &account).await?;

        info!(account_id = %account.id, "Account logged in");
        Ok(AuthResponse::new(&account, tokens))
    }

    /// Mint a new access token from a live refresh token
    ///
    /// The refresh token must verify and its session must still be stored.
    /// The refresh token is not rotated: the returned pair carries the same
    /// refresh token string that was passed in.
    ///
    /// # Returns
    ///
    /// * `Ok(TokenPair)` - New access token, same refresh token
    /// * `Err(DomainError::InvalidToken)` - Token invalid, expired or revoked
    /// * `Err(DomainError::NotFound)` - The token's account no longer exists
    pub async fn refresh_token(
        &self,
        ctx: &RequestContext,
        refresh_token: &str,
    ) -> DomainResult<TokenPair> {
        require_token(refresh_token, "refresh_token")?;

        let account_id = self
            .codec
            .verify_subject(refresh_token, &self.config.refresh_secret)
            .map_err(|e| {
                warn!(reason = %e, "Refresh token rejected");
                DomainError::InvalidToken
            })?;

        let session = match ctx.run(self.sessions.get_by_token(refresh_token)).await {
            Ok(Some(session)) => session,
            Ok(None) => {
                warn!(account_id = %account_id, "Refresh token has no live session");
                return Err(DomainError::InvalidToken);
            }
            Err(e) => return Err(storage_failure(e)),
        };

        if session.account_id != account_id {
            warn!(account_id = %account_id, "Refresh session belongs to another account");
            return Err(DomainError::InvalidToken);
        }

        let account = ctx
            .run(self.accounts.find_by_id(account_id))
            .await
            .map_err(storage_failure)?
            .ok_or(DomainError::NotFound { resource: "account" })?;

        let access_token = self
            .codec
            .issue_access(
                account.id,
                &account.username,
                &account.email,
                &self.config.access_secret,
                self.config.access_token_ttl,
            )
            .map_err(DomainError::crypto)?;

        debug!(account_id = %account.id, "Access token refreshed");
        Ok(TokenPair::new(access_token, refresh_token.to_string()))
    }

    /// Revoke the session holding this refresh token
    ///
    /// Logging out a token with no session is not an error.
    pub async fn logout(&self, ctx: &RequestContext, refresh_token: &str) -> DomainResult<()> {
        require_token(refresh_token, "refresh_token")?;

        let deleted = ctx
            .run(self.sessions.delete_by_token(refresh_token))
            .await
            .map_err(storage_failure)?;

        if deleted {
            info!("Session revoked");
        } else {
            debug!("Logout for a session that does not exist");
        }
        Ok(())
    }

    /// Verify an access token and return its claims
    ///
    /// Used to guard routes. Only signature, algorithm and time window are
    /// checked; there is no store lookup for access tokens.
    pub fn authenticate(&self, access_token: &str) -> DomainResult<AccessClaims> {
        require_token(access_token, "access_token")?;

        self.codec
            .verify_access(access_token, &self.config.access_secret)
            .map_err(|e| {
                warn!(reason = %e, "Access token rejected");
                DomainError::InvalidToken
            })
    }

    async fn verify_against_dummy(&self, password: String) -> DomainResult<()> {
        let digest = self
            .dummy_digest
            .get_or_try_init(|| self.hasher.hash_async(DUMMY_PASSWORD.to_string()))
            .await?;
        self.hasher.verify_async(password, digest.clone()).await?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn has_dummy_digest(&self) -> bool {
        self.dummy_digest.initialized()
    }

    /// Issue a token pair for `account` and record the refresh session
    async fn open_session(&self, ctx: &RequestContext, account: &Account) -> DomainResult<TokenPair> {
        let now = Utc::now();

        let access_token = self
            .codec
            .issue_access_at(
                account.id,
                &account.username,
                &account.email,
                &self.config.access_secret,
                self.config.access_token_ttl,
                now,
            )
            .map_err(DomainError::crypto)?;

        let refresh_token = self
            .codec
            .issue_refresh_at(
                account.id,
                &self.config.refresh_secret,
                self.config.refresh_token_ttl,
                now,
            )
            .map_err(DomainError::crypto)?;

        let expires_at = now + self.config.refresh_token_ttl;
        ctx.run(self.sessions.put(account.id, &refresh_token, expires_at))
            .await
            .map_err(storage_failure)?;

        Ok(TokenPair::new(access_token, refresh_token))
    }
}

fn storage_failure(error: RepositoryError) -> DomainError {
    error!(error = %error, "Storage operation failed");
    DomainError::from(error)
}
