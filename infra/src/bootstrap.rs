//! Wiring of configuration, pool and repositories into a ready auth service.

use std::sync::Arc;

use courier_core::services::{AuthService, AuthServiceConfig, PasswordHasher, TokenCodec, TokenCodecConfig};
use courier_shared::AppConfig;

use crate::database::{DatabasePool, PgAccountRepository, PgRefreshTokenStore};
use crate::InfrastructureError;

/// Auth service backed by PostgreSQL
pub type PgAuthService = AuthService<PgAccountRepository, PgRefreshTokenStore>;

/// Everything a process needs to serve the auth flows.
///
/// Built once at startup; the service is shared behind an `Arc` so handlers
/// can clone it freely.
pub struct AuthStack {
    pool: DatabasePool,
    service: Arc<PgAuthService>,
    sessions: Arc<PgRefreshTokenStore>,
}

impl AuthStack {
    /// Connect, migrate and assemble the auth service
    ///
    /// Fails before touching the database if the configuration is invalid.
    pub async fn build(config: &AppConfig) -> Result<Self, InfrastructureError> {
        config.validate()?;

        let pool = DatabasePool::new(config.database.clone()).await?;
        pool.run_migrations().await?;

        let hasher = PasswordHasher::from_config(&config.auth.password)
            .map_err(|e| InfrastructureError::Config(e.to_string()))?;
        let codec_config = TokenCodecConfig::from_jwt_config(&config.auth.jwt)
            .map_err(|e| InfrastructureError::Config(e.to_string()))?;
        let codec =
            TokenCodec::new(codec_config).map_err(|e| InfrastructureError::Config(e.to_string()))?;

        let accounts = Arc::new(PgAccountRepository::new(pool.get_pool().clone()));
        let sessions = Arc::new(PgRefreshTokenStore::new(pool.get_pool().clone()));

        let service = Arc::new(AuthService::new(
            accounts,
            Arc::clone(&sessions),
            hasher,
            codec,
            AuthServiceConfig::from_jwt_config(&config.auth.jwt)?,
        ));

        tracing::info!(
            environment = %config.environment,
            algorithm = %config.auth.jwt.algorithm,
            "Auth stack ready"
        );

        Ok(Self {
            pool,
            service,
            sessions,
        })
    }

    pub fn service(&self) -> Arc<PgAuthService> {
        Arc::clone(&self.service)
    }

    /// Direct store access for maintenance such as
    /// [`PgRefreshTokenStore::purge_expired`]
    pub fn sessions(&self) -> Arc<PgRefreshTokenStore> {
        Arc::clone(&self.sessions)
    }

    pub fn pool(&self) -> &DatabasePool {
        &self.pool
    }

    /// Close the connection pool
    pub async fn shutdown(self) {
        self.pool.close().await;
        tracing::info!("Auth stack shut down");
    }
}
