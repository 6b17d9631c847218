//! In-memory implementation of RefreshTokenStore for testing

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::domain::entities::RefreshSession;
use crate::errors::RepositoryError;

use super::trait_::RefreshTokenStore;

/// Mock refresh token store keyed by token string
pub struct MockRefreshTokenStore {
    sessions: Arc<RwLock<HashMap<String, RefreshSession>>>,
}

impl MockRefreshTokenStore {
    pub fn new() -> Self {
        Self {
            sessions: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of live sessions
    pub async fn len(&self) -> usize {
        self.sessions.read().await.len()
    }

    /// Sessions belonging to one account
    pub async fn sessions_for(&self, account_id: Uuid) -> Vec<RefreshSession> {
        let sessions = self.sessions.read().await;
        sessions
            .values()
            .filter(|s| s.account_id == account_id)
            .cloned()
            .collect()
    }
}

impl Default for MockRefreshTokenStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RefreshTokenStore for MockRefreshTokenStore {
    async fn put(
        &self,
        account_id: Uuid,
        token: &str,
        expires_at: DateTime<Utc>,
    ) -> Result<RefreshSession, RepositoryError> {
        let session = RefreshSession::new(account_id, token.to_string(), expires_at);
        let mut sessions = self.sessions.write().await;
        sessions.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    async fn get_by_token(&self, token: &str) -> Result<Option<RefreshSession>, RepositoryError> {
        let sessions = self.sessions.read().await;
        Ok(sessions.get(token).cloned())
    }

    async fn delete_by_token(&self, token: &str) -> Result<bool, RepositoryError> {
        let mut sessions = self.sessions.write().await;
        Ok(sessions.remove(token).is_some())
    }
}
