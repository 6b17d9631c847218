//! Per-request context

use std::future::Future;
use std::time::Duration;

use tokio::time::{timeout_at, Instant};

use crate::errors::RepositoryError;

/// Carries the caller's deadline into every store call.
///
/// A store call still running when the deadline passes is abandoned and
/// reported as [`RepositoryError::Timeout`].
#[derive(Debug, Clone, Copy, Default)]
pub struct RequestContext {
    deadline: Option<Instant>,
}

impl RequestContext {
    /// A context without a deadline
    pub fn background() -> Self {
        Self::default()
    }

    pub fn with_deadline(deadline: Instant) -> Self {
        Self {
            deadline: Some(deadline),
        }
    }

    /// A context whose deadline is `timeout` from now
    pub fn with_timeout(timeout: Duration) -> Self {
        Self::with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    pub(crate) async fn run<F, T>(&self, operation: F) -> Result<T, RepositoryError>
    where
        F: Future<Output = Result<T, RepositoryError>>,
    {
        match self.deadline {
            Some(deadline) => timeout_at(deadline, operation)
                .await
                .map_err(|_| RepositoryError::Timeout)?,
            None => operation.await,
        }
    }
}
