//! Public projection of an account.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::entities::Account;

/// What callers get to see of an account. Has no field for the password hash.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountView {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    /// RFC 3339 timestamp
    pub created_at: String,
}

impl From<&Account> for AccountView {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            created_at: account.created_at.to_rfc3339(),
        }
    }
}
