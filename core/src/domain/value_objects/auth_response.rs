//! Authentication response value object.

use serde::{Deserialize, Serialize};

use crate::domain::entities::{Account, TokenPair};
use super::AccountView;

/// Response returned after a successful registration or login
///
/// This response contains:
/// - The public view of the authenticated account
/// - A freshly issued access and refresh token pair
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuthResponse {
    /// The authenticated account
    pub account: AccountView,

    /// Newly issued tokens
    pub tokens: TokenPair,
}

impl AuthResponse {
    /// Creates an authentication response from an account and its tokens
    ///
    /// # Arguments
    ///
    /// * `account` - The authenticated account
    /// * `tokens` - The token pair issued for it
    ///
    /// # Returns
    ///
    /// A new `AuthResponse` instance
    pub fn new(account: &Account, tokens: TokenPair) -> Self {
        Self {
            account: AccountView::from(account),
            tokens,
        }
    }
}
