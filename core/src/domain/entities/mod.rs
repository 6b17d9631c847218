//! Domain entities representing core business objects.

pub mod account;
pub mod session;
pub mod token;

#[cfg(test)]
mod tests;

// Re-export commonly used types
pub use account::Account;
pub use session::RefreshSession;
pub use token::{AccessClaims, RefreshClaims, TokenPair};
