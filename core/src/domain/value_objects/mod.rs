//! Value objects representing immutable domain concepts.

pub mod account_view;
pub mod auth_response;
pub mod inputs;

// Re-export commonly used types
pub use account_view::AccountView;
pub use auth_response::AuthResponse;
pub use inputs::{LoginInput, RegisterInput};
