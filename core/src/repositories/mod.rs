pub mod account;
pub mod session;

pub use account::AccountRepository;
pub use session::RefreshTokenStore;

#[cfg(test)]
pub use account::MockAccountRepository;
#[cfg(test)]
pub use session::MockRefreshTokenStore;
