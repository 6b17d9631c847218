//! Password hashing module
//!
//! bcrypt with a tunable cost. The salt is embedded in every digest.

mod hasher;


pub use hasher::PasswordHasher;
