//! Common validation utilities
//!
//! Plain predicates; callers decide which error to raise when one fails.

/// Common validation functions
pub mod validators {
    /// Check if a string is not empty
    pub fn not_empty(value: &str) -> bool {
        !value.is_empty()
    }

    /// Check if a string length, counted in characters, is within bounds
    pub fn char_length_between(value: &str, min: usize, max: usize) -> bool {
        let len = value.chars().count();
        len >= min && len <= max
    }

    /// Check if a string has at least `min` characters
    pub fn min_chars(value: &str, min: usize) -> bool {
        value.chars().count() >= min
    }

    /// Check if an email address is valid (basic check)
    pub fn is_valid_email(email: &str) -> bool {
        email.contains('@') && email.contains('.')
    }
}
