//! Input shape checks for the auth flows

use courier_shared::validators::{char_length_between, is_valid_email, min_chars, not_empty};

use crate::domain::entities::account::{
    PASSWORD_MAX_BYTES, PASSWORD_MIN_CHARS, USERNAME_MAX_CHARS, USERNAME_MIN_CHARS,
};
use crate::domain::value_objects::{LoginInput, RegisterInput};
use crate::errors::ValidationError;

pub(crate) fn validate_registration(input: &RegisterInput) -> Result<(), ValidationError> {
    if !not_empty(&input.username) {
        return Err(ValidationError::RequiredField { field: "username" });
    }
    if !char_length_between(&input.username, USERNAME_MIN_CHARS, USERNAME_MAX_CHARS) {
        return Err(ValidationError::InvalidLength {
            field: "username",
            min: USERNAME_MIN_CHARS,
            max: USERNAME_MAX_CHARS,
        });
    }
    if !not_empty(&input.email) {
        return Err(ValidationError::RequiredField { field: "email" });
    }
    if !is_valid_email(&input.email) {
        return Err(ValidationError::InvalidEmail);
    }
    if !not_empty(&input.password) {
        return Err(ValidationError::RequiredField { field: "password" });
    }
    if !min_chars(&input.password, PASSWORD_MIN_CHARS) {
        return Err(ValidationError::TooShort {
            field: "password",
            min: PASSWORD_MIN_CHARS,
        });
    }
    if input.password.len() > PASSWORD_MAX_BYTES {
        return Err(ValidationError::TooLong {
            field: "password",
            max_bytes: PASSWORD_MAX_BYTES,
        });
    }
    Ok(())
}

pub(crate) fn validate_login(input: &LoginInput) -> Result<(), ValidationError> {
    if !not_empty(&input.email) {
        return Err(ValidationError::RequiredField { field: "email" });
    }
    if !not_empty(&input.password) {
        return Err(ValidationError::RequiredField { field: "password" });
    }
    Ok(())
}

pub(crate) fn require_token(token: &str, field: &'static str) -> Result<(), ValidationError> {
    if !not_empty(token) {
        return Err(ValidationError::RequiredField { field });
    }
    Ok(())
}
