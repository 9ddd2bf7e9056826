//! Input limits for the profile form.
//!
//! Setters truncate to the limit the way a `maxLength` input does, and
//! submission rejects required fields that are still empty.

use crate::libs::core::models::ProfileForm;
use thiserror::Error;

pub const MAX_USERNAME_CHARS: usize = 50;

pub const MAX_BIO_CHARS: usize = 200;

#[derive(Error, Debug, PartialEq)]
pub enum ValidationError {
    #[error("{0} is required")]
    Required(&'static str),
    #[error("{field} exceeds {max} characters")]
    TooLong { field: &'static str, max: usize },
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FormLimits {
    pub max_username_chars: usize,
    pub max_bio_chars: usize,
}

impl Default for FormLimits {
    fn default() -> Self {
        Self {
            max_username_chars: MAX_USERNAME_CHARS,
            max_bio_chars: MAX_BIO_CHARS,
        }
    }
}

/// Cut `input` down to at most `max` characters, on a char boundary.
pub fn truncate_chars(input: &str, max: usize) -> String {
    match input.char_indices().nth(max) {
        Some((byte_index, _)) => input[..byte_index].to_string(),
        None => input.to_string(),
    }
}

pub fn validate_profile_form(form: &ProfileForm, limits: &FormLimits) -> Result<(), ValidationError> {
    if form.username.is_empty() {
        return Err(ValidationError::Required("username"));
    }
    if form.bio.is_empty() {
        return Err(ValidationError::Required("bio"));
    }
    if form.username.chars().count() > limits.max_username_chars {
        return Err(ValidationError::TooLong {
            field: "username",
            max: limits.max_username_chars,
        });
    }
    if form.bio.chars().count() > limits.max_bio_chars {
        return Err(ValidationError::TooLong {
            field: "bio",
            max: limits.max_bio_chars,
        });
    }
    Ok(())
}
