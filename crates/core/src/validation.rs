//! Field rules for movie and actor input.
//!
//! The store itself enforces nothing beyond column types; handlers call these
//! before building a create or update DTO.

use crate::error::CoreError;

/// Validate that a movie title is not blank.
pub fn validate_title(title: &str) -> Result<(), CoreError> {
    require_non_blank("title", title)
}

/// Validate that an actor name is not blank.
pub fn validate_name(name: &str) -> Result<(), CoreError> {
    require_non_blank("name", name)
}

/// Validate that an age is non-negative.
pub fn validate_age(age: i32) -> Result<(), CoreError> {
    if age < 0 {
        return Err(CoreError::Validation(format!(
            "age must be a non-negative integer, got {age}"
        )));
    }
    Ok(())
}

/// Validate that gender is exactly one character (e.g. `M`, `F`).
pub fn validate_gender(gender: &str) -> Result<(), CoreError> {
    if gender.chars().count() != 1 {
        return Err(CoreError::Validation(
            "gender must be a single character".to_string(),
        ));
    }
    Ok(())
}

fn require_non_blank(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}
