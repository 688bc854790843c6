//! Common validation utilities.

use lazy_static::lazy_static;
use regex::Regex;
use validator::ValidationError;

lazy_static! {
    /// At least one English letter anywhere in the string.
    static ref CONTAINS_LETTER: Regex = Regex::new(r"[A-Za-z]").unwrap();
    /// English letters and spaces only, non-empty.
    static ref LETTERS_AND_SPACES: Regex = Regex::new(r"^[A-Za-z ]+$").unwrap();
}

/// Validates that a rule name contains at least one English letter.
///
/// Length bounds are enforced separately via `#[validate(length(...))]`.
pub fn validate_rule_name(name: &str) -> Result<(), ValidationError> {
    if CONTAINS_LETTER.is_match(name) {
        Ok(())
    } else {
        let mut err = ValidationError::new("rule_name_letters");
        err.message = Some("Name must contain English letters".into());
        Err(err)
    }
}

/// Validates an actor name: English letters and spaces only.
pub fn validate_actor_name(name: &str) -> Result<(), ValidationError> {
    if LETTERS_AND_SPACES.is_match(name) {
        Ok(())
    } else {
        let mut err = ValidationError::new("actor_name_pattern");
        err.message = Some("Name must contain only English letters".into());
        Err(err)
    }
}

/// Validates that a value is not blank (empty or whitespace only).
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        let mut err = ValidationError::new("not_blank");
        err.message = Some("Value must not be blank".into());
        Err(err)
    } else {
        Ok(())
    }
}
