//! Value validation against a rule's declared value type.

use crate::models::ValueType;

/// Maximum length of a STRING value.
const MAX_STRING_LEN: usize = 200;

/// Why a raw value was rejected for its declared type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueRejection {
    NotAnInteger,
    NotABoolean,
    StringTooLong,
    StringWithoutLetters,
}

impl std::fmt::Display for ValueRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueRejection::NotAnInteger => write!(f, "must be an integer"),
            ValueRejection::NotABoolean => write!(f, "must be boolean"),
            ValueRejection::StringTooLong => {
                write!(f, "must not exceed {} characters", MAX_STRING_LEN)
            }
            ValueRejection::StringWithoutLetters => {
                write!(f, "must contain at least one letter")
            }
        }
    }
}

/// Checks a raw string value against the declared value type.
///
/// Pure function; the catalog guarantees `value_type` is one of the closed
/// enumeration, so there is no unknown-type case to reject.
pub fn check_value(value_type: ValueType, raw: &str) -> Result<(), ValueRejection> {
    match value_type {
        ValueType::Integer => raw
            .parse::<i64>()
            .map(|_| ())
            .map_err(|_| ValueRejection::NotAnInteger),
        ValueType::Boolean => {
            if raw.eq_ignore_ascii_case("true") || raw.eq_ignore_ascii_case("false") {
                Ok(())
            } else {
                Err(ValueRejection::NotABoolean)
            }
        }
        ValueType::String => {
            if raw.chars().count() > MAX_STRING_LEN {
                Err(ValueRejection::StringTooLong)
            } else if !raw.chars().any(|c| c.is_alphabetic()) {
                Err(ValueRejection::StringWithoutLetters)
            } else {
                Ok(())
            }
        }
    }
}
