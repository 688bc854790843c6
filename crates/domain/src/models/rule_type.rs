//! Rule type domain models.

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use validator::Validate;

use crate::error::DomainError;

/// Declared value type of a configuration rule.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Integer,
    Boolean,
    String,
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValueType::Integer => write!(f, "INTEGER"),
            ValueType::Boolean => write!(f, "BOOLEAN"),
            ValueType::String => write!(f, "STRING"),
        }
    }
}

impl FromStr for ValueType {
    type Err = DomainError;

    /// Case-insensitive parse; anything outside the enumeration is rejected.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "INTEGER" => Ok(ValueType::Integer),
            "BOOLEAN" => Ok(ValueType::Boolean),
            "STRING" => Ok(ValueType::String),
            _ => Err(DomainError::InvalidValueType {
                given: s.to_string(),
            }),
        }
    }
}

/// A named configuration parameter with a declared value type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleType {
    pub id: i64,
    pub name: String,
    pub value_type: ValueType,
}

/// Request to register a new rule type.
///
/// `value_type` stays a raw string here so an unknown type surfaces as the
/// dedicated invalid-value-type error rather than a deserialization failure.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CreateRuleTypeRequest {
    #[validate(
        length(min = 3, max = 100, message = "rule name should contain between 3 and 100 characters"),
        custom(function = "shared::validation::validate_rule_name")
    )]
    pub name: String,
    pub value_type: String,
}

/// Request to update an existing rule type. Same shape as registration.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct UpdateRuleTypeRequest {
    #[validate(
        length(min = 3, max = 100, message = "rule name should contain between 3 and 100 characters"),
        custom(function = "shared::validation::validate_rule_name")
    )]
    pub name: String,
    pub value_type: String,
}
