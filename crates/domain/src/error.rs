//! Domain error types.

use thiserror::Error;

use crate::services::value_check::ValueRejection;

/// Failures raised by the catalog, ledger, recorder and reporter.
#[derive(Debug, Error)]
pub enum DomainError {
    /// Lookup by id missed.
    #[error("{resource} not found with {field}: {value}")]
    NotFound {
        resource: &'static str,
        field: &'static str,
        value: i64,
    },

    /// A declared value type is outside the closed enumeration.
    #[error("Invalid value type '{given}'. Accepted types: INTEGER, BOOLEAN, STRING")]
    InvalidValueType { given: String },

    /// Rule name collides case-insensitively with an existing rule.
    #[error("Rule with name '{0}' already exists")]
    DuplicateName(String),

    /// Same (value, critical) pair already recorded for the rule.
    #[error("An identical configuration change already exists")]
    DuplicateChange,

    /// Raw value failed validation for the rule's value type.
    #[error("Value for rule {rule} {reason}")]
    InvalidValue { rule: String, reason: ValueRejection },

    /// Listing found no rule types at all.
    #[error("No rule types created yet")]
    EmptyCatalog,

    /// Report filters matched no ledger entries.
    #[error("No configuration changes found")]
    NoChangesFound,
}

impl DomainError {
    /// Not-found error for a RuleType id.
    pub fn rule_type_not_found(id: i64) -> Self {
        DomainError::NotFound {
            resource: "RuleType",
            field: "id",
            value: id,
        }
    }

    /// Not-found error for a ConfigChange id.
    pub fn config_change_not_found(id: i64) -> Self {
        DomainError::NotFound {
            resource: "ConfigChange",
            field: "id",
            value: id,
        }
    }
}
