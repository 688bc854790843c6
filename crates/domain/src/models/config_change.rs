//! Config change domain models.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use validator::Validate;

/// One immutable historical record of a value assigned to a rule.
///
/// Superseding a rule's value is modeled as a new entry; existing entries are
/// never edited in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigChange {
    pub id: i64,
    pub rule_type_id: i64,
    pub current_value: String,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub critical: bool,
}

/// Request to record a configuration change.
///
/// `changed_at` is always server-assigned and deliberately absent here.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RecordChangeRequest {
    pub rule_type_id: i64,
    #[validate(custom(function = "shared::validation::validate_not_blank"))]
    pub current_value: String,
    #[validate(custom(function = "shared::validation::validate_actor_name"))]
    pub changed_by: String,
    pub critical: bool,
}

/// One ledger entry within a rule's history report.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChangeEntry {
    pub id: i64,
    pub current_value: String,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub critical: bool,
}

impl From<ConfigChange> for ChangeEntry {
    fn from(change: ConfigChange) -> Self {
        ChangeEntry {
            id: change.id,
            current_value: change.current_value,
            changed_by: change.changed_by,
            changed_at: change.changed_at,
            critical: change.critical,
        }
    }
}

/// Change history for one rule: entries ordered ascending by `changed_at`.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RuleHistory {
    pub rule_type_id: i64,
    pub rule_name: String,
    pub history: Vec<ChangeEntry>,
}
