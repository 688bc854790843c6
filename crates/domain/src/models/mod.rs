//! Domain models for the Config Tracker backend.

pub mod config_change;
pub mod rule_type;

pub use config_change::{ChangeEntry, ConfigChange, RecordChangeRequest, RuleHistory};
pub use rule_type::{CreateRuleTypeRequest, RuleType, UpdateRuleTypeRequest, ValueType};
