//! HTTP route handlers.

pub mod config_changes;
pub mod health;
pub mod rule_types;
