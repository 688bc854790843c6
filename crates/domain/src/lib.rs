//! Domain layer for the Config Tracker backend.
//!
//! This crate contains:
//! - Domain models (RuleType, ConfigChange, report rows)
//! - Value validation against a rule's declared value type
//! - Domain error types
//! - The notifier contract and its implementations

pub mod error;
pub mod models;
pub mod services;

pub use error::DomainError;
