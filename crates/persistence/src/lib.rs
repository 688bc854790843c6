//! Persistence layer for the Config Tracker backend.
//!
//! This crate contains the in-memory keyed stores behind the rule catalog and
//! the change ledger. Entries are held in `RwLock`-guarded maps owned by
//! repository structs; mutation serializes behind the write lock, and id
//! assignment happens inside the same critical section as the insert it
//! guards.

pub mod repositories;

pub use repositories::{ConfigChangeRepository, NewConfigChange, RuleTypeRepository, StoreError};
