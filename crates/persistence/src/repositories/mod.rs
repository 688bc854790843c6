//! Repository implementations over in-memory keyed stores.

pub mod config_change;
pub mod rule_type;

pub use config_change::{ConfigChangeRepository, NewConfigChange};
pub use rule_type::RuleTypeRepository;

use thiserror::Error;

/// Storage-level failure.
///
/// The only way an in-memory store can fail is a poisoned lock, which means a
/// writer panicked mid-mutation.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("store lock poisoned")]
    LockPoisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;
