//! Config change repository over an in-memory keyed store.
//!
//! The ledger is append-style: entries are immutable once stored, though they
//! can be deleted by id.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use chrono::{DateTime, Utc};
use domain::models::ConfigChange;

use super::{StoreError, StoreResult};

/// Input for appending a ledger entry. The id is assigned by the store.
#[derive(Debug, Clone)]
pub struct NewConfigChange {
    pub rule_type_id: i64,
    pub current_value: String,
    pub changed_by: String,
    pub changed_at: DateTime<Utc>,
    pub critical: bool,
}

/// Keyed store of config changes by id.
#[derive(Default)]
pub struct ConfigChangeRepository {
    changes: RwLock<HashMap<i64, ConfigChange>>,
}

impl ConfigChangeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<i64, ConfigChange>>> {
        self.changes.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<i64, ConfigChange>>> {
        self.changes.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Appends a new ledger entry, assigning the next id.
    ///
    /// The next id is the maximum existing id plus one; deleted ids are never
    /// reused. Assignment happens under the write lock, atomically with the
    /// insert.
    pub fn insert(&self, new: NewConfigChange) -> StoreResult<ConfigChange> {
        let mut changes = self.write()?;
        let id = changes.keys().max().copied().unwrap_or(0) + 1;
        let change = ConfigChange {
            id,
            rule_type_id: new.rule_type_id,
            current_value: new.current_value,
            changed_by: new.changed_by,
            changed_at: new.changed_at,
            critical: new.critical,
        };
        changes.insert(id, change.clone());
        Ok(change)
    }

    pub fn find_by_id(&self, id: i64) -> StoreResult<Option<ConfigChange>> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All ledger entries, ordered by id.
    pub fn find_all(&self) -> StoreResult<Vec<ConfigChange>> {
        let changes = self.read()?;
        let mut all: Vec<ConfigChange> = changes.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }

    /// Entries for one rule, ordered by id.
    pub fn find_for_rule(&self, rule_type_id: i64) -> StoreResult<Vec<ConfigChange>> {
        let changes = self.read()?;
        let mut matching: Vec<ConfigChange> = changes
            .values()
            .filter(|c| c.rule_type_id == rule_type_id)
            .cloned()
            .collect();
        matching.sort_by_key(|c| c.id);
        Ok(matching)
    }

    /// Whether the rule already has an entry with this (value, critical) pair.
    pub fn has_duplicate(
        &self,
        rule_type_id: i64,
        current_value: &str,
        critical: bool,
    ) -> StoreResult<bool> {
        let changes = self.read()?;
        Ok(changes.values().any(|c| {
            c.rule_type_id == rule_type_id
                && c.current_value == current_value
                && c.critical == critical
        }))
    }

    /// Removes an entry, returning the prior record when present.
    pub fn delete(&self, id: i64) -> StoreResult<Option<ConfigChange>> {
        Ok(self.write()?.remove(&id))
    }
}
