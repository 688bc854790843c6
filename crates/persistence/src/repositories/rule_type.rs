//! Rule type repository over an in-memory keyed store.

use std::collections::HashMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use domain::models::{RuleType, ValueType};

use super::{StoreError, StoreResult};

/// Keyed store of rule types by id.
#[derive(Default)]
pub struct RuleTypeRepository {
    rules: RwLock<HashMap<i64, RuleType>>,
}

impl RuleTypeRepository {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> StoreResult<RwLockReadGuard<'_, HashMap<i64, RuleType>>> {
        self.rules.read().map_err(|_| StoreError::LockPoisoned)
    }

    fn write(&self) -> StoreResult<RwLockWriteGuard<'_, HashMap<i64, RuleType>>> {
        self.rules.write().map_err(|_| StoreError::LockPoisoned)
    }

    /// Stores a new rule type, assigning the next id.
    ///
    /// The next id is the maximum existing id plus one; deleted ids are never
    /// reused. Assignment happens under the write lock, atomically with the
    /// insert.
    pub fn insert(&self, name: String, value_type: ValueType) -> StoreResult<RuleType> {
        let mut rules = self.write()?;
        let id = rules.keys().max().copied().unwrap_or(0) + 1;
        let rule = RuleType {
            id,
            name,
            value_type,
        };
        rules.insert(id, rule.clone());
        Ok(rule)
    }

    pub fn find_by_id(&self, id: i64) -> StoreResult<Option<RuleType>> {
        Ok(self.read()?.get(&id).cloned())
    }

    /// All rule types, ordered by id.
    pub fn find_all(&self) -> StoreResult<Vec<RuleType>> {
        let rules = self.read()?;
        let mut all: Vec<RuleType> = rules.values().cloned().collect();
        all.sort_by_key(|r| r.id);
        Ok(all)
    }

    /// Case-insensitive lookup by name.
    pub fn find_by_name(&self, name: &str) -> StoreResult<Option<RuleType>> {
        let rules = self.read()?;
        Ok(rules
            .values()
            .find(|r| r.name.eq_ignore_ascii_case(name))
            .cloned())
    }

    /// Overwrites name and value type in place; identity unchanged.
    ///
    /// Returns `None` when the id is absent.
    pub fn update(
        &self,
        id: i64,
        name: String,
        value_type: ValueType,
    ) -> StoreResult<Option<RuleType>> {
        let mut rules = self.write()?;
        Ok(rules.get_mut(&id).map(|rule| {
            rule.name = name;
            rule.value_type = value_type;
            rule.clone()
        }))
    }

    /// Removes a rule type, returning the prior record when present.
    pub fn delete(&self, id: i64) -> StoreResult<Option<RuleType>> {
        Ok(self.write()?.remove(&id))
    }
}
