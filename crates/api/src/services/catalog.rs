//! Rule catalog service.
//!
//! Owns the business rules around rule-type registration: value types must
//! come from the closed enumeration, and names are unique case-insensitively.

use std::sync::Arc;

use domain::models::{RuleType, ValueType};
use domain::DomainError;
use persistence::RuleTypeRepository;

use crate::error::ApiError;

pub struct CatalogService {
    rules: Arc<RuleTypeRepository>,
}

impl CatalogService {
    pub fn new(rules: Arc<RuleTypeRepository>) -> Self {
        Self { rules }
    }

    /// Registers a new rule type.
    pub fn register(&self, name: String, value_type: &str) -> Result<RuleType, ApiError> {
        let value_type: ValueType = value_type.parse()?;

        if self.rules.find_by_name(&name)?.is_some() {
            return Err(DomainError::DuplicateName(name).into());
        }

        let rule = self.rules.insert(name, value_type)?;
        tracing::info!(rule_id = rule.id, name = %rule.name, "Registered rule type");
        Ok(rule)
    }

    /// Lists all rule types. An empty catalog is an error, not an empty list.
    pub fn list(&self) -> Result<Vec<RuleType>, ApiError> {
        let rules = self.rules.find_all()?;
        if rules.is_empty() {
            return Err(DomainError::EmptyCatalog.into());
        }
        Ok(rules)
    }

    pub fn get(&self, id: i64) -> Result<RuleType, ApiError> {
        self.rules
            .find_by_id(id)?
            .ok_or_else(|| DomainError::rule_type_not_found(id).into())
    }

    /// Updates name and value type in place; identity unchanged.
    ///
    /// When the name changes, the new name must not collide with a different
    /// existing rule.
    pub fn update(&self, id: i64, name: String, value_type: &str) -> Result<RuleType, ApiError> {
        let value_type: ValueType = value_type.parse()?;

        let existing = self
            .rules
            .find_by_id(id)?
            .ok_or_else(|| ApiError::from(DomainError::rule_type_not_found(id)))?;

        if !existing.name.eq_ignore_ascii_case(&name)
            && self.rules.find_by_name(&name)?.is_some()
        {
            return Err(DomainError::DuplicateName(name).into());
        }

        let updated = self
            .rules
            .update(id, name, value_type)?
            .ok_or_else(|| ApiError::from(DomainError::rule_type_not_found(id)))?;
        tracing::info!(rule_id = updated.id, name = %updated.name, "Updated rule type");
        Ok(updated)
    }

    /// Deletes a rule type, returning the prior record.
    ///
    /// Existing changes referencing the rule are left in the ledger.
    pub fn delete(&self, id: i64) -> Result<RuleType, ApiError> {
        let removed = self
            .rules
            .delete(id)?
            .ok_or_else(|| ApiError::from(DomainError::rule_type_not_found(id)))?;
        tracing::info!(rule_id = removed.id, name = %removed.name, "Deleted rule type");
        Ok(removed)
    }
}
