//! Change recorder service.
//!
//! Orchestrates recording a configuration change: reference check against the
//! catalog, duplicate suppression, value validation, server timestamping,
//! ledger insert, and the best-effort critical-change notification.

use std::sync::Arc;

use chrono::Utc;
use domain::models::{ConfigChange, RecordChangeRequest};
use domain::services::{check_value, Notifier};
use domain::DomainError;
use persistence::{ConfigChangeRepository, NewConfigChange, RuleTypeRepository};

use crate::error::ApiError;

pub struct ChangeRecorder {
    rules: Arc<RuleTypeRepository>,
    changes: Arc<ConfigChangeRepository>,
    notifier: Arc<dyn Notifier>,
}

impl ChangeRecorder {
    pub fn new(
        rules: Arc<RuleTypeRepository>,
        changes: Arc<ConfigChangeRepository>,
        notifier: Arc<dyn Notifier>,
    ) -> Self {
        Self {
            rules,
            changes,
            notifier,
        }
    }

    /// Records a configuration change as a new ledger entry.
    ///
    /// A change is rejected only when an entry with the same
    /// `(currentValue, critical)` pair already exists for the rule; any other
    /// value appends to the rule's history.
    pub async fn record(&self, request: RecordChangeRequest) -> Result<ConfigChange, ApiError> {
        let rule = self
            .rules
            .find_by_id(request.rule_type_id)?
            .ok_or_else(|| {
                ApiError::from(DomainError::rule_type_not_found(request.rule_type_id))
            })?;

        if self
            .changes
            .has_duplicate(rule.id, &request.current_value, request.critical)?
        {
            return Err(DomainError::DuplicateChange.into());
        }

        check_value(rule.value_type, &request.current_value).map_err(|reason| {
            ApiError::from(DomainError::InvalidValue {
                rule: rule.name.clone(),
                reason,
            })
        })?;

        let change = self.changes.insert(NewConfigChange {
            rule_type_id: rule.id,
            current_value: request.current_value,
            changed_by: request.changed_by,
            changed_at: Utc::now(),
            critical: request.critical,
        })?;

        tracing::info!(
            change_id = change.id,
            rule_id = rule.id,
            critical = change.critical,
            "Recorded configuration change"
        );

        if change.critical {
            let message = format!(
                "Critical configuration change detected: rule '{}' set to '{}' by {}",
                rule.name, change.current_value, change.changed_by
            );
            // Delivery failures never roll back the recorded change.
            if let Err(err) = self.notifier.notify(&message).await {
                tracing::warn!(change_id = change.id, "Failed to deliver notification: {}", err);
            }
        }

        Ok(change)
    }

    pub fn get(&self, id: i64) -> Result<ConfigChange, ApiError> {
        self.changes
            .find_by_id(id)?
            .ok_or_else(|| DomainError::config_change_not_found(id).into())
    }

    /// Deletes a ledger entry, returning the prior record.
    pub fn delete(&self, id: i64) -> Result<ConfigChange, ApiError> {
        let removed = self
            .changes
            .delete(id)?
            .ok_or_else(|| ApiError::from(DomainError::config_change_not_found(id)))?;
        tracing::info!(change_id = removed.id, "Deleted configuration change");
        Ok(removed)
    }
}
