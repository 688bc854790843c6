//! History reporter service.
//!
//! Builds change-history reports from the ledger: optional rule-name and time
//! filters, grouped per rule, each group ordered chronologically.

use std::collections::HashMap;
use std::sync::Arc;

use chrono::{DateTime, Utc};
use domain::models::{ChangeEntry, RuleHistory};
use domain::DomainError;
use persistence::{ConfigChangeRepository, RuleTypeRepository};

use crate::error::ApiError;

pub struct HistoryReporter {
    rules: Arc<RuleTypeRepository>,
    changes: Arc<ConfigChangeRepository>,
}

impl HistoryReporter {
    pub fn new(rules: Arc<RuleTypeRepository>, changes: Arc<ConfigChangeRepository>) -> Self {
        Self { rules, changes }
    }

    /// Builds the history report.
    ///
    /// Time bounds are strict: entries stamped exactly at `from` or `to` are
    /// excluded. Entries whose rule type has been deleted no longer resolve to
    /// a name and are skipped. Group order follows the first occurrence of
    /// each rule in the ledger.
    pub fn report(
        &self,
        rule_name: Option<&str>,
        from: Option<DateTime<Utc>>,
        to: Option<DateTime<Utc>>,
    ) -> Result<Vec<RuleHistory>, ApiError> {
        let mut groups: Vec<RuleHistory> = Vec::new();
        let mut index_by_rule: HashMap<i64, usize> = HashMap::new();

        for change in self.changes.find_all()? {
            let Some(rule) = self.rules.find_by_id(change.rule_type_id)? else {
                continue;
            };
            if let Some(name) = rule_name {
                if !rule.name.eq_ignore_ascii_case(name) {
                    continue;
                }
            }
            if let Some(from) = from {
                if change.changed_at <= from {
                    continue;
                }
            }
            if let Some(to) = to {
                if change.changed_at >= to {
                    continue;
                }
            }

            let index = *index_by_rule.entry(rule.id).or_insert_with(|| {
                groups.push(RuleHistory {
                    rule_type_id: rule.id,
                    rule_name: rule.name.clone(),
                    history: Vec::new(),
                });
                groups.len() - 1
            });
            groups[index].history.push(ChangeEntry::from(change));
        }

        if groups.is_empty() {
            return Err(DomainError::NoChangesFound.into());
        }

        for group in &mut groups {
            group
                .history
                .sort_by(|a, b| a.changed_at.cmp(&b.changed_at).then(a.id.cmp(&b.id)));
        }

        Ok(groups)
    }
}
