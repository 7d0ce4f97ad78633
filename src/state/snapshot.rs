//! The persisted checklist snapshot.
//!
//! [`ChecklistState`] is both the in-memory state of the store and the exact
//! JSON document written to storage:
//!
//! ```json
//! {
//!   "groupType": "number",
//!   "groupCount": 3,
//!   "checks": {
//!     "1": { "checked": true, "order": 1, "note": "5 people" },
//!     "2": { "checked": false, "order": null, "note": "" },
//!     "3": { "checked": false, "order": null, "note": "" }
//!   },
//!   "checkOrder": 1
//! }
//! ```

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::{GroupCheckError, Result};

use super::{GroupType, Settings};

/// Check status of a single group.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct GroupRecord {
    /// Whether the group has reported in.
    pub checked: bool,

    /// 1-based position in check order; `Some` iff `checked`.
    pub order: Option<u32>,

    /// Free-text note.
    pub note: String,
}

/// Full checklist state, serialized verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ChecklistState {
    pub group_type: GroupType,
    pub group_count: u32,
    pub checks: BTreeMap<u32, GroupRecord>,
    pub check_order: u32,
}

impl Default for ChecklistState {
    fn default() -> Self {
        Self::with_settings(Settings::default())
    }
}

impl ChecklistState {
    /// Fresh state for `settings`: every group unchecked with an empty note.
    pub fn with_settings(settings: Settings) -> Self {
        let checks = (1..=settings.group_count)
            .map(|id| (id, GroupRecord::default()))
            .collect();

        Self {
            group_type: settings.group_type,
            group_count: settings.group_count,
            checks,
            check_order: 0,
        }
    }

    /// Current settings pair.
    pub fn settings(&self) -> Settings {
        Settings {
            group_type: self.group_type,
            group_count: self.group_count,
        }
    }

    /// Decode and validate a persisted snapshot.
    pub fn from_json(raw: &str) -> Result<Self> {
        let state: Self =
            serde_json::from_str(raw).map_err(|e| GroupCheckError::SnapshotParse {
                message: e.to_string(),
            })?;
        state.validate()?;
        Ok(state)
    }

    /// Encode for storage.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self).map_err(|e| GroupCheckError::SnapshotParse {
            message: format!("Failed to serialize snapshot: {}", e),
        })
    }

    /// Check the structural and ordering invariants.
    ///
    /// Ids must be exactly `1..=group_count`, `order` must be present exactly
    /// on checked groups, and the orders must be `1..=check_order`.
    pub fn validate(&self) -> Result<()> {
        if !self.checks.keys().copied().eq(1..=self.group_count) {
            return Err(corrupt(format!(
                "group ids do not match groupCount {}",
                self.group_count
            )));
        }

        let mut orders = Vec::with_capacity(self.checks.len());
        for (id, record) in &self.checks {
            match (record.checked, record.order) {
                (true, Some(order)) => orders.push(order),
                (false, None) => {}
                _ => {
                    return Err(corrupt(format!(
                        "group {} has checked={} with order {:?}",
                        id, record.checked, record.order
                    )))
                }
            }
        }

        orders.sort_unstable();
        if !orders.iter().copied().eq(1..=self.check_order) {
            return Err(corrupt(format!(
                "check orders {:?} do not form 1..={}",
                orders, self.check_order
            )));
        }

        Ok(())
    }
}

fn corrupt(message: String) -> GroupCheckError {
    GroupCheckError::SnapshotParse { message }
}
