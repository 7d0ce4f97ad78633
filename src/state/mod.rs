//! Checklist state management.
//!
//! This module owns the checklist data (group type, group count, per-group
//! check/order/note and the order counter) and every rule that mutates it.

pub mod naming;
pub mod settings;
pub mod snapshot;
pub mod store;

pub use naming::{alphabetic_label, group_name, DEFAULT_SUFFIX};
pub use settings::{
    clamp_group_count, CountInput, GroupType, Settings, DEFAULT_GROUP_COUNT, MAX_GROUP_COUNT,
    MIN_GROUP_COUNT,
};
pub use snapshot::{ChecklistState, GroupRecord};
pub use store::ChecklistStore;
