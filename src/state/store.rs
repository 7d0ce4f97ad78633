//! The checklist store.
//!
//! [`ChecklistStore`] owns the canonical [`ChecklistState`] and every rule
//! that mutates it. Each successful mutation is followed by a full re-persist
//! through the injected [`SnapshotStorage`]. Persistence is best-effort: a
//! failed write is logged and the in-memory state stays authoritative.

use crate::error::{GroupCheckError, Result};
use crate::persist::SnapshotStorage;

use super::naming::{group_name, DEFAULT_SUFFIX};
use super::{ChecklistState, GroupRecord, GroupType, Settings};

/// Checklist state plus the storage it is persisted to.
#[derive(Debug)]
pub struct ChecklistStore<S: SnapshotStorage> {
    state: ChecklistState,
    storage: S,
    suffix: String,
}

impl<S: SnapshotStorage> ChecklistStore<S> {
    /// Create a store with default state, without reading `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            state: ChecklistState::default(),
            storage,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// Load the persisted snapshot from `storage`.
    ///
    /// A missing, unreadable or corrupt snapshot is logged and replaced by the
    /// default state; loading never fails.
    pub fn load(storage: S) -> Self {
        let state = match storage.read() {
            Ok(Some(raw)) => match ChecklistState::from_json(&raw) {
                Ok(state) => state,
                Err(e) => {
                    tracing::warn!("Discarding saved checklist: {}", e);
                    ChecklistState::default()
                }
            },
            Ok(None) => {
                tracing::debug!("No saved checklist, starting fresh");
                ChecklistState::default()
            }
            Err(e) => {
                tracing::warn!("Failed to read saved checklist: {}", e);
                ChecklistState::default()
            }
        };

        Self {
            state,
            storage,
            suffix: DEFAULT_SUFFIX.to_string(),
        }
    }

    /// Use `suffix` after every group label.
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Display name of group `id` under the current group type.
    pub fn group_name(&self, id: u32) -> String {
        group_name(self.state.group_type, id, &self.suffix)
    }

    /// Current settings.
    pub fn settings(&self) -> Settings {
        self.state.settings()
    }

    /// All records in id order.
    pub fn records(&self) -> impl Iterator<Item = (u32, &GroupRecord)> {
        self.state.checks.iter().map(|(id, record)| (*id, record))
    }

    /// Record for group `id`.
    pub fn record(&self, id: u32) -> Option<&GroupRecord> {
        self.state.checks.get(&id)
    }

    /// Number of currently checked groups.
    pub fn check_order(&self) -> u32 {
        self.state.check_order
    }

    /// The group that was checked first, if any.
    pub fn first_checked(&self) -> Option<u32> {
        self.records()
            .find(|(_, record)| record.order == Some(1))
            .map(|(id, _)| id)
    }

    /// Checked group ids, earliest check first.
    pub fn checked_in_order(&self) -> Vec<u32> {
        let mut checked: Vec<(u32, u32)> = self
            .records()
            .filter_map(|(id, record)| record.order.map(|order| (order, id)))
            .collect();
        checked.sort_unstable();
        checked.into_iter().map(|(_, id)| id).collect()
    }

    /// The full state as persisted.
    pub fn snapshot(&self) -> &ChecklistState {
        &self.state
    }

    /// The backing storage.
    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give up the store and return its storage.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Toggle the check on group `id`.
    ///
    /// Checking assigns the next order. Unchecking clears the group's order and
    /// moves every later-checked group up by one.
    pub fn toggle_check(&mut self, id: u32) -> Result<()> {
        let record = self
            .state
            .checks
            .get_mut(&id)
            .ok_or(GroupCheckError::UnknownGroup { id })?;

        if record.checked {
            record.checked = false;
            let old_order = record.order.take();

            if let Some(old_order) = old_order {
                for other in self.state.checks.values_mut() {
                    if let Some(order) = other.order.as_mut() {
                        if *order > old_order {
                            *order -= 1;
                        }
                    }
                }
            }

            self.state.check_order = self.state.check_order.saturating_sub(1);
            tracing::debug!("Unchecked group {}", id);
        } else {
            self.state.check_order += 1;
            record.checked = true;
            record.order = Some(self.state.check_order);
            tracing::debug!("Checked group {} at order {}", id, self.state.check_order);
        }

        self.persist();
        Ok(())
    }

    /// Uncheck every group. Notes are kept.
    pub fn clear_all(&mut self) {
        for record in self.state.checks.values_mut() {
            record.checked = false;
            record.order = None;
        }
        self.state.check_order = 0;

        self.persist();
    }

    /// Replace the note on group `id` verbatim.
    pub fn update_note(&mut self, id: u32, text: &str) -> Result<()> {
        let record = self
            .state
            .checks
            .get_mut(&id)
            .ok_or(GroupCheckError::UnknownGroup { id })?;
        record.note = text.to_string();

        self.persist();
        Ok(())
    }

    /// Apply a new group type and count together.
    ///
    /// Growing appends unchecked groups; shrinking drops the trailing groups
    /// and renumbers the surviving check orders. The count is not range
    /// checked here; see [`super::clamp_group_count`].
    pub fn update_settings(&mut self, group_type: GroupType, group_count: u32) {
        let old_count = self.state.group_count;
        self.state.group_type = group_type;
        self.state.group_count = group_count;

        if group_count > old_count {
            for id in old_count + 1..=group_count {
                self.state.checks.insert(id, GroupRecord::default());
            }
        } else if group_count < old_count {
            self.state.checks.retain(|id, _| *id <= group_count);
            self.recompact_order();
        }

        tracing::debug!(
            "Settings now {} x {} (was {} groups)",
            group_type,
            group_count,
            old_count
        );
        self.persist();
    }

    /// Throw away all groups, notes and settings and start from defaults.
    pub fn reset(&mut self) {
        self.state = ChecklistState::default();
        self.persist();
    }

    /// Persist the current state, returning any storage error.
    pub fn save(&mut self) -> Result<()> {
        let contents = self.state.to_json()?;
        self.storage.write(&contents)
    }

    /// Reassign orders `1..=k` to the surviving checked groups, keeping their
    /// relative order.
    fn recompact_order(&mut self) {
        let ranked = self.checked_in_order();

        for (position, id) in ranked.iter().enumerate() {
            if let Some(record) = self.state.checks.get_mut(id) {
                record.order = Some(position as u32 + 1);
            }
        }

        self.state.check_order = ranked.len() as u32;
    }

    fn persist(&mut self) {
        if let Err(e) = self.save() {
            tracing::warn!("Failed to save checklist: {}", e);
        }
    }
}


#[cfg(test)]
mod property_tests {
    use super::*;
    use crate::persist::MemoryStorage;
    use proptest::prelude::*;

    fn assert_orders_contiguous(store: &ChecklistStore<MemoryStorage>) {
        let mut orders: Vec<u32> = store.records().filter_map(|(_, r)| r.order).collect();
        orders.sort_unstable();
        let expected: Vec<u32> = (1..=store.check_order()).collect();
        assert_eq!(orders, expected);

        let checked = store.records().filter(|(_, r)| r.checked).count() as u32;
        assert_eq!(checked, store.check_order());
    }

    #[derive(Debug, Clone)]
    enum Op {
        Toggle(u32),
        Note(u32, String),
        Settings(GroupType, u32),
        Clear,
    }

    fn op_strategy() -> impl Strategy<Value = Op> {
        let group_type = prop_oneof![Just(GroupType::Numeric), Just(GroupType::Alphabetic)];
        prop_oneof![
            4 => (1u32..=30).prop_map(Op::Toggle),
            2 => (1u32..=30, "\\PC{0,12}").prop_map(|(id, text)| Op::Note(id, text)),
            1 => (group_type, 1u32..=30).prop_map(|(t, n)| Op::Settings(t, n)),
            1 => Just(Op::Clear),
        ]
    }

    /// Ids past the current count are rejected by the store and leave it unchanged.
    fn apply(store: &mut ChecklistStore<MemoryStorage>, op: Op) {
        match op {
            Op::Toggle(id) => {
                let _ = store.toggle_check(id);
            }
            Op::Note(id, text) => {
                let _ = store.update_note(id, &text);
            }
            Op::Settings(group_type, count) => store.update_settings(group_type, count),
            Op::Clear => store.clear_all(),
        }
    }

    proptest! {
        #[test]
        fn orders_stay_contiguous(toggles in prop::collection::vec(1u32..=12, 0..60)) {
            let mut store = ChecklistStore::new(MemoryStorage::new());
            for id in toggles {
                let was_checked = store.record(id).map(|r| r.checked).unwrap_or(false);
                store.toggle_check(id).unwrap();
                if !was_checked {
                    prop_assert_eq!(store.record(id).and_then(|r| r.order), Some(store.check_order()));
                }
                assert_orders_contiguous(&store);
            }
        }

        #[test]
        fn unchecking_shifts_later_orders_by_one(
            toggles in prop::collection::vec(1u32..=12, 1..40),
            pick in any::<prop::sample::Index>(),
        ) {
            let mut store = ChecklistStore::new(MemoryStorage::new());
            for id in &toggles {
                store.toggle_check(*id).unwrap();
            }

            let ranked = store.checked_in_order();
            if !ranked.is_empty() {
                let target = ranked[pick.index(ranked.len())];
                let before: Vec<(u32, Option<u32>)> =
                    store.records().map(|(id, r)| (id, r.order)).collect();
                let removed = store.record(target).and_then(|r| r.order).unwrap_or(0);
                let count = store.check_order();

                store.toggle_check(target).unwrap();

                prop_assert_eq!(store.check_order(), count - 1);
                for (id, order) in before {
                    let now = store.record(id).and_then(|r| r.order);
                    match order {
                        Some(o) if id == target => prop_assert_eq!(now, None, "order {} cleared", o),
                        Some(o) if o > removed => prop_assert_eq!(now, Some(o - 1)),
                        other => prop_assert_eq!(now, other),
                    }
                }
            }
        }

        #[test]
        fn any_reachable_state_survives_reload(ops in prop::collection::vec(op_strategy(), 0..50)) {
            let mut store = ChecklistStore::new(MemoryStorage::new());
            for op in ops {
                apply(&mut store, op);
            }
            prop_assert!(store.snapshot().validate().is_ok());
            let expected = store.snapshot().clone();

            store.save().unwrap();
            let reloaded = ChecklistStore::load(store.into_storage());

            prop_assert_eq!(reloaded.snapshot(), &expected);
        }

        #[test]
        fn resize_keeps_invariants(
            toggles in prop::collection::vec(1u32..=30, 0..40),
            count in 1u32..=30,
        ) {
            let mut store = ChecklistStore::new(MemoryStorage::new());
            store.update_settings(GroupType::Numeric, 30);
            for id in toggles {
                store.toggle_check(id).unwrap();
            }

            store.update_settings(GroupType::Alphabetic, count);

            prop_assert_eq!(store.records().count() as u32, count);
            prop_assert!(store.snapshot().validate().is_ok());
            assert_orders_contiguous(&store);
        }
    }
}
