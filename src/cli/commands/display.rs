//! Shared rendering of the checklist.
//!
//! Used by `list` and by every command that redraws after a change.

use crate::persist::SnapshotStorage;
use crate::state::{ChecklistStore, GroupRecord};
use crate::ui::{CheckTheme, Table, UserInterface};

/// Marker shown next to the first group that reported.
pub const FIRST_MARKER: &str = "★";

/// Order column text for a record.
pub fn order_cell(record: &GroupRecord, theme: &CheckTheme) -> String {
    match record.order {
        Some(1) => theme.first.apply_to(format!("{} 1", FIRST_MARKER)).to_string(),
        Some(order) => order.to_string(),
        None => String::new(),
    }
}

/// Check column text for a record.
pub fn check_cell(record: &GroupRecord, theme: &CheckTheme) -> String {
    if record.checked {
        theme.checked.apply_to("✓").to_string()
    } else {
        theme.dim.apply_to("·").to_string()
    }
}

/// Render every group, in id order, as a table.
pub fn render_checklist<S: SnapshotStorage>(
    store: &ChecklistStore<S>,
    theme: &CheckTheme,
) -> String {
    let mut table = Table::new(vec!["Order", "Group", "✓", "Note"]);

    for (id, record) in store.records() {
        let name = store.group_name(id);
        let name = if record.checked {
            theme.checked.apply_to(name).to_string()
        } else {
            name
        };
        table.add_row(vec![
            order_cell(record, theme),
            name,
            check_cell(record, theme),
            record.note.clone(),
        ]);
    }

    table.render()
}

/// `"3 of 12 groups checked"`.
pub fn summary_line<S: SnapshotStorage>(store: &ChecklistStore<S>) -> String {
    format!(
        "{} of {} groups checked",
        store.check_order(),
        store.settings().group_count
    )
}

/// Print the checklist table followed by the summary line.
pub fn show_checklist<S: SnapshotStorage>(ui: &mut dyn UserInterface, store: &ChecklistStore<S>) {
    let theme = ui.theme();
    ui.message(&render_checklist(store, &theme));
    ui.message(&format!("  {}", theme.dim.apply_to(summary_line(store))));
}

/// Redraw after a change, unless the output mode hides the listing.
pub fn redraw<S: SnapshotStorage>(ui: &mut dyn UserInterface, store: &ChecklistStore<S>) {
    if ui.output_mode().shows_listing() {
        show_checklist(ui, store);
    }
}
