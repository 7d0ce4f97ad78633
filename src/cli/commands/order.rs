//! Order command implementation.
//!
//! The `groupcheck order` command lists checked groups earliest first.

use serde_json::json;

use crate::cli::args::OrderArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, StoreOptions};
use super::display::FIRST_MARKER;

/// The order command implementation.
pub struct OrderCommand {
    options: StoreOptions,
    args: OrderArgs,
}

impl OrderCommand {
    /// Create a new order command.
    pub fn new(options: StoreOptions, args: OrderArgs) -> Self {
        Self { options, args }
    }
}

impl Command for OrderCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.options.open();
        let ranked = store.checked_in_order();

        if self.args.json {
            let entries: Vec<_> = ranked
                .iter()
                .enumerate()
                .map(|(position, &id)| {
                    json!({
                        "order": position + 1,
                        "id": id,
                        "name": store.group_name(id),
                        "note": store.record(id).map(|r| r.note.as_str()).unwrap_or_default(),
                    })
                })
                .collect();
            let output = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.message(&output);
            return Ok(CommandResult::success());
        }

        if ranked.is_empty() {
            ui.message("No groups have reported yet.");
            return Ok(CommandResult::success());
        }

        let theme = ui.theme();
        for (position, &id) in ranked.iter().enumerate() {
            let marker = if position == 0 {
                theme.first.apply_to(FIRST_MARKER).to_string()
            } else {
                " ".to_string()
            };
            let note = store
                .record(id)
                .map(|r| r.note.as_str())
                .filter(|n| !n.is_empty())
                .map(|n| format!("  {}", theme.dim.apply_to(n)))
                .unwrap_or_default();
            ui.message(&format!(
                "{} {:>2}. {}{}",
                marker,
                position + 1,
                store.group_name(id),
                note
            ));
        }

        let waiting = (store.settings().group_count as usize).saturating_sub(ranked.len());
        if waiting > 0 {
            ui.message(&format!(
                "  {}",
                theme.dim.apply_to(format!("{} still to report", waiting))
            ));
        }

        Ok(CommandResult::success())
    }
}
