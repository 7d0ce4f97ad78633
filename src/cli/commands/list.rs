//! List command implementation.
//!
//! The `groupcheck list` command shows every group with its order, check
//! mark and note. It is also what runs when no subcommand is given.

use crate::cli::args::ListArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, StoreOptions};
use super::display::show_checklist;

/// The list command implementation.
pub struct ListCommand {
    options: StoreOptions,
    args: ListArgs,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(options: StoreOptions, args: ListArgs) -> Self {
        Self { options, args }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let store = self.options.open();

        if self.args.json {
            ui.message(&store.snapshot().to_json()?);
            return Ok(CommandResult::success());
        }

        show_checklist(ui, &store);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::ChecklistState;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn options(temp: &TempDir) -> StoreOptions {
        StoreOptions::with_default_suffix(temp.path().join("state.json"))
    }

    #[test]
    fn lists_default_groups() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = ListCommand::new(options(&temp), ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("1班"));
        assert!(ui.has_message("12班"));
        assert!(ui.has_message("0 of 12 groups checked"));
    }

    #[test]
    fn listing_does_not_write_state() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        ListCommand::new(options(&temp), ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(!temp.path().join("state.json").exists());
    }

    #[test]
    fn json_prints_snapshot() {
        let temp = TempDir::new().unwrap();
        let opts = options(&temp);
        let mut store = opts.open();
        store.toggle_check(2).unwrap();
        let mut ui = MockUI::new();

        ListCommand::new(opts, ListArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let printed = ChecklistState::from_json(&ui.messages()[0]).unwrap();
        assert_eq!(&printed, store.snapshot());
    }

    #[test]
    fn corrupt_state_lists_defaults() {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join("state.json"), "garbage").unwrap();
        let mut ui = MockUI::new();

        let result = ListCommand::new(options(&temp), ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert!(ui.has_message("12班"));
    }
}
