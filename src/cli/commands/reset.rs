//! Reset command implementation.
//!
//! The `groupcheck reset` command discards groups, notes and settings.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, StoreOptions};
use super::display::redraw;

/// The reset command implementation.
pub struct ResetCommand {
    options: StoreOptions,
}

impl ResetCommand {
    /// Create a new reset command.
    pub fn new(options: StoreOptions) -> Self {
        Self { options }
    }
}

impl Command for ResetCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.options.open();
        store.reset();

        let settings = store.settings();
        ui.success(&format!(
            "Reset to {} {} groups",
            settings.group_count, settings.group_type
        ));
        redraw(ui, &store);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::{ChecklistState, GroupType};
    use crate::ui::MockUI;
    use tempfile::TempDir;

    #[test]
    fn reset_restores_defaults_on_disk() {
        let temp = TempDir::new().unwrap();
        let options = StoreOptions::with_default_suffix(temp.path().join("state.json"));
        let mut store = options.open();
        store.update_settings(GroupType::Alphabetic, 4);
        store.toggle_check(4).unwrap();
        store.update_note(1, "x").unwrap();
        let mut ui = MockUI::new();

        let result = ResetCommand::new(options.clone()).execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_success("Reset to 12 number groups"));
        assert_eq!(options.open().snapshot(), &ChecklistState::default());
    }
}
