//! Clear command implementation.
//!
//! The `groupcheck clear` command unchecks every group and keeps notes.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, StoreOptions};
use super::display::redraw;

/// The clear command implementation.
pub struct ClearCommand {
    options: StoreOptions,
}

impl ClearCommand {
    /// Create a new clear command.
    pub fn new(options: StoreOptions) -> Self {
        Self { options }
    }
}

impl Command for ClearCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.options.open();
        let cleared = store.check_order();

        store.clear_all();

        ui.success(&format!("Cleared {} check(s)", cleared));
        redraw(ui, &store);
        Ok(CommandResult::success())
    }
}
