//! Note command implementation.
//!
//! The `groupcheck note <ID> <TEXT>` command replaces a group's note.

use crate::cli::args::NoteArgs;
use crate::error::{GroupCheckError, Result};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, StoreOptions};
use super::display::redraw;

/// The note command implementation.
pub struct NoteCommand {
    options: StoreOptions,
    args: NoteArgs,
}

impl NoteCommand {
    /// Create a new note command.
    pub fn new(options: StoreOptions, args: NoteArgs) -> Self {
        Self { options, args }
    }
}

impl Command for NoteCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.options.open();

        match store.update_note(self.args.id, &self.args.text) {
            Ok(()) => {}
            Err(GroupCheckError::UnknownGroup { id }) => {
                ui.error(&format!(
                    "Unknown group: {} (groups are 1-{})",
                    id,
                    store.settings().group_count
                ));
                return Ok(CommandResult::failure(1));
            }
            Err(e) => return Err(e),
        }

        let name = store.group_name(self.args.id);
        if self.args.text.is_empty() {
            ui.success(&format!("Cleared note on {}", name));
        } else {
            ui.success(&format!("Noted {}", name));
        }

        redraw(ui, &store);
        Ok(CommandResult::success())
    }
}
