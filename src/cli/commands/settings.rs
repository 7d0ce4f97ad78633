//! Settings command implementation.
//!
//! The `groupcheck settings` command changes how groups are named and how
//! many there are. An omitted flag keeps its current value. With no flags
//! on an interactive terminal it prompts for both; otherwise it prints the
//! current settings.

use crate::cli::args::SettingsArgs;
use crate::error::Result;
use crate::persist::FileStorage;
use crate::state::{
    clamp_group_count, ChecklistStore, CountInput, GroupType, MAX_GROUP_COUNT, MIN_GROUP_COUNT,
};
use crate::ui::{Prompt, PromptOption, PromptType, UserInterface};

use super::dispatcher::{Command, CommandResult, StoreOptions};
use super::display::redraw;

/// The settings command implementation.
pub struct SettingsCommand {
    options: StoreOptions,
    args: SettingsArgs,
}

impl SettingsCommand {
    /// Create a new settings command.
    pub fn new(options: StoreOptions, args: SettingsArgs) -> Self {
        Self { options, args }
    }

    fn show_current(&self, ui: &mut dyn UserInterface, store: &ChecklistStore<FileStorage>) {
        let theme = ui.theme();
        let settings = store.settings();
        ui.message(&format!(
            "  {}   {} ({} … {})",
            theme.key.apply_to("Type:"),
            settings.group_type,
            store.group_name(1),
            store.group_name(settings.group_count),
        ));
        ui.message(&format!(
            "  {}  {}",
            theme.key.apply_to("Count:"),
            settings.group_count
        ));
        ui.message(&format!(
            "  {}  {}",
            theme.key.apply_to("State:"),
            self.options.state_path().display()
        ));
    }

    fn prompt_settings(
        &self,
        ui: &mut dyn UserInterface,
        store: &ChecklistStore<FileStorage>,
    ) -> Result<(GroupType, String)> {
        let current = store.settings();

        let type_prompt = Prompt {
            key: "group_type".to_string(),
            question: "Group naming".to_string(),
            prompt_type: PromptType::Select {
                options: vec![
                    PromptOption::new("Numbers (1, 2, 3 …)", GroupType::Numeric.as_str()),
                    PromptOption::new("Letters (A, B, C …)", GroupType::Alphabetic.as_str()),
                ],
            },
            default: Some(current.group_type.as_str().to_string()),
        };
        let group_type = ui.prompt(&type_prompt)?.parse::<GroupType>()?;

        let count_prompt = Prompt {
            key: "group_count".to_string(),
            question: format!("Number of groups ({}-{})", MIN_GROUP_COUNT, MAX_GROUP_COUNT),
            prompt_type: PromptType::Input,
            default: Some(current.group_count.to_string()),
        };
        let count = ui.prompt(&count_prompt)?;

        Ok((group_type, count))
    }
}

impl Command for SettingsCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.options.open();
        let current = store.settings();

        let (group_type, requested) = if self.args.group_type.is_none() && self.args.count.is_none()
        {
            if !ui.is_interactive() {
                self.show_current(ui, &store);
                return Ok(CommandResult::success());
            }

            let (group_type, raw_count) = self.prompt_settings(ui, &store)?;
            match raw_count.trim().parse::<i64>() {
                Ok(count) => (group_type, count),
                Err(_) => {
                    ui.warning(&format!(
                        "'{}' is not a number; settings unchanged",
                        raw_count.trim()
                    ));
                    return Ok(CommandResult::failure(1));
                }
            }
        } else {
            (
                self.args.group_type.unwrap_or(current.group_type),
                self.args
                    .count
                    .unwrap_or_else(|| i64::from(current.group_count)),
            )
        };

        let group_count = match clamp_group_count(requested) {
            CountInput::Accepted(count) => count,
            CountInput::Clamped(count) => {
                ui.warning(&format!("Maximum is {} groups", MAX_GROUP_COUNT));
                count
            }
            CountInput::TooSmall => {
                ui.warning(&format!(
                    "Need at least {} group; settings unchanged",
                    MIN_GROUP_COUNT
                ));
                return Ok(CommandResult::failure(1));
            }
        };

        store.update_settings(group_type, group_count);

        ui.success(&format!(
            "{} groups named {} … {}",
            group_count,
            store.group_name(1),
            store.group_name(group_count)
        ));
        redraw(ui, &store);
        Ok(CommandResult::success())
    }
}
