//! Check command implementation.
//!
//! The `groupcheck check <ID>...` command toggles groups in the given order.

use crate::cli::args::CheckArgs;
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult, StoreOptions};
use super::display::redraw;

/// The check command implementation.
pub struct CheckCommand {
    options: StoreOptions,
    args: CheckArgs,
}

impl CheckCommand {
    /// Create a new check command.
    pub fn new(options: StoreOptions, args: CheckArgs) -> Self {
        Self { options, args }
    }
}

impl Command for CheckCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let mut store = self.options.open();

        // Reject the whole batch before touching anything.
        let unknown: Vec<String> = self
            .args
            .ids
            .iter()
            .filter(|id| store.record(**id).is_none())
            .map(|id| id.to_string())
            .collect();
        if !unknown.is_empty() {
            ui.error(&format!(
                "Unknown group(s): {} (groups are 1-{})",
                unknown.join(", "),
                store.settings().group_count
            ));
            return Ok(CommandResult::failure(1));
        }

        for &id in &self.args.ids {
            store.toggle_check(id)?;
            let name = store.group_name(id);
            match store.record(id).and_then(|r| r.order) {
                Some(order) => ui.success(&format!("Checked {} (#{})", name, order)),
                None => ui.success(&format!("Unchecked {}", name)),
            }
        }

        redraw(ui, &store);
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::{MockUI, OutputMode};
    use tempfile::TempDir;

    fn run(options: &StoreOptions, ids: &[u32], ui: &mut MockUI) -> CommandResult {
        CheckCommand::new(options.clone(), CheckArgs { ids: ids.to_vec() })
            .execute(ui)
            .unwrap()
    }

    #[test]
    fn checks_in_argument_order() {
        let temp = TempDir::new().unwrap();
        let options = StoreOptions::with_default_suffix(temp.path().join("state.json"));
        let mut ui = MockUI::new();

        let result = run(&options, &[3, 1], &mut ui);

        assert!(result.success);
        assert!(ui.has_success("Checked 3班 (#1)"));
        assert!(ui.has_success("Checked 1班 (#2)"));
        assert_eq!(options.open().checked_in_order(), vec![3, 1]);
    }

    #[test]
    fn second_toggle_unchecks() {
        let temp = TempDir::new().unwrap();
        let options = StoreOptions::with_default_suffix(temp.path().join("state.json"));
        let mut ui = MockUI::new();

        run(&options, &[5, 6], &mut ui);
        run(&options, &[5], &mut ui);

        assert!(ui.has_success("Unchecked 5班"));
        let store = options.open();
        assert_eq!(store.record(6).and_then(|r| r.order), Some(1));
        assert_eq!(store.check_order(), 1);
    }

    #[test]
    fn unknown_id_changes_nothing() {
        let temp = TempDir::new().unwrap();
        let options = StoreOptions::with_default_suffix(temp.path().join("state.json"));
        let mut ui = MockUI::new();

        let result = run(&options, &[2, 13], &mut ui);

        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("13"));
        assert!(!temp.path().join("state.json").exists());
    }

    #[test]
    fn redraws_in_normal_mode_only() {
        let temp = TempDir::new().unwrap();
        let options = StoreOptions::with_default_suffix(temp.path().join("state.json"));

        let mut normal = MockUI::new();
        run(&options, &[1], &mut normal);
        assert!(normal.has_message("★ 1"));

        let mut quiet = MockUI::with_mode(OutputMode::Quiet);
        run(&options, &[2], &mut quiet);
        assert!(quiet.messages().is_empty());
        assert!(quiet.has_success("Checked 2班 (#2)"));
    }
}
