//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`StoreOptions`] for opening the checklist store
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::{Path, PathBuf};

use crate::cli::args::{Cli, Commands, ListArgs};
use crate::error::Result;
use crate::persist::FileStorage;
use crate::state::{ChecklistStore, DEFAULT_SUFFIX};
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Where the checklist lives and how its groups are labelled.
#[derive(Debug, Clone)]
pub struct StoreOptions {
    state_path: PathBuf,
    suffix: String,
}

impl StoreOptions {
    pub fn new(state_path: impl Into<PathBuf>, suffix: impl Into<String>) -> Self {
        Self {
            state_path: state_path.into(),
            suffix: suffix.into(),
        }
    }

    /// Options with the default suffix, for tests and callers without config.
    pub fn with_default_suffix(state_path: impl Into<PathBuf>) -> Self {
        Self::new(state_path, DEFAULT_SUFFIX)
    }

    /// Get the state file path.
    pub fn state_path(&self) -> &Path {
        &self.state_path
    }

    /// Load the store from the state file.
    pub fn open(&self) -> ChecklistStore<FileStorage> {
        ChecklistStore::load(FileStorage::new(&self.state_path)).with_suffix(self.suffix.clone())
    }
}

/// Dispatches CLI commands to their implementations.
pub struct CommandDispatcher {
    options: StoreOptions,
}

impl CommandDispatcher {
    /// Create a new dispatcher for the given store.
    pub fn new(options: StoreOptions) -> Self {
        Self { options }
    }

    /// Dispatch and execute a command.
    pub fn dispatch(&self, cli: &Cli, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let options = self.options.clone();
        match &cli.command {
            Some(Commands::List(args)) => {
                super::list::ListCommand::new(options, args.clone()).execute(ui)
            }
            Some(Commands::Check(args)) => {
                super::check::CheckCommand::new(options, args.clone()).execute(ui)
            }
            Some(Commands::Note(args)) => {
                super::note::NoteCommand::new(options, args.clone()).execute(ui)
            }
            Some(Commands::Clear) => super::clear::ClearCommand::new(options).execute(ui),
            Some(Commands::Settings(args)) => {
                super::settings::SettingsCommand::new(options, args.clone()).execute(ui)
            }
            Some(Commands::Order(args)) => {
                super::order::OrderCommand::new(options, args.clone()).execute(ui)
            }
            Some(Commands::Reset) => super::reset::ResetCommand::new(options).execute(ui),
            Some(Commands::Completions(args)) => {
                super::completions::CompletionsCommand::new(args.clone()).execute(ui)
            }
            None => super::list::ListCommand::new(options, ListArgs::default()).execute(ui),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn command_result_success() {
        let result = CommandResult::success();
        assert!(result.success);
        assert_eq!(result.exit_code, 0);
    }

    #[test]
    fn command_result_failure() {
        let result = CommandResult::failure(1);
        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
    }

    #[test]
    fn open_missing_state_gives_defaults() {
        let temp = TempDir::new().unwrap();
        let options = StoreOptions::with_default_suffix(temp.path().join("state.json"));

        let store = options.open();

        assert_eq!(store.settings().group_count, 12);
        assert_eq!(store.group_name(1), "1班");
    }

    #[test]
    fn no_subcommand_lists() {
        let temp = TempDir::new().unwrap();
        let dispatcher =
            CommandDispatcher::new(StoreOptions::with_default_suffix(temp.path().join("s.json")));
        let cli = Cli::parse_from(["groupcheck"]);
        let mut ui = MockUI::new();

        let result = dispatcher.dispatch(&cli, &mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("12班"));
    }

    #[test]
    fn dispatches_check_then_persists() {
        let temp = TempDir::new().unwrap();
        let options = StoreOptions::with_default_suffix(temp.path().join("s.json"));
        let dispatcher = CommandDispatcher::new(options.clone());
        let mut ui = MockUI::new();

        dispatcher
            .dispatch(&Cli::parse_from(["groupcheck", "check", "4"]), &mut ui)
            .unwrap();

        assert_eq!(options.open().first_checked(), Some(4));
    }
}
