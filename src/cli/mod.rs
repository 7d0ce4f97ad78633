//! Command-line interface for groupcheck.
//!
//! # Architecture
//!
//! - [`args`] - Argument definitions using clap derive macros
//! - [`commands`] - Command implementations

pub mod args;
pub mod commands;

pub use args::{
    CheckArgs, Cli, Commands, CompletionsArgs, ListArgs, NoteArgs, OrderArgs, SettingsArgs,
};
pub use commands::{Command, CommandDispatcher, CommandResult, StoreOptions};
