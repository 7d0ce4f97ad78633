//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::state::GroupType;

/// groupcheck - Track which groups have reported in, and in what order.
#[derive(Debug, Parser)]
#[command(name = "groupcheck")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides ~/.groupcheck/config.yml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to the checklist state file
    #[arg(short, long, global = true, env = "GROUPCHECK_STATE")]
    pub state: Option<PathBuf>,

    /// Only print status lines, not the checklist
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Print nothing except errors
    #[arg(long, global = true, conflicts_with = "quiet")]
    pub silent: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Show the checklist (default if no command specified)
    List(ListArgs),

    /// Toggle the check on one or more groups
    Check(CheckArgs),

    /// Set the note on a group
    Note(NoteArgs),

    /// Uncheck every group (notes are kept)
    Clear,

    /// Show or change group naming and count
    Settings(SettingsArgs),

    /// Show checked groups in the order they reported
    Order(OrderArgs),

    /// Reset groups, notes and settings to defaults
    Reset,

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output the saved snapshot as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `check` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct CheckArgs {
    /// Group ids to toggle, applied in order
    #[arg(required = true, num_args = 1..)]
    pub ids: Vec<u32>,
}

/// Arguments for the `note` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct NoteArgs {
    /// Group id
    pub id: u32,

    /// Note text; pass "" to clear it
    pub text: String,
}

/// Arguments for the `settings` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct SettingsArgs {
    /// Group naming: number (1, 2, 3) or alphabet (A, B, C)
    #[arg(long = "type", value_name = "TYPE")]
    pub group_type: Option<GroupType>,

    /// Number of groups (1-30)
    #[arg(long, allow_negative_numbers = true)]
    pub count: Option<i64>,
}

/// Arguments for the `order` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct OrderArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
