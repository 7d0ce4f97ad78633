//! CLI command implementations.
//!
//! Each command implements the [`Command`] trait and opens the checklist
//! store through [`StoreOptions`]. Mutating commands follow the same shape:
//! open, mutate (the store persists), report, redraw.

pub mod check;
pub mod clear;
pub mod completions;
pub mod dispatcher;
pub mod display;
pub mod list;
pub mod note;
pub mod order;
pub mod reset;
pub mod settings;

pub use dispatcher::{Command, CommandDispatcher, CommandResult, StoreOptions};
