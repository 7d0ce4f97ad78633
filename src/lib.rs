//! groupcheck - Track which groups have reported in, and in what order.
//!
//! groupcheck keeps a small checklist of numbered or lettered groups
//! (`1班`, `2班`, ... or `A班`, `B班`, ...). Checking a group records the
//! order it reported in, and every change is saved to a JSON snapshot so the
//! checklist survives restarts.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - User configuration loading
//! - [`error`] - Error types and result aliases
//! - [`persist`] - Snapshot storage backends
//! - [`state`] - Checklist state, naming and the store that mutates it
//! - [`ui`] - Terminal output, tables and prompts
//!
//! # Example
//!
//! ```
//! use groupcheck::persist::MemoryStorage;
//! use groupcheck::state::{ChecklistStore, GroupType};
//!
//! let mut store = ChecklistStore::new(MemoryStorage::new());
//! store.update_settings(GroupType::Alphabetic, 3);
//! store.toggle_check(3).unwrap();
//! store.toggle_check(1).unwrap();
//!
//! assert_eq!(store.group_name(3), "C班");
//! assert_eq!(store.checked_in_order(), vec![3, 1]);
//! assert_eq!(store.first_checked(), Some(3));
//! ```

pub mod cli;
pub mod config;
pub mod error;
pub mod persist;
pub mod state;
pub mod ui;

pub use error::{GroupCheckError, Result};
