//! Configuration loading.
//!
//! - Schema definitions in [`schema`]
//! - File discovery and loading in [`loader`]
//!
//! # Configuration File Location
//!
//! `~/.groupcheck/config.yml`, or any file passed with `--config`:
//!
//! ```yaml
//! suffix: " team"
//! state_file: /path/to/state.json
//! default_output: quiet
//! ```

pub mod loader;
pub mod schema;

pub use loader::{
    default_config_path, load_config, load_config_file, parse_config, resolve_state_path,
};
pub use schema::{GroupCheckConfig, OutputMode};
