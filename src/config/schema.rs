//! Configuration schema for `~/.groupcheck/config.yml`.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use crate::state::DEFAULT_SUFFIX;

/// Root configuration structure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GroupCheckConfig {
    /// Label appended to every group name (`1班`, `A班`).
    pub suffix: String,

    /// Where the checklist snapshot is stored.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state_file: Option<PathBuf>,

    /// Default output mode: normal, quiet, silent
    pub default_output: OutputMode,
}

impl Default for GroupCheckConfig {
    fn default() -> Self {
        Self {
            suffix: DEFAULT_SUFFIX.to_string(),
            state_file: None,
            default_output: OutputMode::Normal,
        }
    }
}

/// Output verbosity as written in the config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputMode {
    #[default]
    Normal,
    Quiet,
    Silent,
}
