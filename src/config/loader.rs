//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::GroupCheckConfig;
use crate::error::{GroupCheckError, Result};
use crate::persist::FileStorage;

/// Default config location: `~/.groupcheck/config.yml`.
pub fn default_config_path() -> Option<PathBuf> {
    Some(dirs::home_dir()?.join(".groupcheck").join("config.yml"))
}

/// Load configuration.
///
/// An explicit `path` must exist. Without one, the default location is used
/// if present, otherwise built-in defaults apply.
pub fn load_config(path: Option<&Path>) -> Result<GroupCheckConfig> {
    match path {
        Some(path) => load_config_file(path),
        None => match default_config_path() {
            Some(default) if default.exists() => load_config_file(&default),
            _ => {
                tracing::debug!("No config file, using defaults");
                Ok(GroupCheckConfig::default())
            }
        },
    }
}

/// Load a single config file.
pub fn load_config_file(path: &Path) -> Result<GroupCheckConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            GroupCheckError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            GroupCheckError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into a config.
pub fn parse_config(content: &str, source_path: &Path) -> Result<GroupCheckConfig> {
    if content.trim().is_empty() {
        return Ok(GroupCheckConfig::default());
    }

    serde_yaml::from_str(content).map_err(|e| GroupCheckError::ConfigParseError {
        path: source_path.to_path_buf(),
        message: e.to_string(),
    })
}

/// Resolve the snapshot file: explicit override, then config, then default.
pub fn resolve_state_path(override_path: Option<&Path>, config: &GroupCheckConfig) -> PathBuf {
    override_path
        .map(Path::to_path_buf)
        .or_else(|| config.state_file.clone())
        .unwrap_or_else(FileStorage::default_path)
}
