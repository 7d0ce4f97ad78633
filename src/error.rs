//! Error types for groupcheck operations.
//!
//! This module defines [`GroupCheckError`], the primary error type used
//! throughout the crate, and a [`Result`] type alias for convenience.
//!
//! # Error Handling Strategy
//!
//! - Use `GroupCheckError` for domain errors the CLI reports to the user
//! - Use `anyhow::Error` (via `GroupCheckError::Other`) for storage I/O with context
//! - Persistence failures inside the store are logged, never returned

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for groupcheck operations.
#[derive(Debug, Error)]
pub enum GroupCheckError {
    /// A mutation referenced a group id outside `1..=group_count`.
    #[error("Unknown group: {id}")]
    UnknownGroup { id: u32 },

    /// The persisted snapshot could not be decoded or is inconsistent.
    #[error("Corrupt snapshot: {message}")]
    SnapshotParse { message: String },

    /// Configuration file passed with `--config` does not exist.
    #[error("Configuration not found: {path}")]
    ConfigNotFound { path: PathBuf },

    /// Failed to parse the configuration file.
    #[error("Failed to parse config at {path}: {message}")]
    ConfigParseError { path: PathBuf, message: String },

    /// A group type string that is neither `number` nor `alphabet`.
    #[error("Invalid group type '{value}' (expected 'number' or 'alphabet')")]
    InvalidGroupType { value: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for groupcheck operations.
pub type Result<T> = std::result::Result<T, GroupCheckError>;
