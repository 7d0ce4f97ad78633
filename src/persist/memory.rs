//! In-memory snapshot storage for tests.

use crate::error::{GroupCheckError, Result};

use super::SnapshotStorage;

/// Holds the snapshot in memory and counts writes.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    contents: Option<String>,
    writes: usize,
    fail_writes: bool,
}

impl MemoryStorage {
    /// Empty storage: reads return `None`.
    pub fn new() -> Self {
        Self::default()
    }

    /// Storage pre-seeded with a snapshot.
    pub fn with_contents(contents: impl Into<String>) -> Self {
        Self {
            contents: Some(contents.into()),
            ..Self::default()
        }
    }

    /// Make every subsequent write fail.
    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// The currently stored snapshot.
    pub fn contents(&self) -> Option<&str> {
        self.contents.as_deref()
    }

    /// Number of successful writes.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>> {
        Ok(self.contents.clone())
    }

    fn write(&mut self, contents: &str) -> Result<()> {
        if self.fail_writes {
            return Err(GroupCheckError::Io(std::io::Error::other(
                "memory storage is read-only",
            )));
        }
        self.contents = Some(contents.to_string());
        self.writes += 1;
        Ok(())
    }
}
