//! Snapshot storage backends.
//!
//! The store never touches the filesystem directly; it reads and writes its
//! serialized snapshot through a [`SnapshotStorage`], so tests can swap in
//! [`MemoryStorage`] for the [`FileStorage`] the CLI uses.

pub mod file;
pub mod memory;

pub use file::FileStorage;
pub use memory::MemoryStorage;

use crate::error::Result;

/// A single named slot holding the serialized snapshot.
pub trait SnapshotStorage {
    /// Read the stored snapshot, or `None` if nothing has been saved yet.
    fn read(&self) -> Result<Option<String>>;

    /// Replace the stored snapshot.
    fn write(&mut self, contents: &str) -> Result<()>;
}
