pub mod json_store;
pub mod memory;

use std::io;
use std::path::PathBuf;

use thiserror::Error;

pub use json_store::JsonFileStorage;
pub use memory::MemoryStorage;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to read {}: {source}", path.display())]
    Read { path: PathBuf, source: io::Error },
    #[error("failed to write {}: {source}", path.display())]
    Write { path: PathBuf, source: io::Error },
    #[error("storage rejected write")]
    Rejected,
}

/// A single durable slot holding the serialized board snapshot.
pub trait SnapshotStorage {
    /// `Ok(None)` when nothing has been stored yet.
    fn read(&self) -> Result<Option<String>, StoreError>;

    /// Replaces whatever was stored before.
    fn write(&self, snapshot: &str) -> Result<(), StoreError>;
}
