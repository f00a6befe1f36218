use std::cell::{Cell, RefCell};
use std::rc::Rc;

use crate::store::{SnapshotStorage, StoreError};

/// In-process storage. Clones share the same slot, so a test can hand one
/// clone to a `Board` and inspect what it wrote through another.
#[derive(Clone, Debug, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
    reject_writes: Rc<Cell<bool>>,
    writes: Rc<Cell<usize>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_snapshot(snapshot: &str) -> Self {
        let storage = Self::default();
        *storage.slot.borrow_mut() = Some(snapshot.to_string());
        storage
    }

    pub fn snapshot(&self) -> Option<String> {
        self.slot.borrow().clone()
    }

    pub fn set_reject_writes(&self, reject: bool) {
        self.reject_writes.set(reject);
    }

    /// Successful writes so far.
    pub fn write_count(&self) -> usize {
        self.writes.get()
    }
}

impl SnapshotStorage for MemoryStorage {
    fn read(&self) -> Result<Option<String>, StoreError> {
        Ok(self.snapshot())
    }

    fn write(&self, snapshot: &str) -> Result<(), StoreError> {
        if self.reject_writes.get() {
            return Err(StoreError::Rejected);
        }
        *self.slot.borrow_mut() = Some(snapshot.to_string());
        self.writes.set(self.writes.get() + 1);
        Ok(())
    }
}
