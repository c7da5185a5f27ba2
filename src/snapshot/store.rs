//! Holder of the current network snapshot.
//!
//! Readers get an `Arc` to a complete snapshot; a replacement swaps the whole
//! value under the write lock, so a reader never observes a partial one.

use super::types::NetworkSnapshot;
use std::sync::{Arc, PoisonError, RwLock};

#[derive(Debug, Default)]
pub struct SnapshotStore {
    current: RwLock<Option<Arc<NetworkSnapshot>>>,
}

impl SnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Publish a new snapshot, returning the one it superseded
    pub fn replace(&self, snapshot: impl Into<Arc<NetworkSnapshot>>) -> Option<Arc<NetworkSnapshot>> {
        let snapshot = snapshot.into();
        let mut current = self.current.write().unwrap_or_else(PoisonError::into_inner);
        current.replace(snapshot)
    }

    /// The latest published snapshot, if any pass has completed
    pub fn current(&self) -> Option<Arc<NetworkSnapshot>> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}
