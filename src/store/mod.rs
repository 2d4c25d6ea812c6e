//! # Catalog Store
//!
//! Keyed persistence for framework records, with no domain-level
//! validation. Two media satisfy the contract: an in-memory table
//! ([`MemoryStore`]) and a write-through JSON snapshot on disk
//! ([`SnapshotStore`]).
//!
//! Reads are individually atomic point-in-time views. Writes go through an
//! exclusive write session acquired with [`CatalogStore::write`]; the
//! session serializes check-then-write windows for callers and is released
//! when the guard drops, on every exit path.

mod errors;
mod memory;
mod snapshot;
mod tables;

pub use errors::{StoreError, StoreResult};
pub use memory::MemoryStore;
pub use snapshot::SnapshotStore;

use crate::catalog::{Framework, FrameworkDraft, FrameworkId, SearchFilter};

/// Keyed storage for framework records.
///
/// Wrapped in `Arc<dyn CatalogStore>` for sharing across the service and
/// the transport layer.
pub trait CatalogStore: Send + Sync {
    /// Lookup by id.
    fn get_by_id(&self, id: FrameworkId) -> StoreResult<Option<Framework>>;

    /// Lookup by name. Exact match.
    fn get_by_name(&self, name: &str) -> StoreResult<Option<Framework>>;

    /// Check if an id exists without returning the record.
    fn exists_by_id(&self, id: FrameworkId) -> StoreResult<bool>;

    /// All records, in stable order (ascending id = insertion order).
    fn find_all(&self) -> StoreResult<Vec<Framework>>;

    /// Records matching the filter conjunction, in [`Self::find_all`] order.
    fn find_matching(&self, filter: &SearchFilter) -> StoreResult<Vec<Framework>>;

    /// Acquire an exclusive write session.
    fn write(&self) -> StoreResult<Box<dyn StoreWrite + '_>>;
}

/// Exclusive write session over a store.
///
/// Reads through the session observe state as of the session, so a
/// check made here cannot be invalidated by a concurrent writer before
/// the matching mutation lands. Each mutation is atomic with respect to
/// a single record: it either fully applies or leaves the store unchanged.
pub trait StoreWrite {
    /// Lookup by id, observing session state.
    fn get_by_id(&self, id: FrameworkId) -> StoreResult<Option<Framework>>;

    /// Lookup by name, observing session state. Exact match.
    fn get_by_name(&self, name: &str) -> StoreResult<Option<Framework>>;

    /// Check if an id exists, observing session state.
    fn exists_by_id(&self, id: FrameworkId) -> StoreResult<bool>;

    /// Persist a new record, assigning the next id.
    fn insert(&mut self, draft: FrameworkDraft) -> StoreResult<Framework>;

    /// Replace all fields of the record with this id.
    /// Fails with [`StoreError::UnknownId`] if the id does not exist.
    fn update(&mut self, record: &Framework) -> StoreResult<()>;

    /// Remove the record with this id.
    /// Fails with [`StoreError::UnknownId`] if the id does not exist.
    fn delete_by_id(&mut self, id: FrameworkId) -> StoreResult<()>;
}
