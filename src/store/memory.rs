//! # In-Memory Store
//!
//! [`CatalogStore`] backend holding all records in process memory behind a
//! `RwLock`. Readers share the lock; a write session holds the write half
//! for its whole lifetime, which is what serializes check-then-write
//! windows for the service.

use parking_lot::{RwLock, RwLockWriteGuard};

use super::errors::StoreResult;
use super::tables::Tables;
use super::{CatalogStore, StoreWrite};
use crate::catalog::{Framework, FrameworkDraft, FrameworkId, SearchFilter};

/// In-memory catalog storage.
pub struct MemoryStore {
    tables: RwLock<Tables>,
}

impl MemoryStore {
    /// Create a new, empty store.
    pub fn new() -> Self {
        Self {
            tables: RwLock::new(Tables::new()),
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore for MemoryStore {
    fn get_by_id(&self, id: FrameworkId) -> StoreResult<Option<Framework>> {
        Ok(self.tables.read().get_by_id(id))
    }

    fn get_by_name(&self, name: &str) -> StoreResult<Option<Framework>> {
        Ok(self.tables.read().get_by_name(name))
    }

    fn exists_by_id(&self, id: FrameworkId) -> StoreResult<bool> {
        Ok(self.tables.read().exists_by_id(id))
    }

    fn find_all(&self) -> StoreResult<Vec<Framework>> {
        Ok(self.tables.read().find_all())
    }

    fn find_matching(&self, filter: &SearchFilter) -> StoreResult<Vec<Framework>> {
        Ok(self.tables.read().find_matching(filter))
    }

    fn write(&self) -> StoreResult<Box<dyn StoreWrite + '_>> {
        Ok(Box::new(MemoryWrite {
            guard: self.tables.write(),
        }))
    }
}

/// Write session over [`MemoryStore`]. Mutations apply directly to the
/// tables under the held guard.
struct MemoryWrite<'a> {
    guard: RwLockWriteGuard<'a, Tables>,
}

impl StoreWrite for MemoryWrite<'_> {
    fn get_by_id(&self, id: FrameworkId) -> StoreResult<Option<Framework>> {
        Ok(self.guard.get_by_id(id))
    }

    fn get_by_name(&self, name: &str) -> StoreResult<Option<Framework>> {
        Ok(self.guard.get_by_name(name))
    }

    fn exists_by_id(&self, id: FrameworkId) -> StoreResult<bool> {
        Ok(self.guard.exists_by_id(id))
    }

    fn insert(&mut self, draft: FrameworkDraft) -> StoreResult<Framework> {
        Ok(self.guard.insert(draft))
    }

    fn update(&mut self, record: &Framework) -> StoreResult<()> {
        self.guard.update(record)
    }

    fn delete_by_id(&mut self, id: FrameworkId) -> StoreResult<()> {
        self.guard.delete_by_id(id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::StoreError;

    #[test]
    fn test_write_session_reads_see_pending_state() {
        let store = MemoryStore::new();

        let mut txn = store.write().unwrap();
        let created = txn.insert(FrameworkDraft::new("React")).unwrap();

        assert!(txn.exists_by_id(created.id).unwrap());
        assert_eq!(txn.get_by_id(created.id).unwrap(), Some(created.clone()));
        assert_eq!(
            txn.get_by_name("React").unwrap().map(|f| f.id),
            Some(created.id)
        );
    }

    #[test]
    fn test_reads_after_session_drop_observe_mutations() {
        let store = MemoryStore::new();

        {
            let mut txn = store.write().unwrap();
            txn.insert(FrameworkDraft::new("React")).unwrap();
        }

        assert_eq!(store.find_all().unwrap().len(), 1);
    }

    #[test]
    fn test_delete_then_get_is_absent() {
        let store = MemoryStore::new();

        let id = {
            let mut txn = store.write().unwrap();
            txn.insert(FrameworkDraft::new("React")).unwrap().id
        };

        {
            let mut txn = store.write().unwrap();
            txn.delete_by_id(id).unwrap();
        }

        assert!(store.get_by_id(id).unwrap().is_none());
    }

    #[test]
    fn test_unknown_id_errors_pass_through() {
        let store = MemoryStore::new();
        let mut txn = store.write().unwrap();

        let err = txn.delete_by_id(999).unwrap_err();
        assert!(matches!(err, StoreError::UnknownId(999)));
    }
}
