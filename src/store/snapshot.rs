//! # Snapshot Store
//!
//! [`CatalogStore`] backend that keeps the tables in memory and writes a
//! full JSON snapshot to disk on every mutation, before the mutation is
//! acknowledged. The snapshot is written to a temp file, fsynced, then
//! renamed over the live file, so the file on disk is always a complete,
//! decodable state. A snapshot that fails to decode refuses to open.

use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use parking_lot::{RwLock, RwLockWriteGuard};

use super::errors::{StoreError, StoreResult};
use super::tables::Tables;
use super::{CatalogStore, StoreWrite};
use crate::catalog::{Framework, FrameworkDraft, FrameworkId, SearchFilter};

/// Catalog storage persisted as a JSON snapshot file.
#[derive(Debug)]
pub struct SnapshotStore {
    path: PathBuf,
    tables: RwLock<Tables>,
}

impl SnapshotStore {
    /// Open the store at `path`, loading the snapshot when one exists.
    pub fn open(path: impl Into<PathBuf>) -> StoreResult<Self> {
        let path = path.into();

        let tables = match fs::read(&path) {
            Ok(bytes) => serde_json::from_slice(&bytes)
                .map_err(|e| StoreError::Corrupt(format!("{}: {}", path.display(), e)))?,
            Err(e) if e.kind() == ErrorKind::NotFound => Tables::new(),
            Err(e) => return Err(e.into()),
        };

        Ok(Self {
            path,
            tables: RwLock::new(tables),
        })
    }

    /// Write `tables` to disk: temp file, fsync, rename.
    fn persist(path: &Path, tables: &Tables) -> StoreResult<()> {
        let bytes = serde_json::to_vec_pretty(tables)
            .map_err(|e| StoreError::Corrupt(e.to_string()))?;

        let tmp = path.with_extension("tmp");
        let mut file = File::create(&tmp)?;
        file.write_all(&bytes)?;
        file.sync_all()?;
        fs::rename(&tmp, path)?;

        tracing::debug!(path = %path.display(), "snapshot persisted");
        Ok(())
    }
}

impl CatalogStore for SnapshotStore {
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
        Ok(Box::new(SnapshotWrite {
            store: self,
            guard: self.tables.write(),
        }))
    }
}

/// Write session over [`SnapshotStore`].
///
/// Each mutation is applied to a scratch copy of the tables, persisted to
/// disk, and only then committed to memory. A persistence failure leaves
/// both memory and disk at the pre-mutation state.
struct SnapshotWrite<'a> {
    store: &'a SnapshotStore,
    guard: RwLockWriteGuard<'a, Tables>,
}

impl SnapshotWrite<'_> {
    fn apply<T>(
        &mut self,
        mutate: impl FnOnce(&mut Tables) -> StoreResult<T>,
    ) -> StoreResult<T> {
        let mut next = self.guard.clone();
        let out = mutate(&mut next)?;

        SnapshotStore::persist(&self.store.path, &next)?;
        *self.guard = next;
        Ok(out)
    }
}

impl StoreWrite for SnapshotWrite<'_> {
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
        self.apply(|tables| Ok(tables.insert(draft)))
    }

    fn update(&mut self, record: &Framework) -> StoreResult<()> {
        self.apply(|tables| tables.update(record))
    }

    fn delete_by_id(&mut self, id: FrameworkId) -> StoreResult<()> {
        self.apply(|tables| tables.delete_by_id(id))
    }
}
