//! # Catalog Service
//!
//! Enforces the catalog invariants and implements the domain operations
//! exposed to callers. The service holds no state of its own beyond the
//! store handle; every check-then-write runs inside a single exclusive
//! store write session, so the duplicate checks cannot race a concurrent
//! writer. The session guard is released on every exit path.

use std::sync::Arc;

use super::errors::{CatalogError, CatalogResult};
use super::framework::{Framework, FrameworkDraft, FrameworkId};
use super::search::SearchFilter;
use crate::store::CatalogStore;

/// Domain operations over the framework catalog.
pub struct CatalogService {
    store: Arc<dyn CatalogStore>,
}

impl CatalogService {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    /// True iff a framework with exactly this name is cataloged.
    pub fn exists(&self, name: &str) -> CatalogResult<bool> {
        Ok(self.store.get_by_name(name)?.is_some())
    }

    /// Catalog a new framework. The store assigns the id.
    pub fn create(&self, draft: FrameworkDraft) -> CatalogResult<Framework> {
        let mut txn = self.store.write()?;

        if txn.get_by_name(&draft.name)?.is_some() {
            return Err(CatalogError::DuplicateName(draft.name));
        }

        Ok(txn.insert(draft)?)
    }

    /// All cataloged frameworks, in stable store order.
    pub fn find_all(&self) -> CatalogResult<Vec<Framework>> {
        Ok(self.store.find_all()?)
    }

    /// Lookup by id. Absence is not a failure on this read path; the
    /// caller decides how to signal it.
    pub fn find_by_id(&self, id: FrameworkId) -> CatalogResult<Option<Framework>> {
        Ok(self.store.get_by_id(id)?)
    }

    /// Replace name, versions, deprecation date, and hype level wholesale.
    ///
    /// Name uniqueness is not re-checked when the name changes; a rename
    /// onto an existing name goes through. Known gap, kept as-is.
    pub fn update(&self, id: FrameworkId, draft: FrameworkDraft) -> CatalogResult<()> {
        let mut txn = self.store.write()?;

        if !txn.exists_by_id(id)? {
            return Err(CatalogError::NotFound(format!("id {}", id)));
        }

        txn.update(&Framework::from_draft(id, draft))?;
        Ok(())
    }

    /// Remove the record. Immediate and irreversible.
    pub fn delete(&self, id: FrameworkId) -> CatalogResult<()> {
        let mut txn = self.store.write()?;

        if !txn.exists_by_id(id)? {
            return Err(CatalogError::NotFound(format!("id {}", id)));
        }

        txn.delete_by_id(id)?;
        Ok(())
    }

    /// Append a version label to the named framework's version set.
    ///
    /// The stored set is replaced by a fresh copy with the label inserted;
    /// the fetched set is never mutated in place.
    pub fn add_version(&self, name: &str, version: &str) -> CatalogResult<()> {
        let mut txn = self.store.write()?;

        let record = txn
            .get_by_name(name)?
            .ok_or_else(|| CatalogError::NotFound(format!("name {}", name)))?;

        if record.versions.contains(version) {
            return Err(CatalogError::DuplicateVersion {
                name: record.name,
                version: version.to_string(),
            });
        }

        let mut versions = record.versions.clone();
        versions.insert(version.to_string());

        txn.update(&Framework { versions, ..record })?;
        Ok(())
    }

    /// Frameworks matching the conjunction of the supplied criteria.
    /// An empty filter returns every record, like [`Self::find_all`].
    pub fn search(&self, filter: &SearchFilter) -> CatalogResult<Vec<Framework>> {
        Ok(self.store.find_matching(filter)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::framework::HypeLevel;
    use crate::store::MemoryStore;

    fn service() -> CatalogService {
        CatalogService::new(Arc::new(MemoryStore::new()))
    }

    #[test]
    fn test_create_assigns_id_and_persists() {
        let service = service();

        let created = service
            .create(FrameworkDraft::new("React").hype_level(HypeLevel::High))
            .unwrap();

        assert_eq!(created.id, 1);
        let fetched = service.find_by_id(created.id).unwrap().unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_create_rejects_duplicate_name() {
        let service = service();
        service.create(FrameworkDraft::new("React")).unwrap();

        let err = service.create(FrameworkDraft::new("React")).unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateName(name) if name == "React"));
    }

    #[test]
    fn test_duplicate_name_check_is_case_sensitive() {
        let service = service();
        service.create(FrameworkDraft::new("React")).unwrap();

        // Uniqueness is case-sensitive; only substring search folds case
        service.create(FrameworkDraft::new("react")).unwrap();
    }

    #[test]
    fn test_update_unknown_id_is_not_found() {
        let service = service();

        let err = service.update(999, FrameworkDraft::new("React")).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
        assert!(service.find_all().unwrap().is_empty());
    }

    #[test]
    fn test_delete_unknown_id_is_not_found() {
        let service = service();

        let err = service.delete(999).unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_add_version_unknown_name_is_not_found() {
        let service = service();

        let err = service.add_version("React", "18.2.0").unwrap_err();
        assert!(matches!(err, CatalogError::NotFound(_)));
    }

    #[test]
    fn test_add_version_rejects_duplicate() {
        let service = service();
        service
            .create(FrameworkDraft::new("React").version("18.2.0"))
            .unwrap();

        let err = service.add_version("React", "18.2.0").unwrap_err();
        assert!(matches!(err, CatalogError::DuplicateVersion { .. }));
    }

    #[test]
    fn test_find_by_id_absence_is_not_an_error() {
        let service = service();
        assert!(service.find_by_id(999).unwrap().is_none());
    }
}
