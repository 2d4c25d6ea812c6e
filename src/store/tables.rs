//! # Record Tables
//!
//! The canonical table shape shared by both store backends: an id-keyed
//! map of records plus the id sequence. `BTreeMap` keyed by ascending id
//! gives the stable scan order (insertion order) the store contract
//! promises. `next_id` only ever grows, so ids are never reused, even
//! across a snapshot reload.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::errors::{StoreError, StoreResult};
use crate::catalog::{Framework, FrameworkDraft, FrameworkId, SearchFilter};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub(crate) struct Tables {
    next_id: FrameworkId,
    rows: BTreeMap<FrameworkId, Framework>,
}

impl Tables {
    pub fn new() -> Self {
        Self {
            next_id: 1,
            rows: BTreeMap::new(),
        }
    }

    pub fn get_by_id(&self, id: FrameworkId) -> Option<Framework> {
        self.rows.get(&id).cloned()
    }

    pub fn get_by_name(&self, name: &str) -> Option<Framework> {
        self.rows.values().find(|f| f.name == name).cloned()
    }

    pub fn exists_by_id(&self, id: FrameworkId) -> bool {
        self.rows.contains_key(&id)
    }

    pub fn find_all(&self) -> Vec<Framework> {
        self.rows.values().cloned().collect()
    }

    pub fn find_matching(&self, filter: &SearchFilter) -> Vec<Framework> {
        self.rows
            .values()
            .filter(|f| filter.matches(f))
            .cloned()
            .collect()
    }

    pub fn insert(&mut self, draft: FrameworkDraft) -> Framework {
        let id = self.next_id;
        self.next_id += 1;

        let record = Framework::from_draft(id, draft);
        self.rows.insert(id, record.clone());
        record
    }

    pub fn update(&mut self, record: &Framework) -> StoreResult<()> {
        match self.rows.get_mut(&record.id) {
            Some(slot) => {
                *slot = record.clone();
                Ok(())
            }
            None => Err(StoreError::UnknownId(record.id)),
        }
    }

    pub fn delete_by_id(&mut self, id: FrameworkId) -> StoreResult<()> {
        match self.rows.remove(&id) {
            Some(_) => Ok(()),
            None => Err(StoreError::UnknownId(id)),
        }
    }
}
