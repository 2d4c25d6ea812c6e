//! # Search Filter
//!
//! A conjunction of independently optional criteria over framework records.
//! Omitted criteria do not constrain the result; an empty filter matches
//! every record. Deliberately a fixed criteria set, not an expression tree.

use chrono::NaiveDate;

use super::framework::{Framework, HypeLevel};

/// Optional search criteria, combined with AND logic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchFilter {
    /// Case-insensitive substring match against the record name
    pub name: Option<String>,
    /// Exact membership test against the record's version set
    pub version: Option<String>,
    /// Exact equality against the deprecation date; records without one
    /// never match a supplied date
    pub deprecation_date: Option<NaiveDate>,
    /// Exact equality against the hype level
    pub hype_level: Option<HypeLevel>,
}

impl SearchFilter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn name(mut self, needle: impl Into<String>) -> Self {
        self.name = Some(needle.into());
        self
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    pub fn deprecated_on(mut self, date: NaiveDate) -> Self {
        self.deprecation_date = Some(date);
        self
    }

    pub fn hype_level(mut self, level: HypeLevel) -> Self {
        self.hype_level = Some(level);
        self
    }

    /// True when no criterion is supplied.
    pub fn is_empty(&self) -> bool {
        self.name.is_none()
            && self.version.is_none()
            && self.deprecation_date.is_none()
            && self.hype_level.is_none()
    }

    /// Check if a record matches all supplied criteria.
    pub fn matches(&self, framework: &Framework) -> bool {
        if let Some(needle) = &self.name {
            if !framework
                .name
                .to_lowercase()
                .contains(&needle.to_lowercase())
            {
                return false;
            }
        }

        if let Some(version) = &self.version {
            if !framework.versions.contains(version) {
                return false;
            }
        }

        if let Some(date) = self.deprecation_date {
            if framework.deprecation_date != Some(date) {
                return false;
            }
        }

        if let Some(level) = self.hype_level {
            if framework.hype_level != level {
                return false;
            }
        }

        true
    }
}
