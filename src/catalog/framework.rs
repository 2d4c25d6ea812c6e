//! # Framework Entity
//!
//! The catalog's sole entity and its hype level classification.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Identifier assigned by the store on insert. Never reused after delete.
pub type FrameworkId = u64;

/// Closed classification of a framework's popularity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum HypeLevel {
    #[default]
    None,
    Low,
    Medium,
    High,
    Insane,
}

impl HypeLevel {
    /// Wire name of the level.
    pub fn as_str(&self) -> &'static str {
        match self {
            HypeLevel::None => "NONE",
            HypeLevel::Low => "LOW",
            HypeLevel::Medium => "MEDIUM",
            HypeLevel::High => "HIGH",
            HypeLevel::Insane => "INSANE",
        }
    }
}

/// A persisted framework record.
///
/// `id` is set exactly once, by the store. `versions` has set semantics;
/// the ordered set keeps iteration deterministic across the crate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Framework {
    pub id: FrameworkId,
    pub name: String,
    pub versions: BTreeSet<String>,
    pub deprecation_date: Option<NaiveDate>,
    pub hype_level: HypeLevel,
}

impl Framework {
    /// Materialize a draft under a store-assigned id.
    pub fn from_draft(id: FrameworkId, draft: FrameworkDraft) -> Self {
        Self {
            id,
            name: draft.name,
            versions: draft.versions,
            deprecation_date: draft.deprecation_date,
            hype_level: draft.hype_level,
        }
    }
}

/// Field set of a framework before persistence (no id yet).
///
/// Also the replacement shape for update: all four fields are applied
/// wholesale, never merged field-by-field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FrameworkDraft {
    pub name: String,
    pub versions: BTreeSet<String>,
    pub deprecation_date: Option<NaiveDate>,
    pub hype_level: HypeLevel,
}

impl FrameworkDraft {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.versions.insert(version.into());
        self
    }

    pub fn deprecated_on(mut self, date: NaiveDate) -> Self {
        self.deprecation_date = Some(date);
        self
    }

    pub fn hype_level(mut self, level: HypeLevel) -> Self {
        self.hype_level = level;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hype_level_defaults_to_none() {
        assert_eq!(HypeLevel::default(), HypeLevel::None);
        assert_eq!(FrameworkDraft::new("React").hype_level, HypeLevel::None);
    }

    #[test]
    fn test_hype_level_wire_names() {
        let encoded = serde_json::to_string(&HypeLevel::Insane).unwrap();
        assert_eq!(encoded, "\"INSANE\"");
        assert_eq!(HypeLevel::Insane.as_str(), "INSANE");
        assert_eq!(HypeLevel::None.as_str(), "NONE");

        let decoded: HypeLevel = serde_json::from_str("\"MEDIUM\"").unwrap();
        assert_eq!(decoded, HypeLevel::Medium);

        // Lowercase names are not part of the wire format
        assert!(serde_json::from_str::<HypeLevel>("\"medium\"").is_err());
    }

    #[test]
    fn test_draft_versions_have_set_semantics() {
        let draft = FrameworkDraft::new("Vue.js")
            .version("v3.2.37")
            .version("v3.2.36")
            .version("v3.2.37");
        assert_eq!(draft.versions.len(), 2);
    }

    #[test]
    fn test_from_draft_carries_all_fields() {
        let date = NaiveDate::from_ymd_opt(2025, 6, 1).unwrap();
        let draft = FrameworkDraft::new("AngularJS")
            .version("1.8.3")
            .deprecated_on(date)
            .hype_level(HypeLevel::Low);

        let framework = Framework::from_draft(7, draft.clone());
        assert_eq!(framework.id, 7);
        assert_eq!(framework.name, "AngularJS");
        assert_eq!(framework.versions, draft.versions);
        assert_eq!(framework.deprecation_date, Some(date));
        assert_eq!(framework.hype_level, HypeLevel::Low);
    }
}
