//! # Response Bodies
//!
//! Outbound wire shape of a framework record, camelCase to match the
//! inbound payloads.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::{Framework, FrameworkId, HypeLevel};

/// Wire representation of a persisted framework record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkBody {
    pub id: FrameworkId,
    pub name: String,
    pub version: BTreeSet<String>,
    pub deprecation_date: Option<NaiveDate>,
    pub hype_level: HypeLevel,
}

impl From<Framework> for FrameworkBody {
    fn from(framework: Framework) -> Self {
        Self {
            id: framework.id,
            name: framework.name,
            version: framework.versions,
            deprecation_date: framework.deprecation_date,
            hype_level: framework.hype_level,
        }
    }
}
