//! # Request Payloads
//!
//! Inbound wire shapes and the validation applied before the service is
//! invoked. The service itself never sees an invalid name length.

use std::collections::BTreeSet;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::errors::{RestError, RestResult};
use crate::catalog::{FrameworkDraft, HypeLevel, SearchFilter};

/// Maximum framework name length accepted on the creation path.
pub const NAME_MAX_LEN: usize = 30;

/// Inbound framework record, camelCase on the wire.
///
/// `version` is the external name of the version set, kept for wire
/// compatibility with the original API.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FrameworkPayload {
    pub name: String,
    #[serde(default)]
    pub version: BTreeSet<String>,
    #[serde(default)]
    pub deprecation_date: Option<NaiveDate>,
    #[serde(default)]
    pub hype_level: HypeLevel,
}

impl FrameworkPayload {
    /// Validate the creation-path constraints on the payload.
    pub fn validate(&self) -> RestResult<()> {
        if self.name.is_empty() {
            return Err(RestError::InvalidBody("name must not be empty".to_string()));
        }
        if self.name.chars().count() > NAME_MAX_LEN {
            return Err(RestError::InvalidBody(format!(
                "name exceeds {} characters",
                NAME_MAX_LEN
            )));
        }
        Ok(())
    }

    /// Convert into the domain draft shape.
    pub fn into_draft(self) -> FrameworkDraft {
        FrameworkDraft {
            name: self.name,
            versions: self.version,
            deprecation_date: self.deprecation_date,
            hype_level: self.hype_level,
        }
    }
}

/// Search query parameters; every criterion is optional.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchParams {
    pub name: Option<String>,
    pub version: Option<String>,
    pub deprecation_date: Option<NaiveDate>,
    pub hype_level: Option<HypeLevel>,
}

impl SearchParams {
    /// Convert into the domain filter shape.
    pub fn into_filter(self) -> SearchFilter {
        SearchFilter {
            name: self.name,
            version: self.version,
            deprecation_date: self.deprecation_date,
            hype_level: self.hype_level,
        }
    }
}
