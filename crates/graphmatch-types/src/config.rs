//! Configuration for matching stores.

use serde::{Deserialize, Serialize};

use crate::Result;

/// Tuning knobs for a `MatchingStore`.
///
/// Unknown fields are ignored, so documents written for older versions
/// still load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchingConfig {
    /// Run the invariant audit after every augment and log each violation.
    pub audit_on_augment: bool,
}

impl MatchingConfig {
    /// Parse a JSON config document.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Config with auditing switched on.
    #[must_use]
    pub fn audited() -> Self {
        Self {
            audit_on_augment: true,
        }
    }
}
