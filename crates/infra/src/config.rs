//! Session configuration.

use serde::{Deserialize, Serialize};

/// Set to `false`/`0`/`no` to only resolve the account when creating titles.
pub const STRICT_REFERENCES_ENV: &str = "ERPCORE_STRICT_REFERENCES";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Resolve company and cost-center references on writes (`NotFound` if
    /// absent). The account is always resolved since posting needs its code.
    pub strict_references: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            strict_references: true,
        }
    }
}

impl SessionConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let strict_references = match lookup(STRICT_REFERENCES_ENV) {
            Some(raw) => !matches!(
                raw.trim().to_ascii_lowercase().as_str(),
                "false" | "0" | "no" | "off"
            ),
            None => Self::default().strict_references,
        };

        Self { strict_references }
    }
}
