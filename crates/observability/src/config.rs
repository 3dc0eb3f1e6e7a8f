//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Env var selecting `json` (default) or `text` output.
pub const LOG_FORMAT_ENV: &str = "ERPCORE_LOG_FORMAT";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Json,
    Text,
}

impl LogFormat {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "text" | "plain" | "pretty" => Some(LogFormat::Text),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ObservabilityConfig {
    /// `EnvFilter` directive, e.g. `info` or `erpcore_infra=debug`.
    pub filter: String,
    pub format: LogFormat,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            filter: "info".to_string(),
            format: LogFormat::Json,
        }
    }
}

impl ObservabilityConfig {
    /// Read `RUST_LOG` and `ERPCORE_LOG_FORMAT`, falling back to defaults.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        Self {
            filter: lookup("RUST_LOG")
                .filter(|f| !f.trim().is_empty())
                .unwrap_or(defaults.filter),
            format: lookup(LOG_FORMAT_ENV)
                .and_then(|raw| LogFormat::parse(&raw))
                .unwrap_or(defaults.format),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = ObservabilityConfig::from_lookup(|_| None);
        assert_eq!(config, ObservabilityConfig::default());
    }

    #[test]
    fn reads_filter_and_format() {
        let config = ObservabilityConfig::from_lookup(|key| match key {
            "RUST_LOG" => Some("erpcore_infra=debug".into()),
            LOG_FORMAT_ENV => Some("Text".into()),
            _ => None,
        });

        assert_eq!(config.filter, "erpcore_infra=debug");
        assert_eq!(config.format, LogFormat::Text);
    }

    #[test]
    fn unknown_format_falls_back_to_json() {
        let config = ObservabilityConfig::from_lookup(|key| {
            (key == LOG_FORMAT_ENV).then(|| "xml".to_string())
        });
        assert_eq!(config.format, LogFormat::Json);
    }
}
