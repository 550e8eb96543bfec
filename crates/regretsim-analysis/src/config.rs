//! Client configuration.
//!
//! Read from the environment:
//! - `REGRETSIM_ANALYSIS_URL`: service base URL (default: "http://localhost:54321")
//! - `REGRETSIM_ANALYSIS_KEY`: bearer key (default: none)
//! - `REGRETSIM_ANALYSIS_TIMEOUT_MS`: request timeout (default: 30000)

use serde::{Deserialize, Serialize};

use crate::error::{AnalysisError, AnalysisResult};

pub const URL_VAR: &str = "REGRETSIM_ANALYSIS_URL";
pub const KEY_VAR: &str = "REGRETSIM_ANALYSIS_KEY";
pub const TIMEOUT_VAR: &str = "REGRETSIM_ANALYSIS_TIMEOUT_MS";

/// Path of the analysis function under the base URL.
pub const ENDPOINT_PATH: &str = "/functions/v1/behavioral-analysis";

const DEFAULT_BASE_URL: &str = "http://localhost:54321";
const DEFAULT_TIMEOUT_MS: u64 = 30_000;

/// Configuration for [`AnalysisClient`](crate::client::AnalysisClient).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnalysisConfig {
    /// Service base URL, without the function path.
    pub base_url: String,
    /// Sent as `Authorization: Bearer <key>` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_key: Option<String>,
    pub timeout_ms: u64,
}

impl Default for AnalysisConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            api_key: None,
            timeout_ms: DEFAULT_TIMEOUT_MS,
        }
    }
}

impl AnalysisConfig {
    /// Build from `REGRETSIM_ANALYSIS_*` environment variables.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup. Unset keys keep their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let timeout_ms = match lookup(TIMEOUT_VAR) {
            Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
                log::warn!(
                    "Ignoring {}={:?}: not a number, using {}ms",
                    TIMEOUT_VAR,
                    raw,
                    defaults.timeout_ms
                );
                defaults.timeout_ms
            }),
            None => defaults.timeout_ms,
        };

        Self {
            base_url: lookup(URL_VAR).unwrap_or(defaults.base_url),
            api_key: lookup(KEY_VAR).filter(|k| !k.is_empty()),
            timeout_ms,
        }
    }

    pub fn validate(&self) -> AnalysisResult<()> {
        let url = self.base_url.trim();
        if url.is_empty() {
            return Err(AnalysisError::Config("base_url cannot be empty".to_string()));
        }
        if !(url.starts_with("http://") || url.starts_with("https://")) {
            return Err(AnalysisError::Config(format!(
                "base_url must be http(s), got `{}`",
                url
            )));
        }
        if matches!(&self.api_key, Some(k) if k.trim().is_empty()) {
            return Err(AnalysisError::Config("api_key cannot be blank".to_string()));
        }
        if self.timeout_ms == 0 {
            return Err(AnalysisError::Config("timeout_ms must be > 0".to_string()));
        }
        Ok(())
    }

    /// Full URL of the analysis function.
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim().trim_end_matches('/'), ENDPOINT_PATH)
    }
}
