//! Bridge configuration and defaults

use std::time::Duration;

use reqwest::Url;
use tracing::warn;

use crate::types::BridgeError;

/// Environment variable holding the orchestrator base URL
pub const ORCHESTRATOR_URL_ENV: &str = "ORCHESTRATOR_URL";

/// Placeholder address used when `ORCHESTRATOR_URL` is not set.
/// Deployments are expected to set the variable explicitly.
pub const DEFAULT_ORCHESTRATOR_URL: &str = "http://192.168.68.42:3001";

/// How long a fetched tool catalog is served before refetching
pub const DEFAULT_CACHE_TTL_MS: u64 = 60_000;

/// Runtime configuration for the bridge
#[derive(Debug, Clone)]
pub struct BridgeConfig {
    /// Orchestrator base URL, without trailing slash
    pub orchestrator_url: String,
    /// Tool catalog time-to-live
    pub cache_ttl: Duration,
}

impl Default for BridgeConfig {
    fn default() -> Self {
        Self {
            orchestrator_url: DEFAULT_ORCHESTRATOR_URL.to_string(),
            cache_ttl: Duration::from_millis(DEFAULT_CACHE_TTL_MS),
        }
    }
}

impl BridgeConfig {
    /// Create a config with all defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve configuration from the process environment
    pub fn from_env() -> Result<Self, BridgeError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve configuration through an arbitrary variable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, BridgeError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let url = match lookup(ORCHESTRATOR_URL_ENV) {
            Some(url) if !url.trim().is_empty() => url,
            _ => {
                warn!(
                    "{} not set, falling back to {}",
                    ORCHESTRATOR_URL_ENV, DEFAULT_ORCHESTRATOR_URL
                );
                DEFAULT_ORCHESTRATOR_URL.to_string()
            }
        };

        Self::default().with_orchestrator_url(url)
    }

    /// Builder: set and validate the orchestrator base URL
    pub fn with_orchestrator_url(mut self, url: impl Into<String>) -> Result<Self, BridgeError> {
        let raw = url.into();
        let trimmed = raw.trim().trim_end_matches('/');

        let parsed = Url::parse(trimmed).map_err(|e| BridgeError::InvalidConfig {
            url: raw.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(BridgeError::InvalidConfig {
                url: raw,
                reason: format!("unsupported scheme '{}'", parsed.scheme()),
            });
        }

        self.orchestrator_url = trimmed.to_string();
        Ok(self)
    }

    /// Builder: set catalog time-to-live
    pub fn with_cache_ttl(mut self, ttl: Duration) -> Self {
        self.cache_ttl = ttl;
        self
    }
}
