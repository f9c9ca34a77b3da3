//! Process configuration, read once at startup.

use sloth_quotes::CloudflareConfig;

pub const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
pub const DEFAULT_STAGE: &str = "dev";
pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Settings for the quote API process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Listen address for the local HTTP adapter (`BIND_ADDR`).
    pub bind_addr: String,
    /// Deployment stage name (`STAGE`), logged at startup.
    pub stage: String,
    /// Fallback log filter when `RUST_LOG` is unset (`LOG_LEVEL`).
    pub log_level: String,
    pub cloudflare: CloudflareConfig,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            stage: DEFAULT_STAGE.to_string(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            cloudflare: CloudflareConfig::default(),
        }
    }
}

impl ApiConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str, default: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_else(|| default.to_string())
        };

        Self {
            bind_addr: get("BIND_ADDR", DEFAULT_BIND_ADDR),
            stage: get("STAGE", DEFAULT_STAGE),
            // LOG_LEVEL is conventionally upper-case (DEBUG, INFO); EnvFilter wants lower.
            log_level: get("LOG_LEVEL", DEFAULT_LOG_LEVEL).to_lowercase(),
            cloudflare: CloudflareConfig::from_lookup(&lookup),
        }
    }
}
