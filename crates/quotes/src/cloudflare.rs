//! Cloudflare-backed quote repository.
//!
//! Intended to use D1 for persistence and KV for caching. Neither is wired
//! up yet: reads return a fixed quote and writes succeed without storing
//! anything.

use serde::{Deserialize, Serialize};
use sloth_core::QuoteResult;

use crate::repository::QuoteRepository;

/// Quote returned by [`CloudflareQuoteRepository::random_quote`] until the
/// D1/KV lookup exists.
pub const PLACEHOLDER_QUOTE: &str =
    "\"The best way to predict the future is to create it.\" - Peter Drucker";

const ENV_ACCOUNT_ID: &str = "CLOUDFLARE_ACCOUNT_ID";
const ENV_API_TOKEN: &str = "CLOUDFLARE_API_TOKEN";
const ENV_KV_NAMESPACE_ID: &str = "CLOUDFLARE_KV_NAMESPACE_ID_QUOTES";
const ENV_D1_DATABASE_ID: &str = "CLOUDFLARE_D1_DATABASE_ID";
const ENV_D1_WORKER_URL: &str = "CLOUDFLARE_D1_WORKER_URL";

/// Connection settings for the Cloudflare account holding the quote store.
///
/// Every field defaults to an empty string.
#[derive(Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CloudflareConfig {
    pub account_id: String,
    pub api_token: String,
    /// KV namespace used as the quote cache.
    pub kv_namespace_id: String,
    /// D1 database holding persisted quotes.
    pub d1_database_id: String,
    /// Worker fronting D1 (e.g. `http://localhost:8787` in dev).
    pub d1_worker_url: String,
}

impl CloudflareConfig {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through `lookup`; missing or blank keys fall back to `""`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .filter(|v| !v.trim().is_empty())
                .unwrap_or_default()
        };
        Self {
            account_id: get(ENV_ACCOUNT_ID),
            api_token: get(ENV_API_TOKEN),
            kv_namespace_id: get(ENV_KV_NAMESPACE_ID),
            d1_database_id: get(ENV_D1_DATABASE_ID),
            d1_worker_url: get(ENV_D1_WORKER_URL),
        }
    }
}

impl core::fmt::Debug for CloudflareConfig {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let token = if self.api_token.is_empty() { "" } else { "<redacted>" };
        f.debug_struct("CloudflareConfig")
            .field("account_id", &self.account_id)
            .field("api_token", &token)
            .field("kv_namespace_id", &self.kv_namespace_id)
            .field("d1_database_id", &self.d1_database_id)
            .field("d1_worker_url", &self.d1_worker_url)
            .finish()
    }
}

/// Quote repository for Cloudflare D1 (storage) and KV (cache).
#[derive(Debug, Clone, Default)]
pub struct CloudflareQuoteRepository {
    config: CloudflareConfig,
}

impl CloudflareQuoteRepository {
    pub fn new(config: CloudflareConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &CloudflareConfig {
        &self.config
    }
}

impl QuoteRepository for CloudflareQuoteRepository {
    fn random_quote(&self, category: Option<&str>, length: Option<&str>) -> QuoteResult<String> {
        // TODO: query KV first, fall back to D1 through `d1_worker_url`.
        tracing::debug!(?category, ?length, "serving placeholder quote");
        Ok(PLACEHOLDER_QUOTE.to_string())
    }

    fn save_quote(&self, _text: &str, _author: &str, category: &str) -> QuoteResult<bool> {
        tracing::debug!(category, "quote persistence not wired; accepting");
        Ok(true)
    }
}
