//! Runtime configuration.
//!
//! Defaults are compiled in. A JSON object stored under
//! [`CONFIG_OVERRIDE_KEY`] in `localStorage` overrides individual fields.

use crate::domain::logging::{LogComponent, get_logger};
use crate::domain::portfolio::KeyValueStore;
use crate::domain::search::DEFAULT_MIN_QUERY_LEN;
use serde::{Deserialize, Serialize};

pub const CONFIG_OVERRIDE_KEY: &str = "token_portfolio_config";
pub const DEFAULT_STORAGE_KEY: &str = "persist:root";
pub const DEFAULT_API_BASE: &str = "https://api.coingecko.com/api/v3";
pub const DEFAULT_PAGE_SIZE: usize = 10;

/// Bounded exponential backoff for retryable request failures
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RetryPolicy {
    pub max_retries: u32,
    pub base_delay_ms: u32,
    pub max_delay_ms: u32,
}

impl Default for RetryPolicy {
    fn default() -> Self {
        Self {
            max_retries: 2,
            base_delay_ms: 500,
            max_delay_ms: 5_000,
        }
    }
}

impl RetryPolicy {
    pub fn none() -> Self {
        Self {
            max_retries: 0,
            ..Self::default()
        }
    }

    /// Delay before retry number `attempt` (0-based): base * 2^attempt, capped.
    pub fn delay_for(&self, attempt: u32) -> u32 {
        let factor = 1u32.checked_shl(attempt).unwrap_or(u32::MAX);
        self.base_delay_ms.saturating_mul(factor).min(self.max_delay_ms)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub api_base_url: String,
    pub vs_currency: String,
    pub page_size: usize,
    pub min_query_len: usize,
    pub request_timeout_ms: u32,
    pub retry: RetryPolicy,
    pub storage_key: String,
    pub supported_chain_ids: Vec<u64>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE.to_string(),
            vs_currency: "usd".to_string(),
            page_size: DEFAULT_PAGE_SIZE,
            min_query_len: DEFAULT_MIN_QUERY_LEN,
            request_timeout_ms: 15_000,
            retry: RetryPolicy::default(),
            storage_key: DEFAULT_STORAGE_KEY.to_string(),
            // mainnet, optimism, polygon, arbitrum, base
            supported_chain_ids: vec![1, 10, 137, 42161, 8453],
        }
    }
}

impl AppConfig {
    /// Parse an override blob. Missing fields keep their defaults; a
    /// malformed blob falls back to the defaults entirely.
    pub fn from_override_json(raw: Option<&str>) -> Self {
        let config = match raw {
            None => Self::default(),
            Some(raw) => match serde_json::from_str::<AppConfig>(raw) {
                Ok(config) => config,
                Err(e) => {
                    get_logger().warn(
                        LogComponent::Application("Config"),
                        &format!("Ignoring malformed config override: {}", e),
                    );
                    Self::default()
                }
            },
        };
        config.sanitized()
    }

    pub fn load(store: &impl KeyValueStore) -> Self {
        match store.get(CONFIG_OVERRIDE_KEY) {
            Ok(raw) => Self::from_override_json(raw.as_deref()),
            Err(e) => {
                get_logger().warn(
                    LogComponent::Application("Config"),
                    &format!("Config override unreadable, using defaults: {}", e),
                );
                Self::default()
            }
        }
    }

    fn sanitized(mut self) -> Self {
        if self.page_size == 0 {
            self.page_size = DEFAULT_PAGE_SIZE;
        }
        if self.min_query_len == 0 {
            self.min_query_len = DEFAULT_MIN_QUERY_LEN;
        }
        self.api_base_url = self.api_base_url.trim_end_matches('/').to_string();
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backoff_doubles_and_caps() {
        let policy = RetryPolicy::default();
        assert_eq!(policy.delay_for(0), 500);
        assert_eq!(policy.delay_for(1), 1_000);
        assert_eq!(policy.delay_for(3), 4_000);
        assert_eq!(policy.delay_for(4), 5_000);
        assert_eq!(policy.delay_for(40), 5_000);
    }

    #[test]
    fn partial_override_keeps_other_defaults() {
        let config = AppConfig::from_override_json(Some(r#"{"page_size": 25, "api_base_url": "http://localhost:9000/"}"#));
        assert_eq!(config.page_size, 25);
        assert_eq!(config.api_base_url, "http://localhost:9000");
        assert_eq!(config.storage_key, DEFAULT_STORAGE_KEY);
        assert_eq!(config.retry, RetryPolicy::default());
    }

    #[test]
    fn malformed_or_zero_values_fall_back() {
        assert_eq!(AppConfig::from_override_json(Some("{not json")), AppConfig::default());
        assert_eq!(AppConfig::from_override_json(Some(r#"{"page_size": 0}"#)).page_size, DEFAULT_PAGE_SIZE);
    }
}
