//! # Store Configuration
//!
//! Settings shared by both repositories of a [`Store`](crate::Store).
//!
//! ## Configuration Sources (Priority Order)
//! 1. Builder calls (`StoreConfig::new().default_limit(25)`)
//! 2. Environment variables (`SHOP_*`, via [`StoreConfig::from_env`])
//! 3. Defaults (this file)
//!
//! ## Thread Safety
//! The config is read-only once the store is built. Each repository keeps
//! its own copy, so no lock is involved.

use serde::{Deserialize, Serialize};
use shop_core::{AvailabilityPolicy, Page, DEFAULT_PAGE_LIMIT};

/// Environment variable overriding [`StoreConfig::default_limit`].
pub const ENV_DEFAULT_LIMIT: &str = "SHOP_DEFAULT_LIMIT";

/// Environment variable overriding [`StoreConfig::availability`].
pub const ENV_AVAILABILITY: &str = "SHOP_AVAILABILITY";

/// Store configuration.
///
/// ## Example
/// ```rust
/// use shop_core::AvailabilityPolicy;
/// use shop_store::StoreConfig;
///
/// let config = StoreConfig::new()
///     .default_limit(25)
///     .availability(AvailabilityPolicy::Snapshot);
///
/// assert_eq!(config.default_page().limit, 25);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoreConfig {
    /// Page size handed out by [`StoreConfig::default_page`].
    /// Default: 10
    pub default_limit: i64,

    /// How a new cart line's `available` flag is computed.
    /// Default: `TrackDeleted`
    pub availability: AvailabilityPolicy,
}

impl Default for StoreConfig {
    fn default() -> Self {
        StoreConfig {
            default_limit: DEFAULT_PAGE_LIMIT,
            availability: AvailabilityPolicy::default(),
        }
    }
}

impl StoreConfig {
    /// Creates a configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the default page size. Non-positive values are ignored.
    pub fn default_limit(mut self, limit: i64) -> Self {
        if limit > 0 {
            self.default_limit = limit;
        }
        self
    }

    /// Sets the availability policy for new cart lines.
    pub fn availability(mut self, policy: AvailabilityPolicy) -> Self {
        self.availability = policy;
        self
    }

    /// The first page with the configured size.
    pub fn default_page(&self) -> Page {
        Page::new(0, self.default_limit)
    }

    /// Creates a configuration from environment variables and defaults.
    ///
    /// ## Environment Variables
    /// - `SHOP_DEFAULT_LIMIT`: positive page size (e.g. "25")
    /// - `SHOP_AVAILABILITY`: `snapshot` or `track-deleted`
    ///
    /// Values that do not parse are ignored and the default is kept.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`StoreConfig::from_env`] but reads through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = StoreConfig::default();

        if let Some(limit) = lookup(ENV_DEFAULT_LIMIT) {
            if let Ok(limit) = limit.trim().parse::<i64>() {
                config = config.default_limit(limit);
            }
        }

        if let Some(policy) = lookup(ENV_AVAILABILITY) {
            if let Ok(policy) = policy.parse::<AvailabilityPolicy>() {
                config.availability = policy;
            }
        }

        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = StoreConfig::default();
        assert_eq!(config.default_limit, 10);
        assert_eq!(config.availability, AvailabilityPolicy::TrackDeleted);
        assert_eq!(config.default_page(), Page::default());
    }

    #[test]
    fn test_builder() {
        let config = StoreConfig::new()
            .default_limit(50)
            .availability(AvailabilityPolicy::Snapshot);

        assert_eq!(config.default_limit, 50);
        assert_eq!(config.availability, AvailabilityPolicy::Snapshot);

        // Zero would make every default page invalid
        assert_eq!(StoreConfig::new().default_limit(0).default_limit, 10);
    }

    #[test]
    fn test_from_lookup() {
        let config = StoreConfig::from_lookup(env(&[
            (ENV_DEFAULT_LIMIT, "25"),
            (ENV_AVAILABILITY, "snapshot"),
        ]));

        assert_eq!(config.default_limit, 25);
        assert_eq!(config.availability, AvailabilityPolicy::Snapshot);
    }

    #[test]
    fn test_from_lookup_ignores_garbage() {
        let config = StoreConfig::from_lookup(env(&[
            (ENV_DEFAULT_LIMIT, "lots"),
            (ENV_AVAILABILITY, "maybe"),
        ]));

        assert_eq!(config, StoreConfig::default());
    }
}
