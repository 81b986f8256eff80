//! Configuration Module
//!
//! Construction-time options for an expiring cache.

use crate::cache::DEFAULT_TTL_SECS;
use crate::error::{CacheError, Result};

/// Cache construction options.
///
/// The sweep interval is not configurable on its own: it is frozen to the
/// value of `default_ttl` when the sweeper starts, and later changes to the
/// default TTL do not re-derive it.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// TTL in seconds applied to newly inserted keys
    pub default_ttl: u64,
}

impl CacheConfig {
    // == Constructor ==
    /// Creates a config with the given default TTL in seconds.
    pub fn new(default_ttl: u64) -> Self {
        Self { default_ttl }
    }

    // == Validate ==
    /// Rejects non-positive TTL values.
    ///
    /// A zero TTL would expire every entry the instant it is inserted and
    /// drive the sweeper in a busy loop, so it is refused here rather than
    /// accepted and worked around later.
    pub fn validate(&self) -> Result<()> {
        if self.default_ttl == 0 {
            return Err(CacheError::InvalidConfiguration(
                "default_ttl must be a positive number of seconds".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_ttl: DEFAULT_TTL_SECS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.default_ttl, DEFAULT_TTL_SECS);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_new() {
        let config = CacheConfig::new(300);
        assert_eq!(config.default_ttl, 300);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_config_rejects_zero_ttl() {
        let config = CacheConfig::new(0);
        let result = config.validate();
        assert!(matches!(result, Err(CacheError::InvalidConfiguration(_))));
    }
}
