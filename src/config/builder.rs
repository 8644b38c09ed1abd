//! SnowflakeConfig builder for constructing configuration

use super::SnowflakeConfig;

/// Twitter's epoch: 2010-11-04T01:42:54.657Z, in milliseconds since Unix epoch
pub const TWITTER_EPOCH: i64 = 1288834974657;

/// Builder for SnowflakeConfig
#[derive(Debug)]
pub struct SnowflakeConfigBuilder {
    pub(super) custom_epoch: i64,
}

impl SnowflakeConfigBuilder {
    /// Create a new SnowflakeConfigBuilder with default values
    pub const fn new() -> Self {
        Self {
            custom_epoch: TWITTER_EPOCH,
        }
    }

    /// Set a custom epoch in milliseconds since Unix epoch
    ///
    /// Ids built against different epochs are not comparable.
    pub const fn epoch(mut self, epoch: i64) -> Self {
        self.custom_epoch = epoch;
        self
    }

    /// Build the final SnowflakeConfig
    pub const fn build(self) -> SnowflakeConfig {
        SnowflakeConfig::from_builder(self)
    }
}

impl Default for SnowflakeConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}
