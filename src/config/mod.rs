//! Configuration for the Snowflake generator
//!
//! The bit layout is a fixed external format; only the epoch is tunable.

mod builder;

pub use builder::{SnowflakeConfigBuilder, TWITTER_EPOCH};

/// Configuration for the Snowflake generator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SnowflakeConfig {
    custom_epoch: i64,
}

impl SnowflakeConfig {
    pub(crate) const fn from_builder(b: SnowflakeConfigBuilder) -> Self {
        Self {
            custom_epoch: b.custom_epoch,
        }
    }

    /// Create a new configuration builder
    pub const fn builder() -> SnowflakeConfigBuilder {
        SnowflakeConfigBuilder::new()
    }

    /// Epoch in milliseconds since the Unix epoch
    #[inline(always)]
    pub const fn epoch(&self) -> i64 {
        self.custom_epoch
    }
}

impl Default for SnowflakeConfig {
    fn default() -> Self {
        SnowflakeConfigBuilder::new().build()
    }
}
