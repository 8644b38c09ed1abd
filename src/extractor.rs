use chrono::{DateTime, Utc};

use crate::config::SnowflakeConfig;
use crate::SnowflakeId;

type Layout = SnowflakeId;

/// Snowflake ID component extractor
#[derive(Debug, Copy, Clone)]
pub struct SnowflakeExtractor {
    config: SnowflakeConfig,
}

impl SnowflakeExtractor {
    /// Create a new extractor for ids built against `config`
    pub fn new(config: SnowflakeConfig) -> Self {
        Self { config }
    }

    /// Extract timestamp component (ms since the configured epoch)
    #[inline(always)]
    pub fn timestamp(&self, id: u64) -> u64 {
        id >> Layout::TIMESTAMP_SHIFT
    }

    /// Extract machine id component
    #[inline(always)]
    pub fn machine_id(&self, id: u64) -> u16 {
        ((id >> Layout::MACHINE_SHIFT) & Layout::MAX_MACHINE_ID as u64) as u16
    }

    /// Extract sequence component
    #[inline(always)]
    pub fn sequence(&self, id: u64) -> u16 {
        (id & Layout::MAX_SEQUENCE as u64) as u16
    }

    /// Decompose an id into timestamp, machine id, and sequence
    #[inline]
    pub fn decompose(&self, id: u64) -> (u64, u16, u16) {
        (self.timestamp(id), self.machine_id(id), self.sequence(id))
    }

    /// Timestamp component read as signed, so pre-epoch ids decode negative
    ///
    /// Timestamps at or past 2^41 ms (about 69 years after the epoch) read as
    /// negative here; use [`timestamp`](Self::timestamp) for those.
    #[inline(always)]
    pub fn signed_timestamp(&self, id: u64) -> i64 {
        (id as i64) >> Layout::TIMESTAMP_SHIFT
    }

    /// Wall-clock instant encoded in the id, or `None` if out of range
    pub fn datetime(&self, id: u64) -> Option<DateTime<Utc>> {
        let millis = self.config.epoch().checked_add(self.signed_timestamp(id))?;
        DateTime::<Utc>::from_timestamp_millis(millis)
    }
}
