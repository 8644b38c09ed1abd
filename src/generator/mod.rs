//! Core Snowflake generator implementation
//!
//! Split into modules for testability:
//! - `time` - Wall-clock time and epoch offset
//! - `machine` - Machine id resolution
//! - `sequence` - Rolling atomic sequence counter
//! - `generate` - ID assembly

mod generate;
mod machine;
mod sequence;
mod time;

use tracing::debug;

use crate::config::SnowflakeConfig;
use crate::extractor::SnowflakeExtractor;

pub use machine::{resolve_machine_id, DEFAULT_MACHINE_ID};
pub use sequence::SequenceCounter;
pub use time::{Clock, SystemClock};

/// Snowflake ID generator owning its sequence counter
///
/// Share one instance (e.g. behind an `Arc`) between every caller that must
/// draw from the same counter.
#[derive(Debug)]
#[repr(align(64))]
pub struct SnowflakeId<C = SystemClock> {
    // === Hot path fields ===
    pub(crate) sequence: SequenceCounter,
    clock: C,

    // === Cold path fields ===
    pub config: SnowflakeConfig,
    pub extract: SnowflakeExtractor,
}

impl<C> SnowflakeId<C> {
    pub const TIMESTAMP_BITS: u32 = 42;
    pub const MACHINE_BITS: u32 = 10;
    pub const SEQUENCE_BITS: u32 = SequenceCounter::SEQ_BITS;

    pub const MACHINE_SHIFT: u32 = Self::SEQUENCE_BITS;
    pub const TIMESTAMP_SHIFT: u32 = Self::MACHINE_BITS + Self::SEQUENCE_BITS;

    pub const MAX_MACHINE_ID: u16 = (1 << Self::MACHINE_BITS) - 1;
    pub const MAX_SEQUENCE: u16 = (1 << Self::SEQUENCE_BITS) - 1;

    /// Total sequence tickets handed out since creation
    #[inline]
    pub fn counter(&self) -> u64 {
        self.sequence.count()
    }

    /// The clock this generator reads
    #[inline]
    pub fn clock(&self) -> &C {
        &self.clock
    }
}

impl SnowflakeId<SystemClock> {
    /// Create with default configuration and the system clock
    pub fn new() -> Self {
        Self::with_config(SnowflakeConfig::default())
    }

    /// Create with custom configuration and the system clock
    pub fn with_config(config: SnowflakeConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl Default for SnowflakeId<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> SnowflakeId<C> {
    /// Create with custom configuration and clock
    pub fn with_clock(config: SnowflakeConfig, clock: C) -> Self {
        Self::with_initial_sequence(config, clock, 0)
    }

    /// Create with the sequence counter starting at `start`
    pub fn with_initial_sequence(config: SnowflakeConfig, clock: C, start: u64) -> Self {
        debug!(epoch = config.epoch(), start, "snowflake generator created");
        Self {
            sequence: SequenceCounter::new(start),
            clock,
            config,
            extract: SnowflakeExtractor::new(config),
        }
    }
}
