//! Time utilities for Snowflake generation
//!
//! Provides wall-clock time in milliseconds since a custom epoch

use chrono::{DateTime, Utc};

/// Source of wall-clock time for a generator
pub trait Clock: Send + Sync {
    /// Current wall-clock instant
    fn now(&self) -> DateTime<Utc>;
}

/// The system wall clock
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[inline(always)]
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// Milliseconds since Unix epoch, rounding sub-millisecond micros half-up
#[inline(always)]
pub fn unix_time_ms(now: DateTime<Utc>) -> i64 {
    let micros = i64::from(now.timestamp_subsec_micros());
    now.timestamp()
        .wrapping_mul(1000)
        .wrapping_add((micros + 500) / 1000)
}

/// Milliseconds since a custom epoch; negative before the epoch, never clamped
///
/// Wraps on overflow, so any epoch is accepted.
#[inline(always)]
pub fn time_since_epoch(now: DateTime<Utc>, epoch: i64) -> i64 {
    unix_time_ms(now).wrapping_sub(epoch)
}
