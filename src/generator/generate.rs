//! ID generation logic
//!
//! Reads the clock, takes a sequence ticket, resolves the machine id and packs
//! the three fields.

use super::machine::resolve_machine_id;
use super::time::{time_since_epoch, Clock};
use super::SnowflakeId;

impl<C: Clock> SnowflakeId<C> {
    /// Generate a new Snowflake ID
    ///
    /// `machine_id` is reduced modulo 1024; `None` means machine id 1.
    /// Never fails and never blocks.
    #[inline]
    pub fn generate(&self, machine_id: Option<i64>) -> u64 {
        let timestamp = self.now_ms();
        let sequence = self.sequence.next();
        Self::assemble_id(timestamp, resolve_machine_id(machine_id), sequence)
    }

    /// Milliseconds since the configured epoch, as of now
    #[inline(always)]
    pub fn now_ms(&self) -> i64 {
        time_since_epoch(self.clock.now(), self.config.epoch())
    }
}

impl<C> SnowflakeId<C> {
    /// Pack the three fields into one id
    ///
    /// Trusts `machine_id` and `sequence` to already fit their widths. A
    /// negative timestamp wraps in two's complement.
    #[inline(always)]
    pub const fn assemble_id(timestamp: i64, machine_id: u16, sequence: u16) -> u64 {
        ((timestamp as u64) << Self::TIMESTAMP_SHIFT)
            | ((machine_id as u64) << Self::MACHINE_SHIFT)
            | (sequence as u64)
    }
}
