//! Rolling sequence counter
//!
//! One atomic per generator. Every call takes exactly one ticket; the ticket is
//! reduced to the sequence field width. The counter is never reset when the
//! timestamp advances.

use std::sync::atomic::{AtomicU64, Ordering};

/// Process-lifetime counter shared by every caller of one generator
#[derive(Debug, Default)]
pub struct SequenceCounter(AtomicU64);

impl SequenceCounter {
    /// Number of bits used for sequence
    pub const SEQ_BITS: u32 = 12;

    /// Mask to reduce a ticket into the sequence field
    pub const SEQ_MASK: u64 = (1 << Self::SEQ_BITS) - 1;

    /// Create a counter starting at `start`
    #[inline(always)]
    pub const fn new(start: u64) -> Self {
        Self(AtomicU64::new(start))
    }

    /// Take the next ticket and reduce it to a sequence number
    ///
    /// Relaxed ordering suffices: nothing else is published through the counter.
    #[inline(always)]
    pub fn next(&self) -> u16 {
        Self::reduce(self.0.fetch_add(1, Ordering::Relaxed))
    }

    /// Raw ticket count handed out so far (plus the starting value)
    #[inline(always)]
    pub fn count(&self) -> u64 {
        self.0.load(Ordering::Relaxed)
    }

    #[inline(always)]
    pub const fn reduce(ticket: u64) -> u16 {
        (ticket & Self::SEQ_MASK) as u16
    }
}
