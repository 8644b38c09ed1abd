//! # snowflake-udf
//!
//! Snowflake ID generation as a host-callable scalar function.
//!
//! Each id is one `u64`:
//! - bits 63..22: milliseconds since the custom epoch (Twitter's by default)
//! - bits 21..12: machine id, the caller's argument modulo 1024 (default 1)
//! - bits 11..0: a rolling sequence counter shared by every caller of one
//!   generator, modulo 4096
//!
//! The sequence is not reset when the millisecond advances.
//!
//! ```
//! use snowflake_udf::SnowflakeId;
//!
//! let generator = SnowflakeId::new();
//! let id = generator.generate(Some(5));
//! assert_eq!(generator.extract.machine_id(id), 5);
//! assert_eq!(generator.extract.sequence(id), 0);
//! ```

#![forbid(unsafe_code)]

mod config;
mod error;
mod extractor;
mod generator;
pub mod host;

#[cfg(test)]
pub mod tests;

// Re-export main types
pub use config::{SnowflakeConfig, SnowflakeConfigBuilder, TWITTER_EPOCH};
pub use error::SnowflakeError;
pub use extractor::SnowflakeExtractor;
pub use generator::{
    resolve_machine_id, Clock, SequenceCounter, SnowflakeId, SystemClock, DEFAULT_MACHINE_ID,
};
pub use host::{process_generator, snowflake_id, HostFunction, SnowflakeUdf};
