use thiserror::Error;

/// Represents errors that can occur while setting up a Snowflake generator
///
/// Generating an id never fails; only host registration can be rejected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SnowflakeError {
    /// Error when the host declares more than one argument for the function
    #[error("snowflake_id requires at most one integer argument for the machine id")]
    InvalidArity { arg_count: usize },
}
