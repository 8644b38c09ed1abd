//! Host function adapter
//!
//! Thin shim between a host that registers and calls scalar functions (a SQL
//! UDF loader, a scripting runtime) and the generator. Arity is checked once at
//! registration; calls never fail.

use once_cell::sync::Lazy;
use tracing::{debug, warn};

use crate::error::SnowflakeError;
use crate::generator::{Clock, SnowflakeId, SystemClock};

/// Maximum number of arguments the function accepts
pub const MAX_ARG_COUNT: usize = 1;

static PROCESS_GENERATOR: Lazy<SnowflakeId> = Lazy::new(SnowflakeId::new);

/// Generator shared by every caller in this process, created on first use
pub fn process_generator() -> &'static SnowflakeId {
    &PROCESS_GENERATOR
}

/// Generate an id from the process-wide generator
#[inline]
pub fn snowflake_id(machine_id: Option<i64>) -> u64 {
    PROCESS_GENERATOR.generate(machine_id)
}

/// Capability a host needs from a registered scalar function
pub trait HostFunction {
    /// Name the function is registered under
    const NAME: &'static str;

    /// Check the declared argument count before the function becomes callable
    fn validate_setup(arg_count: usize) -> Result<(), SnowflakeError>;

    /// Whether the host should expect NULL results
    fn declared_nullable() -> bool;

    /// Invoke the function with its optional argument
    fn call(&self, arg: Option<i64>) -> u64;
}

/// `snowflake_id([machine_id])` bound to a generator
#[derive(Debug)]
pub struct SnowflakeUdf<'a, C = SystemClock> {
    generator: &'a SnowflakeId<C>,
}

impl<'a, C: Clock> SnowflakeUdf<'a, C> {
    /// Validate `arg_count` and bind a callable function to `generator`
    pub fn register(
        arg_count: usize,
        generator: &'a SnowflakeId<C>,
    ) -> Result<Self, SnowflakeError> {
        Self::validate_setup(arg_count)?;
        debug!(name = Self::NAME, arg_count, "host function registered");
        Ok(Self { generator })
    }

    /// Generator this function draws from
    pub fn generator(&self) -> &'a SnowflakeId<C> {
        self.generator
    }
}

impl SnowflakeUdf<'static> {
    /// Register against the process-wide generator
    pub fn register_process(arg_count: usize) -> Result<Self, SnowflakeError> {
        Self::register(arg_count, process_generator())
    }
}

impl<C: Clock> HostFunction for SnowflakeUdf<'_, C> {
    const NAME: &'static str = "snowflake_id";

    fn validate_setup(arg_count: usize) -> Result<(), SnowflakeError> {
        if arg_count > MAX_ARG_COUNT {
            warn!(name = Self::NAME, arg_count, "rejected host function setup");
            return Err(SnowflakeError::InvalidArity { arg_count });
        }
        Ok(())
    }

    fn declared_nullable() -> bool {
        false
    }

    #[inline]
    fn call(&self, arg: Option<i64>) -> u64 {
        self.generator.generate(arg)
    }
}
