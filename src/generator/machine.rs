//! Machine id resolution

/// Machine id used when the caller supplies no argument or a null one
pub const DEFAULT_MACHINE_ID: u16 = 1;

/// Number of distinct machine ids (10 bits)
pub const MACHINE_ID_MODULUS: i64 = 1 << 10;

/// Resolve an optional caller argument into a machine id in `[0, 1023]`
///
/// Negative arguments use the Euclidean remainder, so `-1` maps to `1023`.
#[inline(always)]
pub const fn resolve_machine_id(arg: Option<i64>) -> u16 {
    match arg {
        None => DEFAULT_MACHINE_ID,
        Some(v) => v.rem_euclid(MACHINE_ID_MODULUS) as u16,
    }
}
