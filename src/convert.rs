//! Tick-to-nanosecond conversion in wide intermediate arithmetic.
//!
//! All conversions multiply fully before dividing: the product
//! `elapsed_ticks * numer` is formed in `u128`, then divided once by
//! `denom * count`. Dividing first would lose precision for small per-call
//! costs; the 128-bit intermediate holds the full product even when both
//! factors are near `u64::MAX` / `u32::MAX`.
//!
//! Results round down (integer division) and saturate to [`u64::MAX`] when
//! the true quotient exceeds the return type. Saturation is defined
//! behavior, not an error.

use crate::clock::Timebase;

/// Convert elapsed ticks to per-call nanoseconds for `count` calls.
///
/// Computes `elapsed_ticks * timebase.numer / (timebase.denom * count)`
/// with a 128-bit intermediate, rounding down. Returns `0` when `count`
/// is zero, and [`u64::MAX`] when the quotient does not fit in 64 bits.
///
/// # Panics
///
/// Panics if `timebase.denom` is zero. A zero denominator means the ratio
/// was never validly obtained; continuing would corrupt every result.
///
/// # Example
///
/// ```
/// use tarebench::{convert::per_call_ns, Timebase};
///
/// // 24 MHz Apple-style timebase: 125 ns per 3 ticks.
/// let tb = Timebase { numer: 125, denom: 3 };
/// assert_eq!(per_call_ns(24_000, 1_000, tb), 1_000);
/// ```
pub fn per_call_ns(elapsed_ticks: u64, count: u64, timebase: Timebase) -> u64 {
    assert_ne!(timebase.denom, 0, "tick ratio has a zero denominator");
    if count == 0 {
        return 0;
    }
    let numer = u128::from(elapsed_ticks) * u128::from(timebase.numer);
    let denom = u128::from(timebase.denom) * u128::from(count);
    saturate(numer / denom)
}

/// Convert elapsed ticks to total nanoseconds.
///
/// Equivalent to [`per_call_ns`] with `count == 1`.
#[inline]
pub fn ticks_to_ns(elapsed_ticks: u64, timebase: Timebase) -> u64 {
    per_call_ns(elapsed_ticks, 1, timebase)
}

/// Clamp a wide quotient into the `u64` result range.
#[inline]
fn saturate(value: u128) -> u64 {
    if value > u128::from(u64::MAX) {
        u64::MAX
    } else {
        value as u64
    }
}
