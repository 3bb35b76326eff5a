//! One-time calibration of the measurement loop's intrinsic cost.
//!
//! The timing loop has a fixed per-iteration overhead (counter increment,
//! branch, indirect call dispatch). Calibration estimates it once per
//! process by running a no-op function through the identical loop used for
//! real measurements, then every measurement subtracts it, isolating the
//! cost attributable to the function under test.
//!
//! The pass runs lazily on the first measurement and exactly once, however
//! many threads race to trigger it: publication goes through a
//! [`OnceLock`], so concurrent first callers block until the single pass
//! completes and then observe the fully written state.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::clock::Timebase;
use crate::constants::CALIBRATION_ITERATIONS;
use crate::{convert, measure};

static STATE: OnceLock<Calibration> = OnceLock::new();
static RUNS: AtomicUsize = AtomicUsize::new(0);

/// Process-wide calibration state.
///
/// Created by the first measurement, immutable for the rest of the process
/// lifetime. Obtain it through [`calibration`] or [`try_calibration`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Calibration {
    /// Tick-to-nanosecond ratio, queried from the host once during the
    /// calibration pass and reused by every later conversion.
    pub timebase: Timebase,
    /// Estimated fixed overhead per iteration of the measurement loop, in
    /// nanoseconds. Saturated to [`u64::MAX`] if the estimate overflows.
    pub loop_cost_ns: u64,
}

impl Calibration {
    /// Run one calibration pass.
    fn run() -> Self {
        let timebase = Timebase::query();
        let mut nop = || {};
        let elapsed = measure::timed_loop(CALIBRATION_ITERATIONS, &mut nop);
        let loop_cost_ns = convert::per_call_ns(elapsed, CALIBRATION_ITERATIONS as u64, timebase);
        Calibration {
            timebase,
            loop_cost_ns,
        }
    }
}

/// Get the calibration state, running the calibration pass if needed.
///
/// The first caller (across all threads) pays for one pass of
/// [`CALIBRATION_ITERATIONS`] no-op iterations, typically tens of
/// milliseconds. Every other caller returns immediately.
///
/// # Panics
///
/// Panics if the host tick-ratio query fails (see [`Timebase::query`]).
pub fn calibration() -> &'static Calibration {
    STATE.get_or_init(|| {
        RUNS.fetch_add(1, Ordering::Relaxed);
        Calibration::run()
    })
}

/// Get the calibration state without triggering calibration.
///
/// Returns `None` until some measurement (or [`calibration`]) has run the
/// pass.
pub fn try_calibration() -> Option<&'static Calibration> {
    STATE.get()
}

/// Number of completed calibration passes in this process: `0` or `1`.
///
/// Diagnostic counter for asserting the exactly-once property under
/// concurrency.
pub fn calibration_runs() -> usize {
    RUNS.load(Ordering::Relaxed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_calibration_is_stable() {
        let first = calibration();
        let second = calibration();
        assert!(std::ptr::eq(first, second));
        assert_eq!(first.loop_cost_ns, second.loop_cost_ns);
        assert_ne!(first.timebase.denom, 0);
    }

    #[test]
    fn test_try_calibration_observes_completed_state() {
        calibration();
        let cal = try_calibration().expect("calibration just completed");
        assert_eq!(cal.timebase, calibration().timebase);
    }

    #[test]
    fn test_loop_cost_is_plausible() {
        // A no-op iteration costs a few ns at most on anything modern; a
        // huge value here means the subtraction in `run` went wrong.
        let cal = calibration();
        assert!(
            cal.loop_cost_ns < 1_000,
            "implausible loop cost: {} ns",
            cal.loop_cost_ns
        );
    }
}
