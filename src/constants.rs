//! Fixed tuning constants.

/// Iterations of the no-op loop in the calibration pass.
///
/// Ten million iterations amortize clock-read granularity and
/// branch-prediction warm-up down to well under a nanosecond of error on
/// the per-iteration estimate.
pub const CALIBRATION_ITERATIONS: usize = 10_000_000;
