//! # tarebench
//!
//! Loop-overhead-corrected micro-benchmarking: the steady-state per-call
//! cost of a zero-argument function, in nanoseconds.
//!
//! [`measure`] runs a function `count` times back-to-back, converts the
//! elapsed monotonic-clock ticks to nanoseconds with a wide-precision ratio
//! conversion, and subtracts the *tare* - the calibrated fixed cost of the
//! measurement loop itself - so the result reflects the function, not the
//! bookkeeping around it.
//!
//! ## Quick Start
//!
//! ```
//! let ns = tarebench::measure(100_000, || {
//!     std::hint::black_box(42u64.wrapping_mul(31));
//! });
//! println!("multiply: ~{ns} ns/call");
//! ```
//!
//! ## Calibration
//!
//! The first measurement in a process runs a one-time calibration pass:
//! a no-op function through the identical timing loop for
//! [`CALIBRATION_ITERATIONS`] iterations (typically tens of milliseconds).
//! Calibration is concurrency-safe - racing first callers block until the
//! single pass completes - and the resulting [`Calibration`] state is
//! immutable for the rest of the process.
//!
//! ## ⚠️ Reading results near zero
//!
//! The loop-cost subtraction is a wrapping unsigned subtract. For functions
//! cheaper than the calibrated loop cost (or under scheduler noise during
//! calibration), the result can wrap to a value near [`u64::MAX`]. Results
//! vastly larger than [`Calibration::loop_cost_ns`] are measurement noise,
//! not a real cost.
//!
//! ## What this is not
//!
//! No statistics (variance, percentiles), no core pinning, no protection
//! against functions whose cost drifts across iterations, no parallel
//! invocation of the function under test. This is the primitive other
//! tooling builds those on.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod calibrate;
mod clock;
mod constants;
pub mod convert;
mod measure;

pub use calibrate::{calibration, calibration_runs, try_calibration, Calibration};
pub use clock::{ticks, Timebase};
pub use constants::CALIBRATION_ITERATIONS;
pub use measure::{measure, measure_with};
