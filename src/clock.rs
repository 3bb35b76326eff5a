//! Monotonic tick source and tick-to-nanosecond ratio.
//!
//! Ticks are opaque, monotonically increasing readings from the host's
//! high-resolution clock. They are not guaranteed to be nanoseconds:
//! [`Timebase`] carries the numerator/denominator pair that converts them.
//!
//! Platform backends:
//! - **Apple** (macOS, iOS): `mach_absolute_time` ticks, converted through
//!   the ratio reported by `mach_timebase_info`.
//! - **Everything else**: nanoseconds elapsed since a process-local
//!   [`Instant`](std::time::Instant) anchor, with an identity ratio.

use serde::{Deserialize, Serialize};

/// Ratio converting raw clock ticks to nanoseconds.
///
/// A tick reading `t` corresponds to `t * numer / denom` nanoseconds. On
/// platforms where ticks already are nanoseconds this is [`Timebase::IDENTITY`].
///
/// The host ratio is queried once, during calibration, and cached in the
/// process-wide [`Calibration`](crate::Calibration) state; conversions never
/// re-query the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timebase {
    /// Ratio numerator. Never zero for a host-reported ratio.
    pub numer: u32,
    /// Ratio denominator. Never zero for a host-reported ratio.
    pub denom: u32,
}

impl Timebase {
    /// The 1:1 ratio used where ticks are already nanoseconds.
    pub const IDENTITY: Timebase = Timebase { numer: 1, denom: 1 };

    /// Query the host's tick-to-nanosecond ratio.
    ///
    /// # Panics
    ///
    /// On Apple targets, panics if `mach_timebase_info` fails or reports a
    /// zero denominator. A broken ratio would silently corrupt every
    /// measurement for the rest of the process lifetime, so this is treated
    /// as a fatal precondition failure rather than a recoverable error.
    pub fn query() -> Self {
        #[cfg(target_vendor = "apple")]
        {
            let mut info = libc::mach_timebase_info { numer: 0, denom: 0 };
            let kr = unsafe { libc::mach_timebase_info(&mut info) };
            assert_eq!(kr, libc::KERN_SUCCESS, "mach_timebase_info failed: {kr}");
            assert_ne!(info.denom, 0, "mach_timebase_info reported a zero denominator");
            Timebase {
                numer: info.numer,
                denom: info.denom,
            }
        }
        #[cfg(not(target_vendor = "apple"))]
        {
            Timebase::IDENTITY
        }
    }

    /// Whether this ratio leaves tick values unchanged.
    #[inline]
    pub fn is_identity(&self) -> bool {
        self.numer == self.denom
    }
}

impl Default for Timebase {
    fn default() -> Self {
        Timebase::IDENTITY
    }
}

/// Read the monotonic clock in raw ticks.
///
/// Readings are comparable and subtractable only against other readings from
/// the same process. Convert differences to nanoseconds with
/// [`convert::ticks_to_ns`](crate::convert::ticks_to_ns) and the ratio from
/// [`Timebase::query`].
#[inline]
pub fn ticks() -> u64 {
    #[cfg(target_vendor = "apple")]
    {
        unsafe { libc::mach_absolute_time() }
    }
    #[cfg(not(target_vendor = "apple"))]
    {
        use std::sync::OnceLock;
        use std::time::Instant;

        static START: OnceLock<Instant> = OnceLock::new();
        START.get_or_init(Instant::now).elapsed().as_nanos() as u64
    }
}
