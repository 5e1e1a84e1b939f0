//! Caller-side instrumentation hooks.
//!
//! Timing is a cross-cutting concern and not part of the pricing
//! contract, so the kernel carries no timing code of its own. Callers
//! that want wall-clock measurements wrap the invocation explicitly.

use std::time::{Duration, Instant};

/// Runs `f` and returns its result together with the elapsed wall-clock
/// time.
///
/// # Examples
/// ```
/// use pricer_lattice::instrument::timed;
///
/// let (value, elapsed) = timed(|| 2 + 2);
/// assert_eq!(value, 4);
/// assert!(elapsed.as_nanos() < 1_000_000_000);
/// ```
pub fn timed<R, F: FnOnce() -> R>(f: F) -> (R, Duration) {
    let start = Instant::now();
    let result = f();
    (result, start.elapsed())
}
