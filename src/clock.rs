//! High-resolution timestamps for script-side interval timing.

use std::sync::LazyLock;
use std::time::Instant;

/// Fixed epoch for `now_us`, taken the first time the clock is read
static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// Microseconds elapsed since the process-wide epoch, from a monotonic clock
pub fn now_us() -> f64 {
    EPOCH.elapsed().as_micros() as f64
}
