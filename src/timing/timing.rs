use std::thread;
use std::time::{Duration, Instant};

use tracing::info;

use super::TimeUnit;

/// Blocks the current thread for `amount` of `unit`.
pub fn sleep(amount: u64, unit: TimeUnit) {
    thread::sleep(unit.to_duration(amount));
}

/// Formats `elapsed` as whole milliseconds, a dot, and the remaining nanoseconds padded to six
/// digits.
///
/// # Examples
/// ```
/// # use std::time::Duration;
/// # use functional_core::timing::format_elapsed;
/// assert_eq!(format_elapsed(Duration::from_nanos(12_000_345)), "12.000345");
/// ```
pub fn format_elapsed(elapsed: Duration) -> String {
    let nanos = elapsed.as_nanos();
    let per_milli = TimeUnit::Milliseconds.nanos();
    format!("{}.{:06}", nanos / per_milli, nanos % per_milli)
}

/// Runs `operation`, returning how long it took alongside its result.
pub fn time<R>(operation: impl FnOnce() -> R) -> (Duration, R) {
    let start = Instant::now();
    let result = operation();
    (start.elapsed(), result)
}

/// Runs `operation` and logs how long it took at the info level under `label`.
pub fn timed<R>(label: &str, operation: impl FnOnce() -> R) -> R {
    let (elapsed, result) = time(operation);
    info!(label = %label, elapsed = %format_elapsed(elapsed), "elapsed time in ms");
    result
}
