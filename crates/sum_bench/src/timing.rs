// Wall-clock timing around a single call.

use std::hint::black_box;
use std::time::{Duration, Instant};

/// A value together with how long it took to produce.
#[derive(Debug)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

/// Reads the clock, runs `f`, and reads the clock again.
///
/// The result goes through `black_box` so the call is not optimized away
/// even when the caller ignores the value.
pub fn time_call<T>(f: impl FnOnce() -> T) -> Timed<T> {
    let start = Instant::now();
    let value = black_box(f());
    let elapsed = start.elapsed();

    Timed { value, elapsed }
}

/// The benchmark's one line of output, e.g. `Time Elapsed: 0.000001 sec`.
pub fn elapsed_line(elapsed: Duration) -> String {
    format!("Time Elapsed: {} sec", elapsed.as_secs_f64())
}
