use std::time::{Duration, Instant};
use tracing::info;

/// A value together with how long it took to produce.
#[derive(Debug, Clone, PartialEq)]
pub struct Timed<T> {
    pub value: T,
    pub elapsed: Duration,
}

impl<T> Timed<T> {
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Timed<U> {
        Timed {
            value: f(self.value),
            elapsed: self.elapsed,
        }
    }

    pub fn into_inner(self) -> T {
        self.value
    }
}

/// Run `operation` and measure its wall-clock time.
pub fn timed<T, F>(label: &str, operation: F) -> Timed<T>
where
    F: FnOnce() -> T,
{
    let start = Instant::now();
    let value = operation();
    let elapsed = start.elapsed();
    info!("⏱️ {} completed in {:?}", label, elapsed);
    Timed { value, elapsed }
}
