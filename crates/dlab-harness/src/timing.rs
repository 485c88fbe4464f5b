use std::time::{Duration, Instant};

/// Minimal start/stop timer over the platform monotonic clock.
#[derive(Debug, Clone, Copy)]
pub struct Stopwatch {
    started: Instant,
}

impl Stopwatch {
    pub fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub fn stop(self) -> Duration {
        self.started.elapsed()
    }
}

/// Runs `f` once and returns its result with the elapsed time.
pub fn time<R>(f: impl FnOnce() -> R) -> (R, Duration) {
    let sw = Stopwatch::start();
    let out = f();
    (out, sw.stop())
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::{Stopwatch, time};

    #[test]
    fn stopwatch_measures_at_least_the_sleep() {
        let sw = Stopwatch::start();
        std::thread::sleep(Duration::from_millis(5));
        assert!(sw.stop() >= Duration::from_millis(5));
    }

    #[test]
    fn time_passes_result_through() {
        let (value, elapsed) = time(|| 6 * 7);
        assert_eq!(value, 42);
        assert!(elapsed < Duration::from_secs(5));
    }
}
