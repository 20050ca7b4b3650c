//! Leading-edge throttling.

use std::time::{Duration, Instant};

/// ## Summary
/// Wraps a callable so it runs at most once per `limit` window.
///
/// The first call runs immediately and opens a window of length `limit`.
/// Calls arriving while the window is open are dropped: they are neither
/// queued nor replayed when the window closes. The first call after the
/// window has elapsed runs and opens the next window.
pub struct Throttle<F> {
    func: F,
    limit: Duration,
    window_start: Option<Instant>,
}

impl<F> Throttle<F> {
    #[must_use]
    pub fn new(func: F, limit: Duration) -> Self {
        Self {
            func,
            limit,
            window_start: None,
        }
    }

    /// ## Summary
    /// Invokes the wrapped callable unless the current window is still open.
    ///
    /// Returns `Some` with the callable's result when it ran, `None` when the
    /// call was dropped.
    pub fn call<A, R>(&mut self, args: A) -> Option<R>
    where
        F: FnMut(A) -> R,
    {
        let now = Instant::now();
        if self.is_open_at(now) {
            tracing::trace!(limit_ms = self.limit.as_millis(), "Throttled call dropped");
            return None;
        }

        self.window_start = Some(now);
        Some((self.func)(args))
    }

    /// Whether a call made right now would be dropped.
    #[must_use]
    pub fn is_throttled(&self) -> bool {
        self.is_open_at(Instant::now())
    }

    #[must_use]
    pub fn limit(&self) -> Duration {
        self.limit
    }

    fn is_open_at(&self, now: Instant) -> bool {
        self.window_start
            .is_some_and(|start| now.duration_since(start) < self.limit)
    }
}

/// Builds a [`Throttle`] around `func`.
#[must_use]
pub fn throttle<F>(func: F, limit: Duration) -> Throttle<F> {
    Throttle::new(func, limit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::thread;

    #[test_log::test]
    fn test_burst_runs_once() {
        let mut calls = 0;
        let mut throttled = throttle(|()| calls += 1, Duration::from_millis(200));

        assert_eq!(throttled.call(()), Some(()));
        assert_eq!(throttled.call(()), None);
        assert_eq!(throttled.call(()), None);
        drop(throttled);

        assert_eq!(calls, 1);
    }

    #[test]
    fn test_runs_again_after_window() {
        let mut seen = Vec::new();
        let limit = Duration::from_millis(30);
        let mut throttled = throttle(|value: u32| seen.push(value), limit);

        throttled.call(1);
        throttled.call(2);
        thread::sleep(limit + Duration::from_millis(20));
        throttled.call(3);
        throttled.call(4);
        drop(throttled);

        assert_eq!(seen, vec![1, 3]);
    }

    #[test]
    fn test_returns_result_of_executed_call() {
        let mut throttled = throttle(|x: i32| x * 2, Duration::from_secs(60));

        assert!(!throttled.is_throttled());
        assert_eq!(throttled.call(21), Some(42));
        assert!(throttled.is_throttled());
        assert_eq!(throttled.call(5), None);
        assert_eq!(throttled.limit(), Duration::from_secs(60));
    }
}
